//! Customer lookup: query classification, dispatch, and outcome reduction.
//!
//! Every search attempt ends in exactly one [`SearchOutcome`], whether it
//! was rejected locally, answered by the service, or lost to the network.

pub mod classify;
pub mod client;
pub mod record;

use crate::search::record::CustomerRecord;

/// Shown when a search succeeds but matches nobody.
pub const NOT_FOUND_MESSAGE: &str = "Customer not found";

/// Shown when the request went out but no reply ever arrived.
pub const NO_RESPONSE_MESSAGE: &str = "Server not responding. Please try again later.";

/// Terminal result of one search attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// The service returned a matching customer profile.
    Found(CustomerRecord),
    /// The service answered successfully with an empty body.
    NotFound,
    /// The query was rejected locally and never sent.
    Invalid(String),
    /// The request produced no response at all.
    NetworkError,
    /// The service answered with an error, or the request could not be made.
    ServerError(String),
}

impl SearchOutcome {
    /// Short stable label for log output.
    pub fn kind(&self) -> &'static str {
        match self {
            SearchOutcome::Found(_) => "found",
            SearchOutcome::NotFound => "not-found",
            SearchOutcome::Invalid(_) => "invalid",
            SearchOutcome::NetworkError => "network-error",
            SearchOutcome::ServerError(_) => "server-error",
        }
    }
}
