//! Lookup dispatch against the customer-search service.
//!
//! One HTTP request per submitted search. Every failure mode is absorbed
//! into a [`SearchOutcome`] here; callers never see a transport error.

use crate::app::event::{AppEvent, SearchSeq};
use crate::config::ServiceConfig;
use crate::search::classify::SearchParam;
use crate::search::record::CustomerRecord;
use crate::search::SearchOutcome;
use anyhow::{Context, Result};
use reqwest::StatusCode;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Fixed fallback when an error response carries no usable `message`.
const SERVER_ERROR_FALLBACK: &str =
    "Customer not found. Please check your BVN or Phone Number and try again.";
/// Shown when the request could not even be constructed or sent.
const REQUEST_FAILED: &str = "Network error. Please check your connection.";
/// Shown when a successful response body does not decode as a profile.
const MALFORMED_RESPONSE: &str = "Unexpected response from the lookup service.";

/// Optional `message` field carried by error response bodies.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

pub struct SearchClient {
    http: reqwest::Client,
    search_url: String,
}

impl SearchClient {
    pub fn new(cfg: &ServiceConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = cfg.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build().context("Failed to create HTTP client")?;
        let search_url = format!("{}/customer/search", cfg.base_url.trim_end_matches('/'));
        Ok(Self { http, search_url })
    }

    /// Perform one lookup. Infallible by construction: every error path maps
    /// to an outcome variant.
    pub async fn lookup(&self, param: &SearchParam) -> SearchOutcome {
        let response = self
            .http
            .get(&self.search_url)
            .query(&[(param.key(), param.value())])
            .send()
            .await;

        match response {
            Ok(resp) => {
                let status = resp.status();
                match resp.text().await {
                    Ok(body) => reduce_response(status, &body),
                    Err(e) => {
                        tracing::warn!(error = %e, "lookup response body could not be read");
                        SearchOutcome::NetworkError
                    }
                }
            }
            Err(e) if e.is_builder() => {
                tracing::error!(error = %e, "lookup request could not be constructed");
                SearchOutcome::ServerError(REQUEST_FAILED.to_string())
            }
            Err(e) => {
                tracing::warn!(error = %e, "no response from lookup service");
                SearchOutcome::NetworkError
            }
        }
    }
}

/// Reduce a received response to an outcome. Pure over the status code and
/// body text so the whole mapping is testable without a running service.
fn reduce_response(status: StatusCode, body: &str) -> SearchOutcome {
    let body = body.trim();
    if status.is_success() {
        if body.is_empty() || body == "null" {
            return SearchOutcome::NotFound;
        }
        match serde_json::from_str::<CustomerRecord>(body) {
            Ok(record) => SearchOutcome::Found(record),
            Err(e) => {
                tracing::warn!(error = %e, "lookup response did not decode as a profile");
                SearchOutcome::ServerError(MALFORMED_RESPONSE.to_string())
            }
        }
    } else {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .unwrap_or_else(|| SERVER_ERROR_FALLBACK.to_string());
        SearchOutcome::ServerError(message)
    }
}

/// Spawn one lookup task. The completion comes back on the event channel
/// tagged with its sequence number so stale results can be discarded.
pub fn spawn_search(
    client: Arc<SearchClient>,
    seq: SearchSeq,
    param: SearchParam,
    event_tx: mpsc::UnboundedSender<AppEvent>,
) {
    tokio::spawn(async move {
        tracing::info!(seq, kind = param.key(), query = %param.masked(), "dispatching lookup");
        let outcome = client.lookup(&param).await;
        tracing::info!(seq, outcome = outcome.kind(), "lookup completed");
        let _ = event_tx.send(AppEvent::SearchCompleted { seq, outcome });
    });
}
