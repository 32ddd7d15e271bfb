//! Query classification: deciding whether a raw query is a BVN or a phone
//! number before anything touches the network.
//!
//! The rule ladder is first-match-wins: 11 digits starting with `0` are a
//! phone number (Nigerian mobile format), any other 11-digit string is a
//! BVN, 10 digits are a phone number, and any other all-digit string falls
//! back to phone so the service gets to decide. Anything containing a
//! non-digit is rejected locally with a user-facing message.

use thiserror::Error;

/// A classified search parameter. Exactly one is produced per accepted query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchParam {
    /// 11-digit Bank Verification Number.
    Bvn(String),
    /// Phone number in any of the accepted digit shapes.
    Phone(String),
}

impl SearchParam {
    /// Query-string key used on the wire (`?bvn=` or `?phone=`).
    pub fn key(&self) -> &'static str {
        match self {
            SearchParam::Bvn(_) => "bvn",
            SearchParam::Phone(_) => "phone",
        }
    }

    pub fn value(&self) -> &str {
        match self {
            SearchParam::Bvn(v) | SearchParam::Phone(v) => v,
        }
    }

    /// Masked form for log output: everything but the last four digits is
    /// elided. Full identifiers never appear in logs.
    pub fn masked(&self) -> String {
        let v = self.value();
        let visible = v.len().min(4);
        let hidden = v.len() - visible;
        format!("{}{}", "*".repeat(hidden), &v[hidden..])
    }
}

/// Rejections for queries that never reach the lookup service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifyError {
    #[error("Please enter a BVN or Phone Number")]
    Empty,
    #[error("Please enter a valid BVN (11 digits) or Phone Number")]
    NotNumeric,
}

/// Classify a raw query string into a [`SearchParam`].
///
/// Only the missing-input check tolerates whitespace; the digit rules see
/// the query exactly as typed, so padded input is rejected as non-numeric.
pub fn classify(raw: &str) -> Result<SearchParam, ClassifyError> {
    if raw.trim().is_empty() {
        return Err(ClassifyError::Empty);
    }
    if !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ClassifyError::NotNumeric);
    }
    if raw.len() == 11 && !raw.starts_with('0') {
        return Ok(SearchParam::Bvn(raw.to_string()));
    }
    // 11 digits with a leading zero, 10 digits, and every other all-digit
    // length are all sent as phone numbers.
    Ok(SearchParam::Phone(raw.to_string()))
}
