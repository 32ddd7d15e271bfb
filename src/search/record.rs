//! Wire model for the customer profile returned by the lookup service.
//!
//! Fields arrive as camelCase JSON. Timestamps are kept as the raw strings
//! the service sent and parsed tolerantly at display time; the balance is an
//! exact decimal, never a float.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::fmt;

/// Account status as reported by the service. Unknown values are kept
/// verbatim so a new status never breaks decoding.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum CustomerStatus {
    Active,
    Other(String),
}

impl From<String> for CustomerStatus {
    fn from(s: String) -> Self {
        if s == "Active" {
            CustomerStatus::Active
        } else {
            CustomerStatus::Other(s)
        }
    }
}

impl fmt::Display for CustomerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CustomerStatus::Active => f.write_str("Active"),
            CustomerStatus::Other(s) => f.write_str(s),
        }
    }
}

/// One customer profile. Each successful search replaces the previous record
/// wholesale; nothing is merged.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRecord {
    pub first_name: String,
    pub last_name: String,
    pub status: CustomerStatus,
    pub bvn: String,
    pub phone_number: String,
    pub email: String,
    pub gender: String,
    pub date_of_birth: String,
    pub account_type: String,
    pub address: String,
    pub account_opened_at: String,
    pub balance: Decimal,
}

impl CustomerRecord {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
