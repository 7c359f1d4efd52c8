/*
[INPUT]:  Decoded FX rates envelope
[OUTPUT]: Immutable FxRate domain values
[POS]:    Data layer - domain entities returned to callers
[UPDATE]: When the rate entity gains fields
*/

use chrono::{DateTime, FixedOffset};
use serde::Serialize;

/// Conversion rate from the requested base currency into `currency`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FxRate {
    currency: String,
    rate_value: f64,
    expires_at: String,
}

impl FxRate {
    pub fn new(
        currency: impl Into<String>,
        rate_value: f64,
        expires_at: impl Into<String>,
    ) -> Self {
        Self {
            currency: currency.into(),
            rate_value,
            expires_at: expires_at.into(),
        }
    }

    /// Destination currency, 3-letter code
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Amount of `currency` paid for one unit of the base currency
    pub fn rate_value(&self) -> f64 {
        self.rate_value
    }

    /// ISO-8601 expiration timestamp as sent by the server
    pub fn expires_at(&self) -> &str {
        &self.expires_at
    }

    /// Parse the expiration timestamp
    pub fn expiration(&self) -> Result<DateTime<FixedOffset>, chrono::ParseError> {
        DateTime::parse_from_rfc3339(&self.expires_at)
    }
}
