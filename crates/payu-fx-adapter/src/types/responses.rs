/*
[INPUT]:  JSON bodies returned by the FX rates endpoint
[OUTPUT]: Typed success and error envelopes
[POS]:    Data layer - wire response definitions
[UPDATE]: When the API response schema changes
*/

use serde::{Deserialize, Serialize};

use super::models::FxRate;

/// Status block attached to every API response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    pub code: i64,
    pub message: String,
}

/// Body of a 4xx response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub meta: Meta,
}

/// Body of a successful `GET /api/fx/rates/{base}` response
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatesResponse {
    /// Informational only; a success body is decoded whatever its shape
    #[serde(default)]
    pub meta: Option<serde_json::Value>,
    #[serde(default)]
    pub base_currency: Option<serde_json::Value>,
    /// Currency/rate pairs in the order they appear on the wire
    #[serde(deserialize_with = "serde_helpers::deserialize_ordered_rates")]
    pub rates: Vec<(String, f64)>,
    pub expires_at: String,
}

impl RatesResponse {
    /// One FxRate per entry, all sharing the envelope expiration
    pub fn into_fx_rates(self) -> Vec<FxRate> {
        let expires_at = self.expires_at;
        self.rates
            .into_iter()
            .map(|(currency, rate)| FxRate::new(currency, rate, expires_at.as_str()))
            .collect()
    }
}

mod serde_helpers {
    use std::fmt;

    use serde::Deserializer;
    use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};

    struct OrderedRatesVisitor;

    impl<'de> Visitor<'de> for OrderedRatesVisitor {
        type Value = Vec<(String, f64)>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("an object mapping currency codes to numeric rates")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut rates = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((currency, rate)) = map.next_entry::<String, f64>()? {
                rates.push((currency, rate));
            }
            Ok(rates)
        }

        // Servers encode an empty rates object as `[]`
        fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
        where
            A: SeqAccess<'de>,
        {
            if seq.next_element::<IgnoredAny>()?.is_some() {
                return Err(de::Error::invalid_length(1, &self));
            }
            Ok(Vec::new())
        }
    }

    pub fn deserialize_ordered_rates<'de, D>(deserializer: D) -> Result<Vec<(String, f64)>, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(OrderedRatesVisitor)
    }
}
