/*
[INPUT]:  Deployment regions served by the FX API
[OUTPUT]: Closed Platform enumeration with base URLs
[POS]:    Data layer - configuration enums
[UPDATE]: When a new PayU platform region is added
*/

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// PayU deployment region, identified by its base service URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Ro,
    Tr,
    Ru,
}

impl Platform {
    /// Every supported platform
    pub const ALL: [Platform; 3] = [Platform::Ro, Platform::Tr, Platform::Ru];

    /// Base URL of the platform, always ending with `/`
    pub const fn base_url(self) -> &'static str {
        match self {
            Platform::Ro => "https://secure.payu.ro/",
            Platform::Tr => "https://secure.payu.com.tr/",
            Platform::Ru => "https://secure.payu.ru/",
        }
    }

    /// Short region code (`ro`, `tr`, `ru`)
    pub const fn code(self) -> &'static str {
        match self {
            Platform::Ro => "ro",
            Platform::Tr => "tr",
            Platform::Ru => "ru",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.base_url())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        Platform::ALL
            .into_iter()
            .find(|platform| platform.code() == normalized)
            .ok_or_else(|| format!("unknown platform '{value}', expected one of ro, tr, ru"))
    }
}
