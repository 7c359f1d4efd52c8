/*
[INPUT]:  Merchant code and shared secret key
[OUTPUT]: Immutable merchant credentials with redacted secret
[POS]:    Auth layer - credential holder owned by the client
[UPDATE]: When credential sources change
*/

use secrecy::SecretString;

use crate::http::{FxError, Result};

/// Environment variable holding the merchant code
pub const MERCHANT_CODE_ENV: &str = "PAYU_FX_MERCHANT_CODE";
/// Environment variable holding the secret key
pub const SECRET_KEY_ENV: &str = "PAYU_FX_SECRET_KEY";

/// Merchant authentication configuration
///
/// The secret key is wrapped in [`SecretString`], so `Debug` output redacts it
/// and it never reaches logs or serialized output.
#[derive(Debug, Clone)]
pub struct MerchantCredentials {
    merchant_code: String,
    secret_key: SecretString,
}

impl MerchantCredentials {
    pub fn new(merchant_code: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            merchant_code: merchant_code.into(),
            secret_key: SecretString::from(secret_key.into()),
        }
    }

    /// Load credentials from `PAYU_FX_MERCHANT_CODE` and `PAYU_FX_SECRET_KEY`
    pub fn from_env() -> Result<Self> {
        let merchant_code = read_env(MERCHANT_CODE_ENV)?;
        let secret_key = read_env(SECRET_KEY_ENV)?;
        Ok(Self::new(merchant_code, secret_key))
    }

    /// Public merchant identifier, sent unsigned with every request
    pub fn merchant_code(&self) -> &str {
        &self.merchant_code
    }

    pub fn secret_key(&self) -> &SecretString {
        &self.secret_key
    }
}

fn read_env(name: &str) -> Result<String> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(FxError::Config(format!("environment variable {name} is not set"))),
    }
}
