/*
[INPUT]:  Merchant credentials, platform selection, transport and signer
[OUTPUT]: FX rates for a base currency, or a classified FxError
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding endpoints or changing response classification
*/

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use chrono::Local;
use tracing::{debug, warn};
use url::Url;

use super::error::{ERROR_JSON_DECODE_FAILED, FxError, RATES_JSON_DECODE_FAILED, Result};
use super::transport::{HttpTransport, ReqwestTransport, TransportError};
use crate::auth::{HmacRequestSigner, MerchantCredentials, RequestSigner};
use crate::types::{ApiRequest, ErrorResponse, FxRate, Platform, RatesResponse};

const RATES_PATH: [&str; 3] = ["api", "fx", "rates"];

/// `DATE_ATOM` layout, e.g. `2018-05-24T11:28:13+00:00`
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";

/// Transport configuration, forwarded to the reqwest client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            user_agent: concat!("payu-fx-adapter/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Client for the PayU FX rates API
///
/// Holds only immutable configuration, so a single instance (or its clones)
/// can serve concurrent calls.
#[derive(Clone)]
pub struct FxClient {
    credentials: MerchantCredentials,
    base_url: Url,
    transport: Arc<dyn HttpTransport>,
    signer: Arc<dyn RequestSigner>,
}

impl fmt::Debug for FxClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FxClient")
            .field("credentials", &self.credentials)
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl FxClient {
    /// Create a client with the default reqwest transport and HMAC signer
    pub fn new(credentials: MerchantCredentials, platform: Platform) -> Result<Self> {
        Self::with_config(credentials, platform, ClientConfig::default())
    }

    /// Create a client with custom transport configuration
    pub fn with_config(
        credentials: MerchantCredentials,
        platform: Platform,
        config: ClientConfig,
    ) -> Result<Self> {
        let transport = ReqwestTransport::with_config(&config)?;
        Self::with_components(
            credentials,
            platform,
            Arc::new(transport),
            Arc::new(HmacRequestSigner::new()),
        )
    }

    /// Create a client with injected transport and signer
    pub fn with_components(
        credentials: MerchantCredentials,
        platform: Platform,
        transport: Arc<dyn HttpTransport>,
        signer: Arc<dyn RequestSigner>,
    ) -> Result<Self> {
        Self::with_base_url(credentials, platform.base_url(), transport, signer)
    }

    /// Create a client against an arbitrary base URL (sandbox, local mock server)
    pub fn with_base_url(
        credentials: MerchantCredentials,
        base_url: &str,
        transport: Arc<dyn HttpTransport>,
        signer: Arc<dyn RequestSigner>,
    ) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| FxError::Config(format!("Invalid base URL '{base_url}': {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(FxError::Config(format!(
                "Base URL '{base_url}' cannot carry a path"
            )));
        }

        Ok(Self {
            credentials,
            base_url,
            transport,
            signer,
        })
    }

    pub fn credentials(&self) -> &MerchantCredentials {
        &self.credentials
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Get all FX rates relative to `base_currency`
    ///
    /// GET /api/fx/rates/{base}?merchant={code}&dateTime={now}&signature={hmac}
    ///
    /// A response with a status other than 200 that the transport did not
    /// report as a failure yields an empty list.
    pub async fn get_all_fx_rates(&self, base_currency: &str) -> Result<Vec<FxRate>> {
        // Counted in chars: a multi-byte code point is one currency letter
        if base_currency.chars().count() != 3 {
            return Err(FxError::invalid_base_currency());
        }

        let date_time = Local::now().format(DATE_TIME_FORMAT).to_string();
        let request = self.rates_request(base_currency, &date_time)?;
        let signed = self.signer.sign(&request, self.credentials.secret_key());

        debug!(base_currency, date_time = %date_time, "requesting FX rates");
        let response = self
            .transport
            .send(&signed)
            .await
            .map_err(classify_transport_error)?;

        if response.status != 200 {
            warn!(
                status = response.status,
                base_currency, "unexpected FX rates status, returning no rates"
            );
            return Ok(Vec::new());
        }

        let rates = decode_rates(&response.body)?;
        debug!(base_currency, count = rates.len(), "decoded FX rates");
        Ok(rates)
    }

    /// Build the unsigned rates request
    fn rates_request(&self, base_currency: &str, date_time: &str) -> Result<ApiRequest> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| FxError::Config(format!("Base URL '{}' cannot carry a path", self.base_url)))?
            .pop_if_empty()
            .extend(RATES_PATH)
            .push(base_currency);
        url.query_pairs_mut()
            .clear()
            .append_pair("merchant", self.credentials.merchant_code())
            .append_pair("dateTime", date_time);

        Ok(ApiRequest::get(url))
    }
}

/// Map a transport failure into the crate error taxonomy
fn classify_transport_error(error: TransportError) -> FxError {
    debug!(error = %error, "FX rates transport failure");

    if let TransportError::ClientStatus { body, .. } = &error {
        let decoded = serde_json::from_str::<ErrorResponse>(body);
        return match decoded {
            Ok(payload) => FxError::Remote {
                code: payload.meta.code,
                message: payload.meta.message,
                source: error,
            },
            Err(source) => FxError::Protocol {
                message: ERROR_JSON_DECODE_FAILED.to_string(),
                source,
                transport: Some(error),
            },
        };
    }

    match error {
        TransportError::Connect(_) => FxError::Connectivity(error),
        other => FxError::Transport(other),
    }
}

fn decode_rates(body: &str) -> Result<Vec<FxRate>> {
    serde_json::from_str::<RatesResponse>(body)
        .map(RatesResponse::into_fx_rates)
        .map_err(|source| FxError::Protocol {
            message: RATES_JSON_DECODE_FAILED.to_string(),
            source,
            transport: None,
        })
}
