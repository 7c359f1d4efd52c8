/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and transport/signer doubles
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for payu-fx-adapter tests

#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::DateTime;
use payu_fx_adapter::http::DATE_TIME_FORMAT;
use payu_fx_adapter::{
    ApiRequest, HttpResponse, HttpTransport, MerchantCredentials, RequestSigner, TransportError,
};
use secrecy::{ExposeSecret, SecretString};
use wiremock::MockServer;

pub const MERCHANT: &str = "PTEST";
pub const SECRET_KEY: &str = "SECRETKEY";

pub const ERROR_RESPONSE_400: &str = r#"{"meta": {"code": 400, "message": "A 400 error"}}"#;
pub const RESPONSE_INVALID: &str = r#"{"}}"#;
pub const SUCCESS_RESPONSE: &str = r#"{"meta":{"code":200,"message":"success"},"baseCurrency":"RON","rates":{"PLN":0.9329,"EUR":0.2161},"expiresAt":"2018-05-24T11:28:13+00:00"}"#;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

pub fn test_credentials() -> MerchantCredentials {
    MerchantCredentials::new(MERCHANT, SECRET_KEY)
}

type Responder = Box<dyn Fn() -> Result<HttpResponse, TransportError> + Send + Sync>;

/// Transport double returning a scripted outcome and recording requests
pub struct ScriptedTransport {
    respond: Responder,
    requests: Mutex<Vec<ApiRequest>>,
}

impl ScriptedTransport {
    pub fn new(
        respond: impl Fn() -> Result<HttpResponse, TransportError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            respond: Box::new(respond),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn responding(status: u16, body: &'static str) -> Self {
        Self::new(move || Ok(HttpResponse::new(status, body)))
    }

    pub fn failing_with_client_status(status: u16, body: &'static str) -> Self {
        Self::new(move || {
            Err(TransportError::ClientStatus {
                status,
                body: body.to_string(),
            })
        })
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpTransport for ScriptedTransport {
    async fn send(&self, request: &ApiRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request.clone());
        (self.respond)()
    }
}

/// Signer double appending a fixed signature and recording its inputs
pub struct FixedSigner {
    signature: String,
    calls: Mutex<Vec<(ApiRequest, String)>>,
}

impl FixedSigner {
    pub fn new(signature: &str) -> Self {
        Self {
            signature: signature.to_string(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Recorded (unsigned request, exposed secret) pairs
    pub fn calls(&self) -> Vec<(ApiRequest, String)> {
        self.calls.lock().unwrap().clone()
    }
}

impl RequestSigner for FixedSigner {
    fn sign(&self, request: &ApiRequest, secret_key: &SecretString) -> ApiRequest {
        self.calls
            .lock()
            .unwrap()
            .push((request.clone(), secret_key.expose_secret().to_string()));
        request.with_query_param("signature", &self.signature)
    }
}

/// True when `request` is a GET on `host` carrying `merchant` and a DATE_ATOM `dateTime`
pub fn check_get_request_basic_info(request: &ApiRequest, host: &str, merchant: &str) -> bool {
    let Some(date_time) = request.query_param("dateTime") else {
        return false;
    };
    let date_ok = DateTime::parse_from_str(&date_time, DATE_TIME_FORMAT)
        .map(|parsed| parsed.format(DATE_TIME_FORMAT).to_string() == date_time)
        .unwrap_or(false);

    *request.method() == reqwest::Method::GET
        && request.url().host_str() == Some(host)
        && request.query_param("merchant").as_deref() == Some(merchant)
        && date_ok
}
