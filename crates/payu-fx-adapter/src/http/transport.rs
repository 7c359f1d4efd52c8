/*
[INPUT]:  Signed ApiRequest values
[OUTPUT]: Raw HTTP responses or classified transport failures
[POS]:    HTTP layer - pluggable transport boundary (reqwest in production)
[UPDATE]: When adding transports or changing failure classification
*/

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tracing::debug;

use super::client::ClientConfig;
use super::error::{FxError, Result};
use crate::types::ApiRequest;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Failure reported by an [`HttpTransport`]
#[derive(Error, Debug)]
pub enum TransportError {
    /// 4xx response; the body is kept for error decoding
    #[error("HTTP client error {status}")]
    ClientStatus { status: u16, body: String },

    /// 5xx response
    #[error("HTTP server error {status}")]
    ServerStatus { status: u16, body: String },

    /// No response: DNS, refused connection, timeout
    #[error("connection failed: {0}")]
    Connect(#[source] BoxError),

    /// Redirect loops, unreadable bodies and anything else
    #[error("transport failure: {0}")]
    Other(#[source] BoxError),
}

impl TransportError {
    pub fn connect(cause: impl Into<BoxError>) -> Self {
        TransportError::Connect(cause.into())
    }

    pub fn other(cause: impl Into<BoxError>) -> Self {
        TransportError::Other(cause.into())
    }

    /// HTTP status attached to the failure, if a response was received
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::ClientStatus { status, .. }
            | TransportError::ServerStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_connect() || error.is_timeout() {
            TransportError::Connect(Box::new(error))
        } else {
            TransportError::Other(Box::new(error))
        }
    }
}

/// Response that was not classified as a failure by the transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Sends a single request and reports the outcome
///
/// Implementations must return 4xx responses as [`TransportError::ClientStatus`]
/// and connection-level failures as [`TransportError::Connect`].
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: &ApiRequest) -> std::result::Result<HttpResponse, TransportError>;
}

/// reqwest-backed transport
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Create a transport with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(&ClientConfig::default())
    }

    /// Create a transport with custom timeouts and user agent
    pub fn with_config(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| FxError::Config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client })
    }

    /// Wrap an existing reqwest client
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: &ApiRequest) -> std::result::Result<HttpResponse, TransportError> {
        debug!(
            method = %request.method(),
            path = request.url().path(),
            "sending request"
        );

        let response = self
            .client
            .request(request.method().clone(), request.url().clone())
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        debug!(status = status.as_u16(), bytes = body.len(), "received response");

        if status.is_client_error() {
            return Err(TransportError::ClientStatus {
                status: status.as_u16(),
                body,
            });
        }
        if status.is_server_error() {
            return Err(TransportError::ServerStatus {
                status: status.as_u16(),
                body,
            });
        }

        Ok(HttpResponse {
            status: status.as_u16(),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn request_for(server: &MockServer, endpoint: &str) -> ApiRequest {
        let url = Url::parse(&format!("{}{}", server.uri(), endpoint)).unwrap();
        ApiRequest::get(url)
    }

    #[tokio::test]
    async fn test_success_returns_status_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/fx/rates/EUR"))
            .and(query_param("merchant", "TEST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{\"ok\":true}"))
            .expect(1)
            .mount(&server)
            .await;

        let transport = ReqwestTransport::new().expect("transport init");
        let response = transport
            .send(&request_for(&server, "/api/fx/rates/EUR?merchant=TEST"))
            .await
            .expect("send failed");

        assert_eq!(response, HttpResponse::new(200, "{\"ok\":true}"));
    }

    #[tokio::test]
    async fn test_client_error_keeps_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(403).set_body_string("denied"))
            .mount(&server)
            .await;

        let transport = ReqwestTransport::new().expect("transport init");
        let err = transport
            .send(&request_for(&server, "/api/fx/rates/EUR"))
            .await
            .unwrap_err();

        match err {
            TransportError::ClientStatus { status, body } => {
                assert_eq!(status, 403);
                assert_eq!(body, "denied");
            }
            other => panic!("Expected ClientStatus, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_server_error_is_classified() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let transport = ReqwestTransport::new().expect("transport init");
        let err = transport
            .send(&request_for(&server, "/api/fx/rates/EUR"))
            .await
            .unwrap_err();

        assert!(matches!(err, TransportError::ServerStatus { status: 503, .. }));
        assert_eq!(err.status(), Some(503));
    }

    #[tokio::test]
    async fn test_non_200_success_is_passed_through() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let transport = ReqwestTransport::new().expect("transport init");
        let response = transport
            .send(&request_for(&server, "/api/fx/rates/EUR"))
            .await
            .expect("send failed");

        assert_eq!(response.status, 204);
        assert!(response.body.is_empty());
    }

    #[tokio::test]
    async fn test_refused_connection_is_connect_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let address = listener.local_addr().unwrap();
        drop(listener);
        let url = Url::parse(&format!("http://{address}/api/fx/rates/EUR")).unwrap();
        let request = ApiRequest::get(url);

        let transport = ReqwestTransport::new().expect("transport init");
        let err = transport.send(&request).await.unwrap_err();

        assert!(matches!(err, TransportError::Connect(_)), "got {err:?}");
        assert_eq!(err.status(), None);
    }
}
