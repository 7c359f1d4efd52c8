/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public PayU FX adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod http;
pub mod types;

// Re-export commonly used types from auth
pub use auth::{HmacRequestSigner, MerchantCredentials, RequestSigner};

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    FxClient,
    FxError,
    HttpResponse,
    HttpTransport,
    ReqwestTransport,
    Result,
    TransportError,
};

// Re-export all types
pub use types::*;
