/*
[INPUT]:  Client configuration, signed requests and transport responses
[OUTPUT]: Typed FX rates and classified errors
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod error;
pub mod transport;

pub use error::{FxError, Result};
pub use transport::{HttpResponse, HttpTransport, ReqwestTransport, TransportError};

pub use client::{ClientConfig, DATE_TIME_FORMAT, FxClient};
