/*
[INPUT]:  Merchant credentials and outgoing requests
[OUTPUT]: Signed requests proving possession of the secret key
[POS]:    Auth layer - handles FX API authentication
[UPDATE]: When auth flow or signature methods change
*/

pub mod credentials;
pub mod signer;

pub use credentials::MerchantCredentials;
pub use signer::{HmacRequestSigner, RequestSigner, SIGNATURE_PARAM};
