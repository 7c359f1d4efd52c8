/*
[INPUT]:  Unsigned request and merchant secret key
[OUTPUT]: Copy of the request carrying an HMAC-SHA256 `signature` query parameter
[POS]:    Auth layer - query string signing for authenticated calls
[UPDATE]: When changing the canonicalization or digest algorithm
*/

use std::collections::BTreeMap;

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha256;

use crate::types::ApiRequest;

type HmacSha256 = Hmac<Sha256>;

/// Query parameter carrying the request signature
pub const SIGNATURE_PARAM: &str = "signature";

/// Signs outgoing requests
///
/// Implementations return a new request and leave the input untouched.
pub trait RequestSigner: Send + Sync {
    fn sign(&self, request: &ApiRequest, secret_key: &SecretString) -> ApiRequest;
}

/// HMAC-SHA256 signer over the length-prefixed, key-sorted query values
///
/// For query `merchant=TEST&dateTime=2018-05-24T11:28:13+00:00` the signed
/// source string is `252018-05-24T11:28:13+00:004TEST` (`dateTime` sorts
/// before `merchant`).
#[derive(Debug, Clone, Copy, Default)]
pub struct HmacRequestSigner;

impl HmacRequestSigner {
    pub fn new() -> Self {
        Self
    }

    /// Concatenate `len(value) ++ value` for every value in key order.
    /// Lengths are byte counts.
    pub fn canonical_string(params: &BTreeMap<String, String>) -> String {
        params
            .values()
            .map(|value| format!("{}{}", value.len(), value))
            .collect()
    }

    /// Lowercase hex HMAC-SHA256 of `source` keyed with `secret_key`
    pub fn compute_signature(source: &str, secret_key: &SecretString) -> String {
        let mut mac = HmacSha256::new_from_slice(secret_key.expose_secret().as_bytes())
            .expect("HMAC can take any size");
        mac.update(source.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }
}

impl RequestSigner for HmacRequestSigner {
    fn sign(&self, request: &ApiRequest, secret_key: &SecretString) -> ApiRequest {
        let mut params = request.query_params();
        params.remove(SIGNATURE_PARAM);

        let source = Self::canonical_string(&params);
        let signature = Self::compute_signature(&source, secret_key);

        request.with_query_param(SIGNATURE_PARAM, &signature)
    }
}
