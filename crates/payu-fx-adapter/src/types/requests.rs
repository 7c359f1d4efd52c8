/*
[INPUT]:  HTTP method, target URL and query parameters
[OUTPUT]: Immutable request descriptor handed to signer and transport
[POS]:    Data layer - outgoing request description
[UPDATE]: When requests need headers or bodies
*/

use std::collections::BTreeMap;

use reqwest::Method;
use url::Url;

/// Outgoing request descriptor; query parameters live in the URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    method: Method,
    url: Url,
}

impl ApiRequest {
    pub fn new(method: Method, url: Url) -> Self {
        Self { method, url }
    }

    /// GET request for `url`
    pub fn get(url: Url) -> Self {
        Self::new(Method::GET, url)
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Decoded query parameters, ordered by key (bytewise)
    pub fn query_params(&self) -> BTreeMap<String, String> {
        self.url
            .query_pairs()
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect()
    }

    /// Decoded value of a single query parameter
    pub fn query_param(&self, key: &str) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.into_owned())
    }

    /// Copy of this request with `key` set to `value`, replacing any previous value
    pub fn with_query_param(&self, key: &str, value: &str) -> Self {
        let retained: Vec<(String, String)> = self
            .url
            .query_pairs()
            .filter(|(name, _)| name != key)
            .map(|(name, value)| (name.into_owned(), value.into_owned()))
            .collect();

        let mut url = self.url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.clear();
            for (name, existing) in &retained {
                pairs.append_pair(name, existing);
            }
            pairs.append_pair(key, value);
        }

        Self {
            method: self.method.clone(),
            url,
        }
    }
}
