//! Endpoint description: method, path segments, query and body of one call.

use bytes::Bytes;
use reqwest::Method;
use serde::Serialize;
use url::Url;

use crate::Result;

/// Everything operation-specific about a request. The client adds the base URL,
/// `version`, headers and authentication.
#[derive(Debug, Clone)]
pub(crate) struct Endpoint {
    pub operation: &'static str,
    pub method: Method,
    segments: Vec<String>,
    query: Vec<(&'static str, String)>,
    body: Option<Bytes>,
}

impl Endpoint {
    pub fn new(operation: &'static str, method: Method) -> Self {
        Self {
            operation,
            method,
            segments: vec!["v1".to_string()],
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get(operation: &'static str) -> Self {
        Self::new(operation, Method::GET)
    }

    pub fn post(operation: &'static str) -> Self {
        Self::new(operation, Method::POST)
    }

    pub fn delete(operation: &'static str) -> Self {
        Self::new(operation, Method::DELETE)
    }

    /// Append path segments; each one is percent-encoded on its own.
    pub fn path<I, S>(mut self, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.segments.extend(segments.into_iter().map(Into::into));
        self
    }

    pub fn query(mut self, key: &'static str, value: impl ToString) -> Self {
        self.query.push((key, value.to_string()));
        self
    }

    /// Append `key` only when `value` is set.
    pub fn query_opt<V: ToString>(self, key: &'static str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.query(key, v),
            None => self,
        }
    }

    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self> {
        self.body = Some(Bytes::from(serde_json::to_vec(body)?));
        Ok(self)
    }

    pub fn take_body(&mut self) -> Option<Bytes> {
        self.body.take()
    }

    /// `/v1/...` as sent, for log lines.
    pub fn display_path(&self) -> String {
        format!("/{}", self.segments.join("/"))
    }

    /// Resolve against `base`, keeping any path prefix the base already has.
    pub fn url(&self, base: &Url, version: &str) -> Url {
        let mut url = base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(&self.segments);
        }
        {
            let mut pairs = url.query_pairs_mut();
            pairs.clear().append_pair("version", version);
            for (k, v) in &self.query {
                pairs.append_pair(k, v);
            }
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://api.example.com/instances/abc").unwrap()
    }

    #[test]
    fn test_segments_are_encoded_individually() {
        let url = Endpoint::get("get_example")
            .path(["workspaces", "w1", "intents", "greet", "examples", "hi there/you"])
            .url(&base(), "2021-06-14");
        assert_eq!(
            url.path(),
            "/instances/abc/v1/workspaces/w1/intents/greet/examples/hi%20there%2Fyou"
        );
    }

    #[test]
    fn test_version_first_and_unset_options_skipped() {
        let url = Endpoint::get("list_workspaces")
            .path(["workspaces"])
            .query_opt("page_limit", Some(10))
            .query_opt::<bool>("include_count", None)
            .query_opt("sort", Some("-updated"))
            .url(&base(), "2021-06-14");
        assert_eq!(url.query(), Some("version=2021-06-14&page_limit=10&sort=-updated"));
    }

    #[test]
    fn test_root_base_url() {
        let url = Endpoint::delete("delete_user_data")
            .path(["user_data"])
            .query("customer_id", "c 1")
            .url(&Url::parse("http://127.0.0.1:8080").unwrap(), "v");
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/v1/user_data?version=v&customer_id=c+1");
    }
}
