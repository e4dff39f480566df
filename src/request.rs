//! Incoming HTTP request type.

use std::collections::HashMap;

use bytes::Bytes;
use http::HeaderMap;
use serde::de::DeserializeOwned;

use crate::method::Method;

/// An incoming HTTP request with its body fully buffered.
pub struct Request {
    pub(crate) method: Method,
    pub(crate) path: String,
    pub(crate) headers: HeaderMap,
    pub(crate) body: Bytes,
    pub(crate) params: HashMap<String, String>,
}

impl Request {
    /// Builds a request by hand. The server builds them from the wire; this is
    /// for driving a [`Router`](crate::Router) directly.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            headers: HeaderMap::new(),
            body: Bytes::new(),
            params: HashMap::new(),
        }
    }

    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    pub(crate) fn from_parts(parts: http::request::Parts, method: Method, body: Bytes) -> Self {
        Self {
            method,
            path: parts.uri.path().to_owned(),
            headers: parts.headers,
            body,
            params: HashMap::new(),
        }
    }

    pub fn method(&self) -> Method { self.method }
    pub fn path(&self) -> &str { &self.path }
    pub fn headers(&self) -> &HeaderMap { &self.headers }
    pub fn body(&self) -> &[u8] { &self.body }

    /// Case-insensitive header lookup. Non-UTF-8 values are treated as absent.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Returns a named path parameter.
    ///
    /// For a route `/api/chirps/{chirpID}`, `req.param("chirpID")` on
    /// `/api/chirps/42` returns `Some("42")`.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Decodes the body as JSON. The content-type header is not checked.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Deserialize)]
    struct Email {
        email: String,
    }

    #[test]
    fn decodes_json_body() {
        let req = Request::new(Method::Post, "/api/users").with_body(r#"{"email":"a@b.c"}"#);
        let decoded: Email = req.json().unwrap();
        assert_eq!(decoded.email, "a@b.c");
    }

    #[test]
    fn rejects_malformed_json() {
        let req = Request::new(Method::Post, "/api/users").with_body("{not json");
        assert!(req.json::<Email>().is_err());
    }

    #[test]
    fn missing_param_is_none() {
        let req = Request::new(Method::Get, "/api/chirps");
        assert_eq!(req.param("chirpID"), None);
    }
}
