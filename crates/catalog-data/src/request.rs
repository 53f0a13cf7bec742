//! HTTP request and response values exchanged with a [`Transport`](crate::Transport).

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;

use crate::error::FetchError;

/// HTTP methods used by the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    /// Convert to HTTP method string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// An outbound HTTP request.
#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    pub url: String,
    pub headers: HashMap<String, String>,
    pub body: Option<Vec<u8>>,
}

impl Request {
    /// Create a request without body.
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: HashMap::new(),
            body: None,
        }
    }

    /// Set the request body as JSON.
    pub fn json<T: Serialize>(mut self, value: &T) -> Result<Self, FetchError> {
        let json = serde_json::to_vec(value).map_err(|e| FetchError::Encode(e.to_string()))?;
        self.headers
            .insert("Content-Type".to_string(), "application/json".to_string());
        self.body = Some(json);
        Ok(self)
    }

    /// Decode the JSON body, if any.
    pub fn json_body<T: DeserializeOwned>(&self) -> Option<T> {
        self.body
            .as_deref()
            .and_then(|body| serde_json::from_slice(body).ok())
    }
}

/// An HTTP response.
#[derive(Debug, Clone)]
pub struct Response {
    /// The HTTP status code.
    pub status: u16,
    /// The response body.
    pub body: Vec<u8>,
}

impl Response {
    /// Create a new response.
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Check if the response was successful (2xx status).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Parse the response body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, FetchError> {
        serde_json::from_slice(&self.body).map_err(|e| FetchError::Parse(e.to_string()))
    }

    /// Convert to a Result, returning an error for non-2xx status codes.
    pub fn error_for_status(self) -> Result<Self, FetchError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(FetchError::Http {
                status: self.status,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_body_sets_content_type() {
        let request = Request::new(Method::Post, "https://api.example/products/add")
            .json(&serde_json::json!({"title": "Lamp"}))
            .unwrap();
        assert_eq!(
            request.headers.get("Content-Type").map(String::as_str),
            Some("application/json")
        );
        let body: serde_json::Value = request.json_body().unwrap();
        assert_eq!(body["title"], "Lamp");
    }

    #[test]
    fn test_response_is_success() {
        assert!(Response::new(200, Vec::new()).is_success());
        assert!(Response::new(201, Vec::new()).is_success());
        assert!(!Response::new(199, Vec::new()).is_success());
        assert!(!Response::new(300, Vec::new()).is_success());
    }

    #[test]
    fn test_error_for_status() {
        let err = Response::new(503, b"unavailable".to_vec())
            .error_for_status()
            .unwrap_err();
        assert_eq!(err.status(), Some(503));
        assert!(Response::new(204, Vec::new()).error_for_status().is_ok());
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = Response::new(200, b"<html>".to_vec())
            .json::<serde_json::Value>()
            .unwrap_err();
        assert!(matches!(err, FetchError::Parse(_)));
    }

    #[test]
    fn test_method_strings() {
        assert_eq!(Method::Get.as_str(), "GET");
        assert_eq!(Method::Delete.as_str(), "DELETE");
    }
}
