//! Requests, responses, and the transport that carries them
use std::{collections::BTreeMap, fmt};

use log::warn;
use serde_json::Value;
use thiserror::Error;

use crate::RequestError;

pub const CONTENT_TYPE: &str = "Content-Type";
pub const AUTHORIZATION: &str = "Authorization";
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Shown when the backend fails without saying why
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Header name to value
pub type Headers = BTreeMap<String, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => write!(f, "GET"),
            Method::Post => write!(f, "POST"),
        }
    }
}

/// A fully built request, ready to hand to a [`Transport`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: Method,
    pub url: String,
    pub headers: Headers,
    pub body: Option<String>,
}

impl Request {
    /// Parse the body back into JSON, if there is one
    pub fn json(&self) -> Option<Value> {
        self.body
            .as_deref()
            .and_then(|b| serde_json::from_str(b).ok())
    }
}

/// Status and raw body of a backend response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub body: String,
}

impl Response {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is in the 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("http error: {}", .0)]
    Http(#[from] reqwest::Error),

    #[error("{}", .0)]
    Other(String),
}

/// Something that can deliver a request and bring back the response.
///
/// Only failures to get any response at all are errors here; non-2xx statuses
/// are ordinary responses.
pub trait Transport {
    fn send(&self, req: &Request) -> Result<Response, TransportError>;
}

/// A [`Transport`] backed by a blocking reqwest client
pub struct HttpTransport {
    http: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        HttpTransport {
            http: reqwest::blocking::Client::new(),
        }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for HttpTransport {
    fn send(&self, req: &Request) -> Result<Response, TransportError> {
        let mut builder = match req.method {
            Method::Get => self.http.get(&req.url),
            Method::Post => self.http.post(&req.url),
        };
        for (name, value) in req.headers.iter() {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &req.body {
            builder = builder.body(body.clone());
        }

        let resp = builder.send()?;
        let status = resp.status().as_u16();
        let body = resp.text()?;

        Ok(Response { status, body })
    }
}

/// Pull the human-readable failure reason out of a backend error body
pub fn backend_message(body: &Value) -> String {
    ["msg", "error", "status"]
        .iter()
        .find_map(|key| body.get(key).and_then(Value::as_str))
        .unwrap_or(UNKNOWN_ERROR)
        .to_string()
}

/// Parse the body as JSON, and turn a non-2xx status into a [`RequestError::Backend`].
pub fn interpret_response(resp: &Response) -> Result<Value, RequestError> {
    let body: Value = serde_json::from_str(&resp.body)?;
    if !resp.is_success() {
        let message = backend_message(&body);
        warn!("backend returned {}: {}", resp.status, message);
        return Err(RequestError::Backend {
            status: resp.status,
            message,
        });
    }

    Ok(body)
}
