//! A client for the course catalogue API.
//!
//! The client never touches its host environment directly. Token storage, the
//! network, user notices, navigation and the rendered course list are all
//! reached through the traits in [`ports`] and [`http::Transport`], so the same
//! code drives the terminal front end and the in-memory fakes used in tests.
mod auth;
pub mod course;
pub mod health;
pub mod http;
pub mod ports;
pub mod view;

pub use auth::{require_login_or_redirect, Credentials, LoginResp, Password, Registration};
pub use course::{Course, Listing};
pub use http::{HttpTransport, Method, Request, Response, Transport, TransportError};
pub use ports::{MemoryStorage, Navigator, Page, Storage, StorageError};

use log::debug;
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

use crate::http::Headers;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Where the backend lives when nothing else is configured
pub const DEFAULT_BASE: &str = "http://localhost:5000";

/// Storage key holding the session token
pub const TOKEN_KEY: &str = "access_token";

/// Id of the container the course list is rendered into
pub const COURSE_LIST_ID: &str = "courseList";

/// Navigation target for the login view
pub const LOGIN_PATH: &str = "/login";

/// Navigation target for the course list view
pub const COURSES_PATH: &str = "/courses";

/// A client for the course catalogue API.
///
/// `T` carries requests to the backend, `S` holds the session token between runs.
pub struct Client<T, S> {
    base: String,
    transport: T,
    storage: S,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("{}", .0)]
    Validation(#[from] ValidationError),

    #[error("{}", .0)]
    Request(#[from] RequestError),

    #[error("{}", .0)]
    Storage(#[from] StorageError),
}

/// Problems caught before anything is sent
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("All fields are required.")]
    MissingFields,
}

/// Problems sending a request or making sense of the answer
#[derive(Error, Debug)]
pub enum RequestError {
    /// The backend answered with a non-2xx status. `message` is its `msg` field.
    #[error("{}", .message)]
    Backend { status: u16, message: String },

    #[error("{}", .0)]
    Transport(#[from] TransportError),

    #[error("response was not valid JSON: {}", .0)]
    Malformed(#[from] serde_json::Error),

    #[error("couldn't encode request body: {}", .0)]
    Encode(serde_json::Error),

    #[error("login response did not include an access token")]
    MissingToken,
}

impl<T: Transport, S: Storage> Client<T, S> {
    pub fn new(base: impl Into<String>, transport: T, storage: S) -> Self {
        let base = base.into().trim_end_matches('/').to_string();
        Client {
            base,
            transport,
            storage,
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    /// The stored session token, if there is one. An empty token counts as none.
    pub fn token(&self) -> Option<String> {
        self.storage.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    /// Headers sent with every request. The token is only attached when asked for and present.
    pub fn build_headers(&self, with_auth: bool) -> Headers {
        let mut headers = Headers::new();
        headers.insert(
            http::CONTENT_TYPE.to_string(),
            http::JSON_CONTENT_TYPE.to_string(),
        );
        if with_auth {
            if let Some(token) = self.token() {
                headers.insert(http::AUTHORIZATION.to_string(), format!("Bearer {}", token));
            }
        }
        headers
    }

    fn send(&self, req: Request) -> Result<Response, RequestError> {
        debug!("{} {}", req.method, req.url);
        let resp = self.transport.send(&req)?;
        debug!(
            "{} {} -> {} ({} bytes)",
            req.method,
            req.url,
            resp.status,
            resp.body.len()
        );
        Ok(resp)
    }

    pub(crate) fn get(&self, path: &str, with_auth: bool) -> Result<Response, RequestError> {
        self.send(Request {
            method: Method::Get,
            url: format!("{}{}", self.base, path),
            headers: self.build_headers(with_auth),
            body: None,
        })
    }

    pub(crate) fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        with_auth: bool,
    ) -> Result<Response, RequestError> {
        let body = serde_json::to_string(body).map_err(RequestError::Encode)?;
        self.send(Request {
            method: Method::Post,
            url: format!("{}{}", self.base, path),
            headers: self.build_headers(with_auth),
            body: Some(body),
        })
    }

    /// Interpret a response the uniform way and decode it into `R`
    pub(crate) fn decode<R: DeserializeOwned>(resp: &Response) -> Result<R, RequestError> {
        let value = http::interpret_response(resp)?;
        Ok(serde_json::from_value(value)?)
    }
}

/// Acknowledgement returned by the register and create endpoints
#[derive(Debug, Default, serde::Deserialize)]
pub(crate) struct MsgResp {
    #[serde(default)]
    pub msg: Option<String>,
}

impl MsgResp {
    pub(crate) fn into_notice(self) -> String {
        self.msg
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| "Request completed.".to_string())
    }
}

/// Text shown to the user when an operation fails
pub(crate) fn error_notice(e: &Error) -> String {
    format!("Error: {}", e)
}
