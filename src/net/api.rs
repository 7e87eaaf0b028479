//! REST helpers for communicating with the backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: request preparation and response decoding run as usual,
//! sending returns [`ApiError::Unavailable`].
//!
//! ERROR HANDLING
//! ==============
//! [`auth_fetch`] hands back status and body untouched; interpreting status
//! codes (including 401 on an expired token) is the caller's job. Only the
//! login/registration helpers turn envelopes into typed errors.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use super::types::{ApiEnvelope, AuthPayload, LoginRequest, RegisterRequest, User};
use crate::config::ApiConfig;
use crate::state::session::SessionStore;

pub const CONTENT_TYPE: &str = "Content-Type";
pub const AUTHORIZATION: &str = "Authorization";
pub const JSON_MIME: &str = "application/json";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network requests are only available in the browser")]
    Unavailable,
    #[error("network error: {0}")]
    Network(String),
    #[error("invalid request: {0}")]
    Request(String),
    #[error("invalid response: {0}")]
    Decode(String),
    #[error("{message}")]
    Rejected { status: u16, message: String },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

/// Caller-side request options, before auth decoration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    pub method: Method,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl RequestOptions {
    pub fn get() -> Self {
        Self::default()
    }

    pub fn post_json(body: String) -> Self {
        Self { method: Method::Post, headers: Vec::new(), body: Some(body) }
    }

    #[must_use]
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_owned(), value.to_owned()));
        self
    }
}

/// Fully decorated request, ready to hand to the HTTP client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl PreparedRequest {
    /// Value of header `name`, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Raw backend reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] if the body is not valid JSON for `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_str(&self.body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

fn set_header(headers: &mut Vec<(String, String)>, name: &str, value: String) {
    headers.retain(|(k, _)| !k.eq_ignore_ascii_case(name));
    headers.push((name.to_owned(), value));
}

/// Apply the JSON content type and, when `token` is present, the bearer header.
pub fn prepare_request(url: &str, options: RequestOptions, token: Option<&str>) -> PreparedRequest {
    let mut headers = options.headers;
    set_header(&mut headers, CONTENT_TYPE, JSON_MIME.to_owned());
    if let Some(token) = token {
        set_header(&mut headers, AUTHORIZATION, format!("Bearer {token}"));
    }
    PreparedRequest { method: options.method, url: url.to_owned(), headers, body: options.body }
}

/// Send `request` as-is.
///
/// # Errors
///
/// Returns [`ApiError::Network`] on transport failure, [`ApiError::Request`]
/// if the browser rejects the request, and [`ApiError::Unavailable`] off-browser.
pub async fn send(request: PreparedRequest) -> Result<ApiResponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        use gloo_net::http::{Method as HttpMethod, RequestBuilder};

        let method = match request.method {
            Method::Get => HttpMethod::GET,
            Method::Post => HttpMethod::POST,
            Method::Put => HttpMethod::PUT,
            Method::Patch => HttpMethod::PATCH,
            Method::Delete => HttpMethod::DELETE,
        };
        let mut builder = RequestBuilder::new(&request.url).method(method);
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        let built = match request.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Request(e.to_string()))?;
        let resp = built.send().await.map_err(|e| {
            log::warn!("api: {} failed: {e}", request.url);
            ApiError::Network(e.to_string())
        })?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(ApiResponse { status, body })
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// Fetch `url` with the stored session's bearer token attached, if any.
///
/// # Errors
///
/// Propagates [`send`] errors unchanged. Non-2xx replies are not errors.
pub async fn auth_fetch(store: &SessionStore, url: &str, options: RequestOptions) -> Result<ApiResponse, ApiError> {
    let token = store.token();
    send(prepare_request(url, options, token.as_deref())).await
}

fn rejected_message(status: u16) -> String {
    format!("request failed: {status}")
}

/// Unwrap a `{success, message, data}` reply.
///
/// # Errors
///
/// Returns [`ApiError::Rejected`] for non-2xx statuses or `success: false`,
/// and [`ApiError::Decode`] for a 2xx body that is not an envelope.
pub fn decode_envelope<T: DeserializeOwned>(resp: &ApiResponse) -> Result<ApiEnvelope<T>, ApiError> {
    let envelope = match resp.json::<ApiEnvelope<T>>() {
        Ok(envelope) => envelope,
        Err(_) if !resp.ok() => {
            return Err(ApiError::Rejected { status: resp.status, message: rejected_message(resp.status) });
        }
        Err(e) => return Err(e),
    };
    if !resp.ok() || !envelope.success {
        let message = if envelope.message.is_empty() { rejected_message(resp.status) } else { envelope.message };
        return Err(ApiError::Rejected { status: resp.status, message });
    }
    Ok(envelope)
}

fn encode_body<T: serde::Serialize>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string(value).map_err(|e| ApiError::Request(e.to_string()))
}

/// Exchange credentials for a session via `POST /auth/login`.
///
/// # Errors
///
/// Returns [`ApiError::Rejected`] with the server's message on bad credentials.
pub async fn login(config: &ApiConfig, request: &LoginRequest) -> Result<(User, String), ApiError> {
    let prepared = prepare_request(&config.endpoint("/auth/login"), RequestOptions::post_json(encode_body(request)?), None);
    let resp = send(prepared).await?;
    let envelope = decode_envelope::<AuthPayload>(&resp)?;
    envelope
        .data
        .map(AuthPayload::into_parts)
        .ok_or_else(|| ApiError::Decode("login reply missing data".to_owned()))
}

/// Create an account via `POST /auth/register`, returning the server message.
///
/// # Errors
///
/// Returns [`ApiError::Rejected`] with the server's message when registration fails.
pub async fn register(config: &ApiConfig, request: &RegisterRequest) -> Result<String, ApiError> {
    let prepared =
        prepare_request(&config.endpoint("/auth/register"), RequestOptions::post_json(encode_body(request)?), None);
    let resp = send(prepared).await?;
    let envelope = decode_envelope::<serde_json::Value>(&resp)?;
    Ok(envelope.message)
}
