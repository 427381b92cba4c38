//! Blocking HTTP client for the Asana REST API.
//!
//! Every request carries the bearer token from [`Config`]. Successful
//! responses are unwrapped from the `{"data": ...}` envelope; everything
//! else becomes a `remote.request_failed` error.

use crate::config::Config;
use crate::error::{Error, RemoteRequestFailedDetails, Result};
use reqwest::blocking::{Client, RequestBuilder};
use serde_json::{json, Value};

const USER_AGENT: &str = concat!("taskman/", env!("CARGO_PKG_VERSION"));

fn transport_error(method: &str, path: &str, e: reqwest::Error) -> Error {
    Error::remote_request_failed(RemoteRequestFailedDetails {
        method: method.to_string(),
        path: path.to_string(),
        status: None,
        messages: Vec::new(),
        error: Some(e.to_string()),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

/// One API call, described without touching the network.
///
/// `body` is the bare payload; [`ApiRequest::envelope`] wraps it the way the
/// API expects.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn post(path: impl Into<String>, data: Value) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            query: Vec::new(),
            body: Some(data),
        }
    }

    pub fn query(mut self, key: &str, value: &str) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    /// JSON body as sent on the wire: `{"data": ...}`, or nothing.
    pub fn envelope(&self) -> Option<Value> {
        self.body.as_ref().map(|data| json!({ "data": data }))
    }
}

/// HTTP client bound to one API base URL and token.
pub struct ApiClient {
    client: Client,
    base_url: String,
    access_token: String,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| Error::internal_unexpected(format!("HTTP client setup failed: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            access_token: config.access_token.clone(),
        })
    }

    /// Sends `request` and returns the unwrapped `data` payload.
    pub fn execute(&self, request: &ApiRequest) -> Result<Value> {
        let url = format!("{}{}", self.base_url, request.path);
        let mut builder = match request.method {
            Method::Get => self.client.get(url),
            Method::Post => self.client.post(url),
        };
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = request.envelope() {
            builder = builder.json(&body);
        }
        self.send(request.method.as_str(), &request.path, builder)
    }

    fn send(&self, method: &str, path: &str, request: RequestBuilder) -> Result<Value> {
        let response = request
            .bearer_auth(&self.access_token)
            .header("Accept", "application/json")
            .send()
            .map_err(|e| transport_error(method, path, e))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| transport_error(method, path, e))?;

        log::debug!("{} {} -> {}", method, path, status);
        parse_envelope(method, path, status, &body)
    }
}

/// Interprets a raw API response.
///
/// Success statuses must carry a JSON object with a `data` member. Error
/// statuses are mapped to `remote.request_failed` with whatever messages the
/// API put in its `errors` array.
pub(crate) fn parse_envelope(method: &str, path: &str, status: u16, body: &str) -> Result<Value> {
    let parsed: Option<Value> = serde_json::from_str(body).ok();

    if !(200..300).contains(&status) {
        return Err(Error::remote_request_failed(RemoteRequestFailedDetails {
            method: method.to_string(),
            path: path.to_string(),
            status: Some(status),
            messages: parsed.as_ref().map(error_messages).unwrap_or_default(),
            error: None,
        }));
    }

    match parsed {
        Some(Value::Object(mut envelope)) => Ok(envelope.remove("data").unwrap_or(Value::Null)),
        Some(_) => Err(Error::internal_json(
            "Response body is not a JSON object",
            Some(format!("{} {}", method, path)),
        )),
        None => Err(Error::internal_json(
            "Invalid JSON response",
            Some(format!("{} {}", method, path)),
        )),
    }
}

fn error_messages(body: &Value) -> Vec<String> {
    body.get("errors")
        .and_then(Value::as_array)
        .map(|errors| {
            errors
                .iter()
                .filter_map(|e| e.get("message").and_then(Value::as_str))
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
