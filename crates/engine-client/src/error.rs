//! The single error type raised by the dispatcher.
//!
//! Every failure (transport, HTTP status, undecodable body, rejected
//! construction) is an [`EngineError`]; callers discriminate by
//! [`EngineErrorKind`] and the status/code fields rather than by type.

use std::fmt;

use serde_json::Value;

/// Broad failure category of an [`EngineError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineErrorKind {
    /// No response was received (connect failure, timeout, broken body stream).
    Network,
    /// The server answered with a 4xx (or other non-2xx, non-5xx) status.
    Client,
    /// The server answered with a 5xx status.
    Server,
    /// 2xx status, but the body did not decode into the expected type.
    MalformedResponse,
    /// The request could not be built (body serialization, header value, URL).
    Request,
    /// A client or credential was constructed with invalid settings.
    Configuration,
}

impl fmt::Display for EngineErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Network => "network",
            Self::Client => "client",
            Self::Server => "server",
            Self::MalformedResponse => "malformed response",
            Self::Request => "request",
            Self::Configuration => "configuration",
        };
        f.write_str(name)
    }
}

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Error returned by every [`EngineClient`](crate::EngineClient) call.
#[derive(Debug, thiserror::Error)]
#[error("{kind} error{}: {message}", status_suffix(.status_code))]
pub struct EngineError {
    kind: EngineErrorKind,
    status_code: Option<u16>,
    code: Option<String>,
    message: String,
    details: Option<Value>,
    #[source]
    source: Option<BoxError>,
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|s| format!(" (status {s})")).unwrap_or_default()
}

impl EngineError {
    fn new(kind: EngineErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            status_code: None,
            code: None,
            message: message.into(),
            details: None,
            source: None,
        }
    }

    pub(crate) fn network(err: reqwest::Error) -> Self {
        let mut error = Self::new(EngineErrorKind::Network, err.to_string());
        error.status_code = err.status().map(|s| s.as_u16());
        error.source = Some(Box::new(err));
        error
    }

    /// Build an error from a non-2xx response.
    ///
    /// A JSON body contributes `code` and `message`; any body is kept in
    /// `details` for diagnostics.
    pub(crate) fn from_response(status: u16, body: &str) -> Self {
        let kind = if status >= 500 {
            EngineErrorKind::Server
        } else {
            EngineErrorKind::Client
        };

        let parsed = serde_json::from_str::<Value>(body).ok();
        let code = parsed.as_ref().and_then(|v| match v.get("code") {
            Some(Value::String(s)) => Some(s.clone()),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        });
        let server_message = parsed.as_ref().and_then(|v| {
            v.get("message")
                .or_else(|| v.get("error"))
                .and_then(Value::as_str)
                .map(str::to_owned)
        });

        let message = match server_message {
            Some(m) => m,
            None if parsed.is_none() && !body.trim().is_empty() => body.trim().to_owned(),
            None => reqwest::StatusCode::from_u16(status)
                .ok()
                .and_then(|s| s.canonical_reason())
                .unwrap_or("request failed")
                .to_owned(),
        };

        let details = match parsed {
            Some(value) => Some(value),
            None if !body.is_empty() => Some(Value::String(body.to_owned())),
            None => None,
        };

        Self {
            kind,
            status_code: Some(status),
            code,
            message,
            details,
            source: None,
        }
    }

    pub(crate) fn malformed(status: u16, err: serde_json::Error, body: &str) -> Self {
        let mut error = Self::new(
            EngineErrorKind::MalformedResponse,
            format!("failed to decode response body: {err}"),
        );
        error.status_code = Some(status);
        if !body.is_empty() {
            error.details = Some(Value::String(body.to_owned()));
        }
        error.source = Some(Box::new(err));
        error
    }

    pub(crate) fn request(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        let mut error = Self::new(EngineErrorKind::Request, message);
        error.source = Some(Box::new(source));
        error
    }

    pub(crate) fn configuration(message: impl Into<String>) -> Self {
        Self::new(EngineErrorKind::Configuration, message)
    }

    pub fn kind(&self) -> EngineErrorKind {
        self.kind
    }

    /// HTTP status, or `None` when no response was received.
    pub fn status_code(&self) -> Option<u16> {
        self.status_code
    }

    /// Server-supplied error code, when the error body carried one.
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Original response payload (JSON, or the raw text as a JSON string).
    pub fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }

    pub fn is_network(&self) -> bool {
        self.kind == EngineErrorKind::Network
    }

    pub fn is_client_error(&self) -> bool {
        self.kind == EngineErrorKind::Client
    }

    pub fn is_server_error(&self) -> bool {
        self.kind == EngineErrorKind::Server
    }

    pub fn is_not_found(&self) -> bool {
        self.status_code == Some(404)
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status_code == Some(401)
    }
}
