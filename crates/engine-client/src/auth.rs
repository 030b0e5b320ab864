//! Authorization strategies.
//!
//! The dispatcher only ever asks a strategy for a complete `Authorization`
//! header value; it never knows which scheme is active. The value is
//! requested once per call, so strategies backed by rotating credentials
//! (see the closure impl) take effect on the next request.

use std::fmt;
use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::EngineError;

/// Provider of an `Authorization` header value, scheme prefix included.
pub trait Authorization: Send + Sync {
    fn authorization_token(&self) -> String;
}

/// Any `Fn() -> String` closure is a strategy, for credentials that rotate
/// outside the client (e.g. a refreshed access token behind a lock).
impl<F> Authorization for F
where
    F: Fn() -> String + Send + Sync,
{
    fn authorization_token(&self) -> String {
        self()
    }
}

fn require(value: &str, what: &str) -> Result<(), EngineError> {
    if value.trim().is_empty() {
        return Err(EngineError::configuration(format!("{what} must not be empty")));
    }
    Ok(())
}

fn basic_credentials(user: &str, secret: &str) -> String {
    STANDARD.encode(format!("{user}:{secret}"))
}

/// Server-issued API key pair. Header: `ApiKey base64(id:secret)`.
#[derive(Clone)]
pub struct ApiKeyAuthorization {
    api_key_id: String,
    api_key_secret: String,
}

impl ApiKeyAuthorization {
    pub fn new(
        api_key_id: impl Into<String>,
        api_key_secret: impl Into<String>,
    ) -> Result<Self, EngineError> {
        let api_key_id = api_key_id.into();
        let api_key_secret = api_key_secret.into();
        require(&api_key_id, "api key id")?;
        require(&api_key_secret, "api key secret")?;
        Ok(Self {
            api_key_id,
            api_key_secret,
        })
    }
}

impl Authorization for ApiKeyAuthorization {
    fn authorization_token(&self) -> String {
        format!(
            "ApiKey {}",
            basic_credentials(&self.api_key_id, &self.api_key_secret)
        )
    }
}

impl fmt::Debug for ApiKeyAuthorization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiKeyAuthorization")
            .field("api_key_id", &self.api_key_id)
            .finish_non_exhaustive()
    }
}

/// Player session credentials. Header: `Basic base64(sessionId:sessionToken)`.
#[derive(Clone)]
pub struct SessionTokenAuthorization {
    session_id: String,
    session_token: String,
}

impl SessionTokenAuthorization {
    pub fn new(
        session_id: impl Into<String>,
        session_token: impl Into<String>,
    ) -> Result<Self, EngineError> {
        let session_id = session_id.into();
        let session_token = session_token.into();
        require(&session_id, "session id")?;
        require(&session_token, "session token")?;
        Ok(Self {
            session_id,
            session_token,
        })
    }
}

impl Authorization for SessionTokenAuthorization {
    fn authorization_token(&self) -> String {
        format!(
            "Basic {}",
            basic_credentials(&self.session_id, &self.session_token)
        )
    }
}

impl fmt::Debug for SessionTokenAuthorization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionTokenAuthorization")
            .field("session_id", &self.session_id)
            .finish_non_exhaustive()
    }
}

/// OAuth-style access token. Header: `Bearer <token>`.
#[derive(Clone)]
pub struct AccessTokenAuthorization {
    token: String,
}

impl AccessTokenAuthorization {
    pub fn new(token: impl Into<String>) -> Result<Self, EngineError> {
        let token = token.into();
        require(&token, "access token")?;
        Ok(Self { token })
    }
}

impl Authorization for AccessTokenAuthorization {
    fn authorization_token(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

impl fmt::Debug for AccessTokenAuthorization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessTokenAuthorization").finish_non_exhaustive()
    }
}

/// Pick a strategy from the environment.
///
/// Checked in order: `ENGINE_ACCESS_TOKEN`, then `ENGINE_SESSION_ID` +
/// `ENGINE_SESSION_TOKEN`, then `ENGINE_API_KEY_ID` + `ENGINE_API_KEY_SECRET`.
pub fn authorization_from_env() -> Result<Arc<dyn Authorization>, EngineError> {
    let var = |key: &str| std::env::var(key).ok().filter(|v| !v.trim().is_empty());

    if let Some(token) = var("ENGINE_ACCESS_TOKEN") {
        return Ok(Arc::new(AccessTokenAuthorization::new(token)?));
    }
    if let (Some(id), Some(token)) = (var("ENGINE_SESSION_ID"), var("ENGINE_SESSION_TOKEN")) {
        return Ok(Arc::new(SessionTokenAuthorization::new(id, token)?));
    }
    if let (Some(id), Some(secret)) = (var("ENGINE_API_KEY_ID"), var("ENGINE_API_KEY_SECRET")) {
        return Ok(Arc::new(ApiKeyAuthorization::new(id, secret)?));
    }

    Err(EngineError::configuration(
        "no credentials found: set ENGINE_ACCESS_TOKEN, ENGINE_SESSION_ID/ENGINE_SESSION_TOKEN \
         or ENGINE_API_KEY_ID/ENGINE_API_KEY_SECRET",
    ))
}
