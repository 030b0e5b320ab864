//! Client configuration.

use serde::{Deserialize, Serialize};

use crate::EngineError;

const DEFAULT_LOCALE: &str = "en-US";

/// Base settings shared by every request of one [`EngineClient`](crate::EngineClient).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    pub api_url: String,
    pub application_name: String,
    pub server_id: String,
    #[serde(default = "default_locale")]
    pub locale: String,
}

fn default_locale() -> String {
    DEFAULT_LOCALE.into()
}

impl ClientConfig {
    pub fn new(
        api_url: impl Into<String>,
        application_name: impl Into<String>,
        server_id: impl Into<String>,
        locale: impl Into<String>,
    ) -> Self {
        Self {
            api_url: api_url.into(),
            application_name: application_name.into(),
            server_id: server_id.into(),
            locale: locale.into(),
        }
    }

    /// Load from `ENGINE_API_URL`, `ENGINE_APPLICATION_NAME`,
    /// `ENGINE_SERVER_ID` and `ENGINE_LOCALE` (defaults to `en-US`).
    pub fn from_env() -> Result<Self, EngineError> {
        let required = |key: &str| -> Result<String, EngineError> {
            std::env::var(key)
                .ok()
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| EngineError::configuration(format!("{key} is not set")))
        };

        let locale = std::env::var("ENGINE_LOCALE")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(default_locale);

        Ok(Self {
            api_url: required("ENGINE_API_URL")?,
            application_name: required("ENGINE_APPLICATION_NAME")?,
            server_id: required("ENGINE_SERVER_ID")?,
            locale,
        })
    }

    pub(crate) fn validate(&self) -> Result<(), EngineError> {
        if self.api_url.trim().is_empty() {
            return Err(EngineError::configuration("api url must not be empty"));
        }
        url::Url::parse(&self.api_url).map_err(|e| {
            EngineError::configuration(format!("invalid api url {:?}: {e}", self.api_url))
        })?;
        Ok(())
    }
}
