use std::time::Duration;

/// Per-call overrides layered on top of the dispatcher defaults.
///
/// Headers set here win over the default headers on name collision
/// (names compare case-insensitively). To cancel a call, drop its future.
#[derive(Debug, Clone, Default)]
pub struct ApiOptions {
    pub headers: Vec<(String, String)>,
    pub timeout: Option<Duration>,
}

impl ApiOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}
