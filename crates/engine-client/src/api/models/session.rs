use super::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub session_id: String,
    pub session_token: String,
    pub account_id: String,
    pub created_at: i64,
    pub expires_at: i64,
    #[serde(default)]
    pub ip_address: Option<String>,
}

/// Body of `POST sessions` (username/password login).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionRequest {
    pub username: String,
    pub password: String,
}
