use super::*;

/// OAuth authorization code obtained from Discord's consent screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscordAuthRequest {
    pub code: String,
    pub redirect_uri: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscordUser {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub global_name: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscordAuthResponse {
    pub account: Account,
    pub session: Session,
    pub discord_user: DiscordUser,
    /// True when the login created the account.
    #[serde(default)]
    pub created: bool,
}
