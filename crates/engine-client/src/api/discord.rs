use urlencoding::encode;

use super::*;

/// Discord OAuth login and account linking.
#[derive(Debug, Clone)]
pub struct DiscordApi {
    client: EngineClient,
}

impl DiscordApi {
    pub fn new(client: EngineClient) -> Self {
        Self { client }
    }

    /// Exchange a Discord authorization code for an account and session,
    /// creating the account on first login.
    pub async fn authenticate(
        &self,
        request: &DiscordAuthRequest,
        options: Option<&ApiOptions>,
    ) -> Result<DiscordAuthResponse, EngineError> {
        self.client
            .post("auth/discord", Some(request), None, options)
            .await
    }

    pub async fn link_account(
        &self,
        account_id: &str,
        request: &DiscordAuthRequest,
        options: Option<&ApiOptions>,
    ) -> Result<Account, EngineError> {
        self.client
            .post(
                &format!("accounts/{}/discord", encode(account_id)),
                Some(request),
                None,
                options,
            )
            .await
    }

    pub async fn unlink_account(
        &self,
        account_id: &str,
        options: Option<&ApiOptions>,
    ) -> Result<(), EngineError> {
        self.client
            .delete_no_content(
                &format!("accounts/{}/discord", encode(account_id)),
                None,
                options,
            )
            .await
    }
}
