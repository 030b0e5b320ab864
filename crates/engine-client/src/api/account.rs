use urlencoding::encode;

use super::*;

/// Resource name the server used for account summaries when this client
/// was written; some deployments expose the singular `summary` instead.
const DEFAULT_SUMMARY_RESOURCE: &str = "summaries";

/// Account endpoints.
#[derive(Debug, Clone)]
pub struct AccountApi {
    client: EngineClient,
    summary_resource: String,
}

impl AccountApi {
    pub fn new(client: EngineClient) -> Self {
        Self {
            client,
            summary_resource: DEFAULT_SUMMARY_RESOURCE.into(),
        }
    }

    /// Override the trailing path segment of [`Self::get_account_summary`].
    #[must_use]
    pub fn with_summary_resource(mut self, resource: impl Into<String>) -> Self {
        self.summary_resource = resource.into();
        self
    }

    pub async fn register_account(
        &self,
        request: &RegisterAccountRequest,
        options: Option<&ApiOptions>,
    ) -> Result<Account, EngineError> {
        self.client
            .post("accounts", Some(request), None, options)
            .await
    }

    pub async fn get_account(
        &self,
        account_id: &str,
        options: Option<&ApiOptions>,
    ) -> Result<Account, EngineError> {
        self.client
            .get(&format!("accounts/{}", encode(account_id)), None, options)
            .await
    }

    pub async fn list_accounts(
        &self,
        query: &ListAccountsQuery,
        options: Option<&ApiOptions>,
    ) -> Result<Page<Account>, EngineError> {
        self.client
            .get("accounts", Some(&query.to_query()), options)
            .await
    }

    pub async fn update_account(
        &self,
        account_id: &str,
        request: &UpdateAccountRequest,
        options: Option<&ApiOptions>,
    ) -> Result<Account, EngineError> {
        self.client
            .patch(
                &format!("accounts/{}", encode(account_id)),
                Some(request),
                None,
                options,
            )
            .await
    }

    pub async fn delete_account(
        &self,
        account_id: &str,
        options: Option<&ApiOptions>,
    ) -> Result<(), EngineError> {
        self.client
            .delete_no_content(&format!("accounts/{}", encode(account_id)), None, options)
            .await
    }

    pub async fn get_account_summary(
        &self,
        account_id: &str,
        options: Option<&ApiOptions>,
    ) -> Result<AccountSummary, EngineError> {
        self.client
            .get(&self.summary_path(account_id), None, options)
            .await
    }

    pub async fn ban_account(
        &self,
        account_id: &str,
        request: &BanAccountRequest,
        options: Option<&ApiOptions>,
    ) -> Result<AccountBan, EngineError> {
        self.client
            .post(
                &format!("accounts/{}/bans", encode(account_id)),
                Some(request),
                None,
                options,
            )
            .await
    }

    pub async fn unban_account(
        &self,
        account_id: &str,
        options: Option<&ApiOptions>,
    ) -> Result<(), EngineError> {
        self.client
            .delete_no_content(
                &format!("accounts/{}/bans", encode(account_id)),
                None,
                options,
            )
            .await
    }

    fn summary_path(&self, account_id: &str) -> String {
        format!(
            "accounts/{}/{}",
            encode(account_id),
            self.summary_resource.trim_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AccessTokenAuthorization;

    fn api() -> AccountApi {
        let client = EngineClient::new(
            ClientConfig::new("http://mock-api", "arena", "srv-1", "en-US"),
            AccessTokenAuthorization::new("tok123").unwrap(),
        )
        .unwrap();
        client.accounts()
    }

    #[test]
    fn summary_path_defaults_to_plural_resource() {
        assert_eq!(api().summary_path("acc123"), "accounts/acc123/summaries");
    }

    #[test]
    fn summary_path_can_be_overridden() {
        let api = api().with_summary_resource("/summary");
        assert_eq!(api.summary_path("acc123"), "accounts/acc123/summary");
    }

    #[test]
    fn path_parameters_are_percent_encoded() {
        assert_eq!(api().summary_path("a b/c"), "accounts/a%20b%2Fc/summaries");
    }

    #[test]
    fn account_keeps_numeric_timestamps() {
        let body = r#"{
            "id": "acc123",
            "username": "player1",
            "status": "active",
            "createdAt": 1700000000000,
            "updatedAt": 1700000000500
        }"#;
        let account: Account = serde_json::from_str(body).unwrap();
        assert_eq!(account.created_at, 1_700_000_000_000);
        assert_eq!(account.status, AccountStatus::Active);
        assert!(account.roles.is_empty());
        assert_eq!(account.last_login_at, None);
    }

    #[test]
    fn register_request_omits_unset_fields() {
        let request = RegisterAccountRequest {
            username: "player1".into(),
            password: Some("hunter2".into()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({"username": "player1", "password": "hunter2"})
        );
    }
}
