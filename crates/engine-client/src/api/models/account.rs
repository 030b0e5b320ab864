use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AccountStatus {
    Active,
    Suspended,
    Banned,
    Deleted,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    pub status: AccountStatus,
    #[serde(default)]
    pub roles: Vec<String>,
    pub created_at: i64,
    pub updated_at: i64,
    #[serde(default)]
    pub last_login_at: Option<i64>,
}

/// Body of `POST accounts`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterAccountRequest {
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

/// Body of `PATCH accounts/{id}`; unset fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAccountRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListAccountsQuery {
    pub page_index: Option<u32>,
    pub page_size: Option<u32>,
    pub search: Option<String>,
    pub include_deleted: Option<bool>,
}

impl ToQuery for ListAccountsQuery {
    fn to_query(&self) -> Query {
        Query::new()
            .set_opt("pageIndex", self.page_index)
            .set_opt("pageSize", self.page_size)
            .set_opt("search", self.search.as_deref())
            .set_opt("includeDeleted", self.include_deleted)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSummary {
    pub account_id: String,
    #[serde(default)]
    pub session_count: u64,
    #[serde(default)]
    pub total_play_time_ms: u64,
    #[serde(default)]
    pub metric_count: u64,
    #[serde(default)]
    pub storage_entry_count: u64,
    #[serde(default)]
    pub last_seen_at: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BanAccountRequest {
    pub reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountBan {
    pub account_id: String,
    pub reason: String,
    pub created_at: i64,
    #[serde(default)]
    pub expires_at: Option<i64>,
}
