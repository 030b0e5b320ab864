use serde_json::Value;

use super::*;

/// Per-account key/value entry; the value is opaque JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageEntry {
    pub key: String,
    #[serde(default)]
    pub value: Value,
    #[serde(default)]
    pub version: u64,
    pub updated_at: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PutStorageRequest {
    pub value: Value,
    /// Optimistic concurrency check; the server rejects a stale version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_version: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListStorageQuery {
    pub prefix: Option<String>,
    pub keys: Option<Vec<String>>,
}

impl ToQuery for ListStorageQuery {
    fn to_query(&self) -> Query {
        Query::new()
            .set_opt("prefix", self.prefix.as_deref())
            .set_opt("keys", self.keys.clone())
    }
}
