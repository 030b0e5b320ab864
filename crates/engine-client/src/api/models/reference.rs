use serde_json::Value;

use super::*;

/// Keyed, typed reference data shared by all players of an application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reference {
    pub key: String,
    #[serde(rename = "type")]
    pub reference_type: String,
    #[serde(default)]
    pub value: Value,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PutReferenceRequest {
    #[serde(rename = "type")]
    pub reference_type: String,
    pub value: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListReferencesQuery {
    pub reference_type: Option<String>,
    pub page_index: Option<u32>,
    pub page_size: Option<u32>,
}

impl ToQuery for ListReferencesQuery {
    fn to_query(&self) -> Query {
        Query::new()
            .set_opt("type", self.reference_type.as_deref())
            .set_opt("pageIndex", self.page_index)
            .set_opt("pageSize", self.page_size)
    }
}
