use super::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sound {
    pub id: String,
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub category: Option<String>,
    pub volume: f64,
    #[serde(default)]
    pub looping: bool,
    #[serde(default)]
    pub enabled: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoundRequest {
    pub name: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub volume: f64,
    pub looping: bool,
    pub enabled: bool,
}

/// Body of `PATCH sounds/{id}`; unset fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSoundRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub looping: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListSoundsQuery {
    pub enabled: Option<bool>,
    pub category: Option<String>,
    pub page_index: Option<u32>,
    pub page_size: Option<u32>,
}

impl ToQuery for ListSoundsQuery {
    fn to_query(&self) -> Query {
        Query::new()
            .set_opt("enabled", self.enabled)
            .set_opt("category", self.category.as_deref())
            .set_opt("pageIndex", self.page_index)
            .set_opt("pageSize", self.page_size)
    }
}
