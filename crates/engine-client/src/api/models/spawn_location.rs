use super::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpawnLocation {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub region: Option<String>,
    pub position: Vector3,
    /// Facing in degrees around the vertical axis.
    #[serde(default)]
    pub heading: f64,
    /// Relative pick weight when several locations qualify.
    #[serde(default = "default_weight")]
    pub weight: u32,
    #[serde(default)]
    pub enabled: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

fn default_weight() -> u32 {
    1
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpawnLocationRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    pub position: Vector3,
    pub heading: f64,
    pub weight: u32,
    pub enabled: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListSpawnLocationsQuery {
    pub region: Option<String>,
    pub enabled: Option<bool>,
    pub page_index: Option<u32>,
    pub page_size: Option<u32>,
}

impl ToQuery for ListSpawnLocationsQuery {
    fn to_query(&self) -> Query {
        Query::new()
            .set_opt("region", self.region.as_deref())
            .set_opt("enabled", self.enabled)
            .set_opt("pageIndex", self.page_index)
            .set_opt("pageSize", self.page_size)
    }
}
