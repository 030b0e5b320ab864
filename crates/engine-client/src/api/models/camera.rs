use super::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Camera {
    pub id: String,
    pub name: String,
    pub position: Vector3,
    #[serde(default)]
    pub rotation: Vector3,
    pub field_of_view: f64,
    #[serde(default)]
    pub enabled: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Body of `POST cameras` and `PUT cameras/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraRequest {
    pub name: String,
    pub position: Vector3,
    pub rotation: Vector3,
    pub field_of_view: f64,
    pub enabled: bool,
}
