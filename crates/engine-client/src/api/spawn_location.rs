use urlencoding::encode;

use super::*;

/// Spawn location endpoints.
#[derive(Debug, Clone)]
pub struct SpawnLocationApi {
    client: EngineClient,
}

impl SpawnLocationApi {
    pub fn new(client: EngineClient) -> Self {
        Self { client }
    }

    pub async fn list_spawn_locations(
        &self,
        query: &ListSpawnLocationsQuery,
        options: Option<&ApiOptions>,
    ) -> Result<Page<SpawnLocation>, EngineError> {
        self.client
            .get("spawn-locations", Some(&query.to_query()), options)
            .await
    }

    pub async fn get_spawn_location(
        &self,
        location_id: &str,
        options: Option<&ApiOptions>,
    ) -> Result<SpawnLocation, EngineError> {
        self.client
            .get(
                &format!("spawn-locations/{}", encode(location_id)),
                None,
                options,
            )
            .await
    }

    pub async fn create_spawn_location(
        &self,
        request: &SpawnLocationRequest,
        options: Option<&ApiOptions>,
    ) -> Result<SpawnLocation, EngineError> {
        self.client
            .post("spawn-locations", Some(request), None, options)
            .await
    }

    pub async fn update_spawn_location(
        &self,
        location_id: &str,
        request: &SpawnLocationRequest,
        options: Option<&ApiOptions>,
    ) -> Result<SpawnLocation, EngineError> {
        self.client
            .put(
                &format!("spawn-locations/{}", encode(location_id)),
                Some(request),
                None,
                options,
            )
            .await
    }

    pub async fn delete_spawn_location(
        &self,
        location_id: &str,
        options: Option<&ApiOptions>,
    ) -> Result<(), EngineError> {
        self.client
            .delete_no_content(
                &format!("spawn-locations/{}", encode(location_id)),
                None,
                options,
            )
            .await
    }
}
