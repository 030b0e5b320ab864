use urlencoding::encode;

use super::*;

/// Game server endpoints. Single-server calls target the configured server id.
#[derive(Debug, Clone)]
pub struct ServerApi {
    client: EngineClient,
}

impl ServerApi {
    pub fn new(client: EngineClient) -> Self {
        Self { client }
    }

    fn server_path(&self) -> String {
        format!("servers/{}", encode(&self.client.config().server_id))
    }

    pub async fn get_server(&self, options: Option<&ApiOptions>) -> Result<Server, EngineError> {
        self.client.get(&self.server_path(), None, options).await
    }

    pub async fn get_server_status(
        &self,
        options: Option<&ApiOptions>,
    ) -> Result<ServerStatus, EngineError> {
        self.client
            .get(&format!("{}/status", self.server_path()), None, options)
            .await
    }

    pub async fn update_server(
        &self,
        request: &UpdateServerRequest,
        options: Option<&ApiOptions>,
    ) -> Result<Server, EngineError> {
        self.client
            .patch(&self.server_path(), Some(request), None, options)
            .await
    }

    pub async fn list_servers(
        &self,
        query: &PageQuery,
        options: Option<&ApiOptions>,
    ) -> Result<Page<Server>, EngineError> {
        self.client
            .get("servers", Some(&query.to_query()), options)
            .await
    }
}
