use urlencoding::encode;

use super::*;

/// Camera endpoints.
#[derive(Debug, Clone)]
pub struct CameraApi {
    client: EngineClient,
}

impl CameraApi {
    pub fn new(client: EngineClient) -> Self {
        Self { client }
    }

    pub async fn list_cameras(
        &self,
        query: &PageQuery,
        options: Option<&ApiOptions>,
    ) -> Result<Page<Camera>, EngineError> {
        self.client
            .get("cameras", Some(&query.to_query()), options)
            .await
    }

    pub async fn get_camera(
        &self,
        camera_id: &str,
        options: Option<&ApiOptions>,
    ) -> Result<Camera, EngineError> {
        self.client
            .get(&format!("cameras/{}", encode(camera_id)), None, options)
            .await
    }

    pub async fn create_camera(
        &self,
        request: &CameraRequest,
        options: Option<&ApiOptions>,
    ) -> Result<Camera, EngineError> {
        self.client
            .post("cameras", Some(request), None, options)
            .await
    }

    /// Replace a camera. The server answers 204 with no body.
    pub async fn update_camera(
        &self,
        camera_id: &str,
        request: &CameraRequest,
        options: Option<&ApiOptions>,
    ) -> Result<(), EngineError> {
        self.client
            .put_no_content(
                &format!("cameras/{}", encode(camera_id)),
                Some(request),
                None,
                options,
            )
            .await
    }

    pub async fn delete_camera(
        &self,
        camera_id: &str,
        options: Option<&ApiOptions>,
    ) -> Result<(), EngineError> {
        self.client
            .delete_no_content(&format!("cameras/{}", encode(camera_id)), None, options)
            .await
    }
}
