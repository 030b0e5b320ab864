use urlencoding::encode;

use super::*;

/// Sound endpoints.
#[derive(Debug, Clone)]
pub struct SoundApi {
    client: EngineClient,
}

impl SoundApi {
    pub fn new(client: EngineClient) -> Self {
        Self { client }
    }

    pub async fn list_sounds(
        &self,
        query: &ListSoundsQuery,
        options: Option<&ApiOptions>,
    ) -> Result<Page<Sound>, EngineError> {
        self.client
            .get("sounds", Some(&query.to_query()), options)
            .await
    }

    pub async fn get_sound(
        &self,
        sound_id: &str,
        options: Option<&ApiOptions>,
    ) -> Result<Sound, EngineError> {
        self.client
            .get(&format!("sounds/{}", encode(sound_id)), None, options)
            .await
    }

    pub async fn create_sound(
        &self,
        request: &SoundRequest,
        options: Option<&ApiOptions>,
    ) -> Result<Sound, EngineError> {
        self.client
            .post("sounds", Some(request), None, options)
            .await
    }

    pub async fn update_sound(
        &self,
        sound_id: &str,
        request: &UpdateSoundRequest,
        options: Option<&ApiOptions>,
    ) -> Result<Sound, EngineError> {
        self.client
            .patch(
                &format!("sounds/{}", encode(sound_id)),
                Some(request),
                None,
                options,
            )
            .await
    }

    pub async fn delete_sound(
        &self,
        sound_id: &str,
        options: Option<&ApiOptions>,
    ) -> Result<(), EngineError> {
        self.client
            .delete_no_content(&format!("sounds/{}", encode(sound_id)), None, options)
            .await
    }
}
