use urlencoding::encode;

use super::*;

/// Reference data endpoints.
#[derive(Debug, Clone)]
pub struct ReferenceApi {
    client: EngineClient,
}

impl ReferenceApi {
    pub fn new(client: EngineClient) -> Self {
        Self { client }
    }

    pub async fn list_references(
        &self,
        query: &ListReferencesQuery,
        options: Option<&ApiOptions>,
    ) -> Result<Page<Reference>, EngineError> {
        self.client
            .get("references", Some(&query.to_query()), options)
            .await
    }

    pub async fn get_reference(
        &self,
        key: &str,
        options: Option<&ApiOptions>,
    ) -> Result<Reference, EngineError> {
        self.client
            .get(&format!("references/{}", encode(key)), None, options)
            .await
    }

    /// Create or replace the reference stored under `key`.
    pub async fn put_reference(
        &self,
        key: &str,
        request: &PutReferenceRequest,
        options: Option<&ApiOptions>,
    ) -> Result<Reference, EngineError> {
        self.client
            .put(
                &format!("references/{}", encode(key)),
                Some(request),
                None,
                options,
            )
            .await
    }

    pub async fn delete_reference(
        &self,
        key: &str,
        options: Option<&ApiOptions>,
    ) -> Result<(), EngineError> {
        self.client
            .delete_no_content(&format!("references/{}", encode(key)), None, options)
            .await
    }
}
