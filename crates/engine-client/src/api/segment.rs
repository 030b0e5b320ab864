use urlencoding::encode;

use super::*;

/// Segment endpoints.
#[derive(Debug, Clone)]
pub struct SegmentApi {
    client: EngineClient,
}

impl SegmentApi {
    pub fn new(client: EngineClient) -> Self {
        Self { client }
    }

    pub async fn list_segments(
        &self,
        query: &PageQuery,
        options: Option<&ApiOptions>,
    ) -> Result<Page<Segment>, EngineError> {
        self.client
            .get("segments", Some(&query.to_query()), options)
            .await
    }

    pub async fn get_segment(
        &self,
        segment_id: &str,
        options: Option<&ApiOptions>,
    ) -> Result<Segment, EngineError> {
        self.client
            .get(&format!("segments/{}", encode(segment_id)), None, options)
            .await
    }

    pub async fn create_segment(
        &self,
        request: &SegmentRequest,
        options: Option<&ApiOptions>,
    ) -> Result<Segment, EngineError> {
        self.client
            .post("segments", Some(request), None, options)
            .await
    }

    pub async fn update_segment(
        &self,
        segment_id: &str,
        request: &SegmentRequest,
        options: Option<&ApiOptions>,
    ) -> Result<Segment, EngineError> {
        self.client
            .put(
                &format!("segments/{}", encode(segment_id)),
                Some(request),
                None,
                options,
            )
            .await
    }

    pub async fn delete_segment(
        &self,
        segment_id: &str,
        options: Option<&ApiOptions>,
    ) -> Result<(), EngineError> {
        self.client
            .delete_no_content(&format!("segments/{}", encode(segment_id)), None, options)
            .await
    }

    /// Accounts currently matching the segment's conditions.
    pub async fn list_segment_accounts(
        &self,
        segment_id: &str,
        query: &PageQuery,
        options: Option<&ApiOptions>,
    ) -> Result<Page<Account>, EngineError> {
        self.client
            .get(
                &format!("segments/{}/accounts", encode(segment_id)),
                Some(&query.to_query()),
                options,
            )
            .await
    }
}
