use urlencoding::encode;

use super::*;

/// Session endpoints.
#[derive(Debug, Clone)]
pub struct SessionApi {
    client: EngineClient,
}

impl SessionApi {
    pub fn new(client: EngineClient) -> Self {
        Self { client }
    }

    /// Log in; the returned session can back a
    /// [`SessionTokenAuthorization`](crate::SessionTokenAuthorization).
    pub async fn create_session(
        &self,
        request: &CreateSessionRequest,
        options: Option<&ApiOptions>,
    ) -> Result<Session, EngineError> {
        self.client
            .post("sessions", Some(request), None, options)
            .await
    }

    pub async fn get_session(
        &self,
        session_id: &str,
        options: Option<&ApiOptions>,
    ) -> Result<Session, EngineError> {
        self.client
            .get(&format!("sessions/{}", encode(session_id)), None, options)
            .await
    }

    /// Extend the session's expiry.
    pub async fn refresh_session(
        &self,
        session_id: &str,
        options: Option<&ApiOptions>,
    ) -> Result<Session, EngineError> {
        self.client
            .put::<(), _>(
                &format!("sessions/{}", encode(session_id)),
                None,
                None,
                options,
            )
            .await
    }

    pub async fn delete_session(
        &self,
        session_id: &str,
        options: Option<&ApiOptions>,
    ) -> Result<(), EngineError> {
        self.client
            .delete_no_content(&format!("sessions/{}", encode(session_id)), None, options)
            .await
    }

    pub async fn list_account_sessions(
        &self,
        account_id: &str,
        query: &PageQuery,
        options: Option<&ApiOptions>,
    ) -> Result<Page<Session>, EngineError> {
        self.client
            .get(
                &format!("accounts/{}/sessions", encode(account_id)),
                Some(&query.to_query()),
                options,
            )
            .await
    }
}
