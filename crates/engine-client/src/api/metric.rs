use urlencoding::encode;

use super::*;

/// Account metric and leaderboard endpoints.
#[derive(Debug, Clone)]
pub struct MetricApi {
    client: EngineClient,
}

impl MetricApi {
    pub fn new(client: EngineClient) -> Self {
        Self { client }
    }

    pub async fn get_account_metrics(
        &self,
        account_id: &str,
        query: &MetricsQuery,
        options: Option<&ApiOptions>,
    ) -> Result<Vec<Metric>, EngineError> {
        self.client
            .get(
                &format!("accounts/{}/metrics", encode(account_id)),
                Some(&query.to_query()),
                options,
            )
            .await
    }

    /// Overwrite the given metrics; metrics not listed are untouched.
    pub async fn set_account_metrics(
        &self,
        account_id: &str,
        updates: &[MetricUpdate],
        options: Option<&ApiOptions>,
    ) -> Result<Vec<Metric>, EngineError> {
        self.client
            .put(
                &format!("accounts/{}/metrics", encode(account_id)),
                Some(updates),
                None,
                options,
            )
            .await
    }

    pub async fn increment_account_metric(
        &self,
        account_id: &str,
        key: &str,
        request: &IncrementMetricRequest,
        options: Option<&ApiOptions>,
    ) -> Result<Metric, EngineError> {
        self.client
            .post(
                &format!(
                    "accounts/{}/metrics/{}/increments",
                    encode(account_id),
                    encode(key)
                ),
                Some(request),
                None,
                options,
            )
            .await
    }

    pub async fn delete_account_metric(
        &self,
        account_id: &str,
        key: &str,
        options: Option<&ApiOptions>,
    ) -> Result<(), EngineError> {
        self.client
            .delete_no_content(
                &format!("accounts/{}/metrics/{}", encode(account_id), encode(key)),
                None,
                options,
            )
            .await
    }

    pub async fn get_leaderboard(
        &self,
        key: &str,
        query: &LeaderboardQuery,
        options: Option<&ApiOptions>,
    ) -> Result<Page<LeaderboardEntry>, EngineError> {
        self.client
            .get(
                &format!("metrics/{}/leaderboard", encode(key)),
                Some(&query.to_query()),
                options,
            )
            .await
    }
}
