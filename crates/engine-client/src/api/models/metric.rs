use super::*;

/// Typed metric value, tagged by `valueType` next to a `value` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "valueType", rename_all = "camelCase")]
pub enum MetricValue {
    Number { value: f64 },
    String { value: String },
    Boolean { value: bool },
    Timestamp { value: i64 },
}

impl MetricValue {
    /// Numeric view of the value; strings are not coerced.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number { value } => Some(*value),
            Self::Timestamp { value } => Some(*value as f64),
            Self::Boolean { value } => Some(if *value { 1.0 } else { 0.0 }),
            Self::String { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metric {
    pub key: String,
    /// Key including its namespace, e.g. `season1.score`.
    pub full_key: String,
    #[serde(flatten)]
    pub value: MetricValue,
    pub updated_at: i64,
}

/// One element of the `PUT accounts/{id}/metrics` body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricUpdate {
    pub key: String,
    #[serde(flatten)]
    pub value: MetricValue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncrementMetricRequest {
    pub amount: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetricsQuery {
    /// Restrict the result to these full keys; sent comma-joined.
    pub full_keys: Option<Vec<String>>,
}

impl ToQuery for MetricsQuery {
    fn to_query(&self) -> Query {
        Query::new().set_opt("fullKeys", self.full_keys.clone())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeaderboardQuery {
    pub page_index: Option<u32>,
    pub page_size: Option<u32>,
    pub ascending: Option<bool>,
}

impl ToQuery for LeaderboardQuery {
    fn to_query(&self) -> Query {
        Query::new()
            .set_opt("pageIndex", self.page_index)
            .set_opt("pageSize", self.page_size)
            .set_opt("ascending", self.ascending)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub rank: u64,
    pub account_id: String,
    #[serde(default)]
    pub display_name: Option<String>,
    pub value: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_value_is_selected_by_value_type() {
        let body = r#"[
            {"key":"score","fullKey":"season1.score","valueType":"number","value":42.5,"updatedAt":1700000000000},
            {"key":"title","fullKey":"title","valueType":"string","value":"Champion","updatedAt":1700000000001},
            {"key":"vip","fullKey":"vip","valueType":"boolean","value":true,"updatedAt":1700000000002},
            {"key":"lastWin","fullKey":"lastWin","valueType":"timestamp","value":1699999999999,"updatedAt":1700000000003}
        ]"#;

        let metrics: Vec<Metric> = serde_json::from_str(body).unwrap();
        assert_eq!(metrics[0].value, MetricValue::Number { value: 42.5 });
        assert_eq!(metrics[0].full_key, "season1.score");
        assert_eq!(
            metrics[1].value,
            MetricValue::String {
                value: "Champion".into()
            }
        );
        assert_eq!(metrics[2].value.as_f64(), Some(1.0));
        assert_eq!(
            metrics[3].value,
            MetricValue::Timestamp {
                value: 1_699_999_999_999
            }
        );
        assert_eq!(metrics[3].updated_at, 1_700_000_000_003);
    }

    #[test]
    fn metric_update_serializes_flat() {
        let update = MetricUpdate {
            key: "level".into(),
            value: MetricValue::Number { value: 3.0 },
        };
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            serde_json::json!({"key": "level", "valueType": "number", "value": 3.0})
        );
    }

    #[test]
    fn metrics_query_joins_full_keys() {
        let query = MetricsQuery {
            full_keys: Some(vec!["score".into(), "level".into()]),
        };
        assert_eq!(
            query.to_query().pairs(),
            vec![("fullKeys".to_string(), "score,level".to_string())]
        );
        assert!(MetricsQuery::default().to_query().is_empty());
    }

    #[test]
    fn leaderboard_query_keeps_false() {
        let query = LeaderboardQuery {
            page_index: Some(0),
            page_size: None,
            ascending: Some(false),
        };
        assert_eq!(query.to_query().to_query_string(), "pageIndex=0&ascending=false");
    }
}
