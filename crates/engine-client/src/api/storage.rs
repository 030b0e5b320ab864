use urlencoding::encode;

use super::*;

/// Per-account key/value storage endpoints.
#[derive(Debug, Clone)]
pub struct StorageApi {
    client: EngineClient,
}

impl StorageApi {
    pub fn new(client: EngineClient) -> Self {
        Self { client }
    }

    pub async fn list_storage_entries(
        &self,
        account_id: &str,
        query: &ListStorageQuery,
        options: Option<&ApiOptions>,
    ) -> Result<Vec<StorageEntry>, EngineError> {
        self.client
            .get(
                &format!("accounts/{}/storage", encode(account_id)),
                Some(&query.to_query()),
                options,
            )
            .await
    }

    pub async fn get_storage_entry(
        &self,
        account_id: &str,
        key: &str,
        options: Option<&ApiOptions>,
    ) -> Result<StorageEntry, EngineError> {
        self.client
            .get(&entry_path(account_id, key), None, options)
            .await
    }

    pub async fn put_storage_entry(
        &self,
        account_id: &str,
        key: &str,
        request: &PutStorageRequest,
        options: Option<&ApiOptions>,
    ) -> Result<StorageEntry, EngineError> {
        self.client
            .put(&entry_path(account_id, key), Some(request), None, options)
            .await
    }

    pub async fn delete_storage_entry(
        &self,
        account_id: &str,
        key: &str,
        options: Option<&ApiOptions>,
    ) -> Result<(), EngineError> {
        self.client
            .delete_no_content(&entry_path(account_id, key), None, options)
            .await
    }
}

fn entry_path(account_id: &str, key: &str) -> String {
    format!("accounts/{}/storage/{}", encode(account_id), encode(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_keys_with_slashes_stay_one_segment() {
        assert_eq!(
            entry_path("acc123", "settings/audio"),
            "accounts/acc123/storage/settings%2Faudio"
        );
    }

    #[test]
    fn list_query_joins_keys() {
        let query = ListStorageQuery {
            prefix: None,
            keys: Some(vec!["a".into(), "b".into()]),
        };
        assert_eq!(
            query.to_query().pairs(),
            vec![("keys".to_string(), "a,b".to_string())]
        );
    }
}
