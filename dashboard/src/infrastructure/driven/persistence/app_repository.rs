use std::sync::Arc;
use async_trait::async_trait;
use crate::application::ports::AppRepository;
use crate::domain::{App, AppId, AppPatch, NewApp};
use crate::error::BackendError;
use crate::infrastructure::driven::supabase::{QueryBuilder, SupabaseClient};

const TABLE: &str = "apps";

pub struct RestAppRepository {
    client: Arc<SupabaseClient>,
}

impl RestAppRepository {
    pub fn new(client: Arc<SupabaseClient>) -> Self {
        Self { client }
    }

    fn scoped(&self, active_only: bool) -> QueryBuilder<'_> {
        let query = self.client.table(TABLE).select("*");
        if active_only {
            query.eq("is_active", true)
        } else {
            query
        }
    }
}

#[async_trait]
impl AppRepository for RestAppRepository {
    async fn list(&self, active_only: bool) -> Result<Vec<App>, BackendError> {
        self.scoped(active_only).order("sort_order", true).fetch().await
    }

    async fn insert(&self, app: &NewApp) -> Result<App, BackendError> {
        self.client.table(TABLE).select("*").insert(app).await
    }

    async fn update(&self, id: &AppId, patch: &AppPatch) -> Result<App, BackendError> {
        self.client.table(TABLE).select("*").eq("id", id).update(patch).await
    }

    async fn delete(&self, id: &AppId) -> Result<(), BackendError> {
        self.client.table(TABLE).eq("id", id).delete().await
    }

    async fn count(&self, active_only: bool) -> Result<u64, BackendError> {
        self.scoped(active_only).count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BackendConfig;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_active_listing_fills_row_defaults() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/v1/apps"))
            .and(query_param("is_active", "eq.true"))
            .and(query_param("order", "sort_order.asc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "id": "0b6f1e2a-3c4d-4e5f-8a9b-0c1d2e3f4a5b", "code": "pos", "name": "Bán hàng" }
            ])))
            .mount(&server)
            .await;

        let client = SupabaseClient::new(&BackendConfig {
            url: server.uri(),
            anon_key: "anon-key".to_string(),
            request_timeout_secs: 5,
        })
        .unwrap();
        let apps = RestAppRepository::new(Arc::new(client)).list(true).await.unwrap();

        assert_eq!(apps.len(), 1);
        assert_eq!(apps[0].icon, "📱");
        assert_eq!(apps[0].category, "other");
        assert!(apps[0].is_active);
        assert_eq!(apps[0].sort_order, 0);
    }
}
