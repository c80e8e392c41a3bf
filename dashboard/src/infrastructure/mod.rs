// Infrastructure layer - the hosted platform and local storage
// Implements the ports defined in the application layer

use std::sync::Arc;

use crate::application::auth::AuthFacade;
use crate::application::data::{DataFacade, DataRepositories};
use crate::application::ports::LocalStorage;
use crate::application::super_admin::AdminFacade;
use crate::config::AppConfig;
use crate::error::ConfigError;

pub mod driven;    // Output adapters (platform APIs, local storage)

use driven::{
    shared_client, FileStorage, RestAppRepository, RestMembershipRepository, RestProfileRepository,
    RestTenantAppRepository, RestTenantRepository, SupabaseAuth, SupabaseClient,
};

/// Everything a dashboard page needs, wired against one platform client.
#[derive(Clone)]
pub struct Platform {
    pub config: Arc<AppConfig>,
    pub client: Arc<SupabaseClient>,
    pub auth: Arc<AuthFacade>,
    pub data: Arc<DataFacade>,
    pub admin: Arc<AdminFacade>,
}

impl Platform {
    /// Uses the process-wide client and the configured storage file.
    pub fn connect(config: AppConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let client = shared_client(&config.backend)?;
        let storage = Arc::new(FileStorage::open(&config.storage.path)?);
        Ok(Self::with_parts(client, storage, config))
    }

    pub fn with_parts(
        client: Arc<SupabaseClient>,
        storage: Arc<dyn LocalStorage>,
        config: AppConfig,
    ) -> Self {
        let config = Arc::new(config);
        let repos = DataRepositories {
            tenants: Arc::new(RestTenantRepository::new(client.clone())),
            profiles: Arc::new(RestProfileRepository::new(client.clone())),
            apps: Arc::new(RestAppRepository::new(client.clone())),
            tenant_apps: Arc::new(RestTenantAppRepository::new(client.clone())),
            memberships: Arc::new(RestMembershipRepository::new(client.clone())),
        };

        let auth = Arc::new(AuthFacade::new(
            Arc::new(SupabaseAuth::new(client.clone())),
            repos.memberships.clone(),
            storage,
            config.clone(),
        ));
        let admin = Arc::new(AdminFacade::new(
            auth.clone(),
            repos.tenants.clone(),
            repos.profiles.clone(),
            repos.apps.clone(),
        ));
        let data = Arc::new(DataFacade::new(repos));

        Self {
            config,
            client,
            auth,
            data,
            admin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::auth::{SessionCache, SESSION_KEY, TENANT_ID_KEY, TENANT_KEY};
    use crate::domain::{AuthSession, AuthUser, UserId};
    use chrono::{Duration, Utc};
    use crate::config::BackendConfig;
    use driven::MemoryStorage;
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const USER_ID: &str = "7c9e6679-7425-40de-944b-e07fc1f90ae7";
    const TENANT_ID: &str = "2f1c4b8e-9f6a-4d5e-8a1b-3c2d1e0f9a8b";

    fn platform_for(server: &MockServer, storage: Arc<MemoryStorage>) -> Platform {
        let mut config = AppConfig::default();
        config.backend = BackendConfig {
            url: server.uri(),
            anon_key: "anon-key".to_string(),
            request_timeout_secs: 5,
        };
        let client = Arc::new(SupabaseClient::new(&config.backend).unwrap());
        Platform::with_parts(client, storage, config)
    }

    #[tokio::test]
    async fn test_sign_in_then_sign_out_round_trip() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/v1/token"))
            .and(query_param("grant_type", "password"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "user-token",
                "refresh_token": "refresh",
                "expires_in": 3600,
                "user": { "id": USER_ID, "email": "lan@minhlong.vn" }
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/rest/v1/tenant_users"))
            .and(header("authorization", "Bearer user-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
                "id": "5a0f3d6c-1b2e-4c3d-9e8f-7a6b5c4d3e2f",
                "tenant_id": TENANT_ID,
                "user_id": USER_ID,
                "role": "END_USER",
                "is_active": true,
                "tenants": {
                    "id": TENANT_ID,
                    "name": "Công ty Minh Long",
                    "code": "cong-ty-minh-long",
                    "plan": "professional",
                    "status": "active"
                }
            }])))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/auth/v1/logout"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let storage = Arc::new(MemoryStorage::default());
        let platform = platform_for(&server, storage.clone());

        let signed_in = platform.auth.sign_in("lan@minhlong.vn", "secret123").await.unwrap();
        assert_eq!(signed_in.tenant.map(|t| t.code), Some("cong-ty-minh-long".to_string()));
        assert_eq!(storage.get_item(TENANT_ID_KEY).unwrap().as_deref(), Some(TENANT_ID));
        assert_eq!(platform.auth.trial_status().map(|s| s.days_left), Some(-1));
        assert_eq!(platform.client.access_token().await.as_deref(), Some("user-token"));

        platform.auth.sign_out().await.unwrap();
        assert_eq!(storage.get_item(TENANT_ID_KEY).unwrap(), None);
        assert_eq!(storage.get_item(TENANT_KEY).unwrap(), None);
        assert_eq!(platform.client.access_token().await, None);
    }

    #[tokio::test]
    async fn test_sign_out_after_restart_revokes_stored_session() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/v1/logout"))
            .and(header("authorization", "Bearer stored-token"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        // Left behind by an earlier run of the dashboard
        let storage = Arc::new(MemoryStorage::default());
        SessionCache::new(storage.clone()).store(&AuthSession {
            access_token: "stored-token".to_string(),
            refresh_token: "refresh".to_string(),
            token_type: "bearer".to_string(),
            expires_at: Utc::now() + Duration::hours(1),
            user: AuthUser {
                id: UserId::from_uuid(uuid::Uuid::parse_str(USER_ID).unwrap()),
                email: Some("lan@minhlong.vn".to_string()),
                user_metadata: json!({}),
                created_at: None,
            },
        });
        let platform = platform_for(&server, storage.clone());
        assert_eq!(platform.client.access_token().await, None);

        platform.auth.sign_out().await.unwrap();

        assert_eq!(server.received_requests().await.map(|r| r.len()), Some(1));
        assert_eq!(storage.get_item(SESSION_KEY).unwrap(), None);
        assert_eq!(platform.client.access_token().await, None);
    }
}
