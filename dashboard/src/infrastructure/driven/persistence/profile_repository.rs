use std::sync::Arc;
use async_trait::async_trait;
use crate::application::ports::ProfileRepository;
use crate::domain::{Profile, ProfilePatch, UserId};
use crate::error::BackendError;
use crate::infrastructure::driven::supabase::SupabaseClient;

const TABLE: &str = "profiles";

pub struct RestProfileRepository {
    client: Arc<SupabaseClient>,
}

impl RestProfileRepository {
    pub fn new(client: Arc<SupabaseClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProfileRepository for RestProfileRepository {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<Profile>, BackendError> {
        self.client
            .table(TABLE)
            .select("*, tenants(*)")
            .eq("id", id)
            .fetch_optional()
            .await
    }

    async fn list(&self) -> Result<Vec<Profile>, BackendError> {
        self.client
            .table(TABLE)
            .select("*")
            .order("created_at", false)
            .fetch()
            .await
    }

    async fn update(&self, id: &UserId, patch: &ProfilePatch) -> Result<Profile, BackendError> {
        self.client.table(TABLE).select("*").eq("id", id).update(patch).await
    }

    async fn count(&self) -> Result<u64, BackendError> {
        self.client.table(TABLE).select("*").count().await
    }
}
