use std::sync::Arc;
use async_trait::async_trait;
use crate::application::ports::MembershipRepository;
use crate::domain::{Membership, TenantId, UserId};
use crate::error::BackendError;
use crate::infrastructure::driven::supabase::SupabaseClient;

const TABLE: &str = "tenant_users";

pub struct RestMembershipRepository {
    client: Arc<SupabaseClient>,
}

impl RestMembershipRepository {
    pub fn new(client: Arc<SupabaseClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl MembershipRepository for RestMembershipRepository {
    async fn find_active_for_user(&self, user_id: &UserId) -> Result<Option<Membership>, BackendError> {
        self.client
            .table(TABLE)
            .select("*, tenants(*)")
            .eq("user_id", user_id)
            .eq("is_active", true)
            .fetch_optional()
            .await
    }

    async fn list_for_tenant(&self, tenant_id: &TenantId) -> Result<Vec<Membership>, BackendError> {
        self.client
            .table(TABLE)
            .select("*, profiles(*)")
            .eq("tenant_id", tenant_id)
            .order("created_at", false)
            .fetch()
            .await
    }

    async fn count_for_tenant(&self, tenant_id: &TenantId) -> Result<u64, BackendError> {
        self.client
            .table(TABLE)
            .select("*")
            .eq("tenant_id", tenant_id)
            .eq("is_active", true)
            .count()
            .await
    }
}
