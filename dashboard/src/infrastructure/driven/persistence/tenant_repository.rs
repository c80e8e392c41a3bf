use std::sync::Arc;
use async_trait::async_trait;
use crate::application::ports::TenantRepository;
use crate::domain::{NewTenant, Tenant, TenantId, TenantPatch};
use crate::error::BackendError;
use crate::infrastructure::driven::supabase::SupabaseClient;

const TABLE: &str = "tenants";

pub struct RestTenantRepository {
    client: Arc<SupabaseClient>,
}

impl RestTenantRepository {
    pub fn new(client: Arc<SupabaseClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TenantRepository for RestTenantRepository {
    async fn list(&self) -> Result<Vec<Tenant>, BackendError> {
        self.client
            .table(TABLE)
            .select("*")
            .order("created_at", false)
            .fetch()
            .await
    }

    async fn find_by_id(&self, id: &TenantId) -> Result<Option<Tenant>, BackendError> {
        self.client.table(TABLE).select("*").eq("id", id).fetch_optional().await
    }

    async fn insert(&self, tenant: &NewTenant) -> Result<Tenant, BackendError> {
        self.client.table(TABLE).select("*").insert(tenant).await
    }

    async fn update(&self, id: &TenantId, patch: &TenantPatch) -> Result<Tenant, BackendError> {
        self.client.table(TABLE).select("*").eq("id", id).update(patch).await
    }

    async fn delete(&self, id: &TenantId) -> Result<(), BackendError> {
        self.client.table(TABLE).eq("id", id).delete().await
    }

    async fn count(&self) -> Result<u64, BackendError> {
        self.client.table(TABLE).select("*").count().await
    }
}
