use std::sync::Arc;
use async_trait::async_trait;
use crate::application::ports::TenantAppRepository;
use crate::domain::{NewTenantApp, TenantApp, TenantId};
use crate::error::BackendError;
use crate::infrastructure::driven::supabase::SupabaseClient;

const TABLE: &str = "tenant_apps";

pub struct RestTenantAppRepository {
    client: Arc<SupabaseClient>,
}

impl RestTenantAppRepository {
    pub fn new(client: Arc<SupabaseClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TenantAppRepository for RestTenantAppRepository {
    async fn list_active(&self, tenant_id: &TenantId) -> Result<Vec<TenantApp>, BackendError> {
        self.client
            .table(TABLE)
            .select("*, apps(*)")
            .eq("tenant_id", tenant_id)
            .eq("is_active", true)
            .fetch()
            .await
    }

    async fn insert(&self, link: &NewTenantApp) -> Result<TenantApp, BackendError> {
        self.client.table(TABLE).select("*").insert(link).await
    }
}
