use async_trait::async_trait;
use crate::domain::{NewTenant, Tenant, TenantId, TenantPatch};
use crate::error::BackendError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TenantRepository: Send + Sync {
    /// Newest first.
    async fn list(&self) -> Result<Vec<Tenant>, BackendError>;
    async fn find_by_id(&self, id: &TenantId) -> Result<Option<Tenant>, BackendError>;
    async fn insert(&self, tenant: &NewTenant) -> Result<Tenant, BackendError>;
    async fn update(&self, id: &TenantId, patch: &TenantPatch) -> Result<Tenant, BackendError>;
    async fn delete(&self, id: &TenantId) -> Result<(), BackendError>;
    async fn count(&self) -> Result<u64, BackendError>;
}
