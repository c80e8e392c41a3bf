use async_trait::async_trait;
use crate::domain::{NewTenantApp, TenantApp, TenantId};
use crate::error::BackendError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TenantAppRepository: Send + Sync {
    /// Active entitlements with their catalog app embedded.
    async fn list_active(&self, tenant_id: &TenantId) -> Result<Vec<TenantApp>, BackendError>;
    async fn insert(&self, link: &NewTenantApp) -> Result<TenantApp, BackendError>;
}
