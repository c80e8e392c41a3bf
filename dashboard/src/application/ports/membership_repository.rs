use async_trait::async_trait;
use crate::domain::{Membership, TenantId, UserId};
use crate::error::BackendError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MembershipRepository: Send + Sync {
    /// First active membership of the user, with its tenant embedded.
    async fn find_active_for_user(&self, user_id: &UserId) -> Result<Option<Membership>, BackendError>;
    /// Members of a tenant, newest first, with profiles embedded.
    async fn list_for_tenant(&self, tenant_id: &TenantId) -> Result<Vec<Membership>, BackendError>;
    async fn count_for_tenant(&self, tenant_id: &TenantId) -> Result<u64, BackendError>;
}
