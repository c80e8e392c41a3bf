use async_trait::async_trait;
use crate::domain::{Profile, ProfilePatch, UserId};
use crate::error::BackendError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Includes the embedded tenant row when the profile has one.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<Profile>, BackendError>;
    /// Newest first.
    async fn list(&self) -> Result<Vec<Profile>, BackendError>;
    async fn update(&self, id: &UserId, patch: &ProfilePatch) -> Result<Profile, BackendError>;
    async fn count(&self) -> Result<u64, BackendError>;
}
