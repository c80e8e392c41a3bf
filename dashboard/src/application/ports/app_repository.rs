use async_trait::async_trait;
use crate::domain::{App, AppId, AppPatch, NewApp};
use crate::error::BackendError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AppRepository: Send + Sync {
    /// Ordered by `sort_order` ascending.
    async fn list(&self, active_only: bool) -> Result<Vec<App>, BackendError>;
    async fn insert(&self, app: &NewApp) -> Result<App, BackendError>;
    async fn update(&self, id: &AppId, patch: &AppPatch) -> Result<App, BackendError>;
    async fn delete(&self, id: &AppId) -> Result<(), BackendError>;
    async fn count(&self, active_only: bool) -> Result<u64, BackendError>;
}
