// Application layer - platform-wide management for super admins

use std::sync::Arc;
use chrono::Utc;
use shared::DashboardStats;
use thiserror::Error;
use tracing::{debug, error, warn};

use crate::application::auth::AuthFacade;
use crate::application::ports::{AppRepository, ProfileRepository, TenantRepository};
use crate::domain::{
    App, AppId, AppInput, AppPatch, NewApp, NewTenant, Profile, ProfilePatch, Tenant, TenantId,
    TenantInput, TenantPatch, UserId,
};
use crate::error::BackendError;
use crate::utils::slug::generate_code;

#[derive(Debug, Error)]
pub enum AdminError {
    /// Signed in, but not a super admin. Callers send the user back to the
    /// customer dashboard.
    #[error("Bạn không có quyền truy cập trang này!")]
    Forbidden,
    #[error("Not signed in")]
    NotSignedIn,
    #[error(transparent)]
    Backend(#[from] BackendError),
}

pub struct AdminFacade {
    auth: Arc<AuthFacade>,
    tenants: Arc<dyn TenantRepository>,
    profiles: Arc<dyn ProfileRepository>,
    apps: Arc<dyn AppRepository>,
}

fn logged<T>(op: &'static str, result: Result<T, BackendError>) -> Result<T, BackendError> {
    if let Err(e) = &result {
        error!(error = %e, op, "admin request failed");
    }
    result
}

impl AdminFacade {
    pub fn new(
        auth: Arc<AuthFacade>,
        tenants: Arc<dyn TenantRepository>,
        profiles: Arc<dyn ProfileRepository>,
        apps: Arc<dyn AppRepository>,
    ) -> Self {
        Self {
            auth,
            tenants,
            profiles,
            apps,
        }
    }

    async fn check_super_admin(&self) -> Result<bool, AdminError> {
        let user = self.auth.current_user().await.ok_or(AdminError::NotSignedIn)?;
        let profile = self.profiles.find_by_id(&user.id).await?;
        Ok(profile.is_some_and(|p| p.is_super_admin))
    }

    /// Any failure along the way counts as "no".
    pub async fn is_super_admin(&self) -> bool {
        match self.check_super_admin().await {
            Ok(is_admin) => is_admin,
            Err(e) => {
                warn!(error = %e, "super admin check failed");
                false
            }
        }
    }

    pub async fn require_super_admin(&self) -> Result<(), AdminError> {
        match self.check_super_admin().await {
            Ok(true) => Ok(()),
            Err(AdminError::NotSignedIn) => Err(AdminError::NotSignedIn),
            Ok(false) | Err(_) => Err(AdminError::Forbidden),
        }
    }

    // Tenants

    pub async fn get_all_tenants(&self) -> Result<Vec<Tenant>, BackendError> {
        logged("get_all_tenants", self.tenants.list().await)
    }

    /// The tenant code is always derived from the name here.
    pub async fn create_tenant(&self, input: TenantInput) -> Result<Tenant, BackendError> {
        let code = generate_code(&input.name);
        debug!(code = %code, "creating tenant");
        let tenant = NewTenant::from_input(input, code);
        logged("create_tenant", self.tenants.insert(&tenant).await)
    }

    pub async fn update_tenant(&self, id: &TenantId, patch: TenantPatch) -> Result<Tenant, BackendError> {
        debug!(tenant_id = %id, "updating tenant");
        let patch = patch.stamped(Utc::now());
        logged("update_tenant", self.tenants.update(id, &patch).await)
    }

    pub async fn delete_tenant(&self, id: &TenantId) -> Result<(), BackendError> {
        debug!(tenant_id = %id, "deleting tenant");
        logged("delete_tenant", self.tenants.delete(id).await)
    }

    // Users

    pub async fn get_all_users(&self) -> Result<Vec<Profile>, BackendError> {
        logged("get_all_users", self.profiles.list().await)
    }

    /// An unset `is_super_admin` is written as `false`.
    pub async fn update_user_profile(
        &self,
        user_id: &UserId,
        mut patch: ProfilePatch,
    ) -> Result<Profile, BackendError> {
        debug!(user_id = %user_id, "updating profile");
        patch.is_super_admin = Some(patch.is_super_admin.unwrap_or(false));
        let patch = patch.stamped(Utc::now());
        logged("update_user_profile", self.profiles.update(user_id, &patch).await)
    }

    // Apps

    /// The whole catalog, inactive apps included.
    pub async fn get_all_apps(&self) -> Result<Vec<App>, BackendError> {
        logged("get_all_apps", self.apps.list(false).await)
    }

    pub async fn create_app(&self, input: AppInput) -> Result<App, BackendError> {
        let app = NewApp::from(input);
        debug!(code = %app.code, "creating app");
        logged("create_app", self.apps.insert(&app).await)
    }

    pub async fn update_app(&self, id: &AppId, patch: AppPatch) -> Result<App, BackendError> {
        debug!(app_id = %id, "updating app");
        logged("update_app", self.apps.update(id, &patch).await)
    }

    pub async fn delete_app(&self, id: &AppId) -> Result<(), BackendError> {
        debug!(app_id = %id, "deleting app");
        logged("delete_app", self.apps.delete(id).await)
    }

    // Stats

    /// Counts are independent: a failed one reads as 0.
    pub async fn get_stats(&self) -> DashboardStats {
        let (tenants, users, apps, active_apps) = tokio::join!(
            self.tenants.count(),
            self.profiles.count(),
            self.apps.count(false),
            self.apps.count(true),
        );

        DashboardStats {
            total_tenants: count_or_zero("tenants", tenants),
            total_users: count_or_zero("profiles", users),
            total_apps: count_or_zero("apps", apps),
            active_apps: count_or_zero("active apps", active_apps),
        }
    }
}

fn count_or_zero(what: &'static str, result: Result<u64, BackendError>) -> u64 {
    result.unwrap_or_else(|e| {
        warn!(error = %e, what, "count failed");
        0
    })
}
