// Application layer - tenant-scoped reads and writes for the customer dashboard

use std::sync::Arc;
use chrono::Utc;
use tracing::{debug, error};

use crate::application::ports::{
    AppRepository, MembershipRepository, ProfileRepository, TenantAppRepository, TenantRepository,
};
use crate::domain::{
    App, AppId, Membership, NewTenant, NewTenantApp, Profile, ProfilePatch, Tenant, TenantApp,
    TenantId, TenantInput, UserId,
};
use crate::error::BackendError;
use crate::utils::slug::generate_code;

/// Repositories the data facade reads and writes through.
#[derive(Clone)]
pub struct DataRepositories {
    pub tenants: Arc<dyn TenantRepository>,
    pub profiles: Arc<dyn ProfileRepository>,
    pub apps: Arc<dyn AppRepository>,
    pub tenant_apps: Arc<dyn TenantAppRepository>,
    pub memberships: Arc<dyn MembershipRepository>,
}

pub struct DataFacade {
    repos: DataRepositories,
}

/// Logs a failed call and hands the error back unchanged.
fn logged<T>(op: &'static str, result: Result<T, BackendError>) -> Result<T, BackendError> {
    if let Err(e) = &result {
        error!(error = %e, op, "data request failed");
    }
    result
}

impl DataFacade {
    pub fn new(repos: DataRepositories) -> Self {
        Self { repos }
    }

    /// Profile with its tenant embedded.
    pub async fn get_user_profile(&self, user_id: &UserId) -> Result<Profile, BackendError> {
        debug!(user_id = %user_id, "loading user profile");
        let found = logged("get_user_profile", self.repos.profiles.find_by_id(user_id).await)?;
        found.ok_or(BackendError::NotFound("profiles"))
    }

    pub async fn update_user_profile(
        &self,
        user_id: &UserId,
        patch: ProfilePatch,
    ) -> Result<Profile, BackendError> {
        debug!(user_id = %user_id, "updating user profile");
        let patch = patch.stamped(Utc::now());
        logged("update_user_profile", self.repos.profiles.update(user_id, &patch).await)
    }

    pub async fn get_tenant(&self, tenant_id: &TenantId) -> Result<Tenant, BackendError> {
        debug!(tenant_id = %tenant_id, "loading tenant");
        let found = logged("get_tenant", self.repos.tenants.find_by_id(tenant_id).await)?;
        found.ok_or(BackendError::NotFound("tenants"))
    }

    /// Uses the given code when it is not blank, otherwise derives one from
    /// the company name.
    pub async fn create_tenant(&self, mut input: TenantInput) -> Result<Tenant, BackendError> {
        let code = match input.code.take().filter(|c| !c.trim().is_empty()) {
            Some(code) => code,
            None => generate_code(&input.name),
        };
        debug!(code = %code, "creating tenant");
        let tenant = NewTenant::from_input(input, code);
        logged("create_tenant", self.repos.tenants.insert(&tenant).await)
    }

    /// Active catalog apps in display order.
    pub async fn get_all_apps(&self) -> Result<Vec<App>, BackendError> {
        logged("get_all_apps", self.repos.apps.list(true).await)
    }

    pub async fn get_tenant_apps(&self, tenant_id: &TenantId) -> Result<Vec<TenantApp>, BackendError> {
        debug!(tenant_id = %tenant_id, "loading tenant apps");
        logged("get_tenant_apps", self.repos.tenant_apps.list_active(tenant_id).await)
    }

    pub async fn add_app_to_tenant(
        &self,
        tenant_id: &TenantId,
        app_id: &AppId,
    ) -> Result<TenantApp, BackendError> {
        debug!(tenant_id = %tenant_id, app_id = %app_id, "adding app to tenant");
        let link = NewTenantApp {
            tenant_id: *tenant_id,
            app_id: *app_id,
        };
        logged("add_app_to_tenant", self.repos.tenant_apps.insert(&link).await)
    }

    /// Members of the tenant, newest first, each with its profile.
    pub async fn get_tenant_users(&self, tenant_id: &TenantId) -> Result<Vec<Membership>, BackendError> {
        debug!(tenant_id = %tenant_id, "loading tenant users");
        logged("get_tenant_users", self.repos.memberships.list_for_tenant(tenant_id).await)
    }

    pub async fn count_tenant_users(&self, tenant_id: &TenantId) -> Result<u64, BackendError> {
        logged("count_tenant_users", self.repos.memberships.count_for_tenant(tenant_id).await)
    }
}
