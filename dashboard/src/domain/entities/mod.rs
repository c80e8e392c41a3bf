// Rows owned by the platform schema. The dashboard only borrows them.

pub mod tenant;
pub mod profile;
pub mod app;
pub mod tenant_app;
pub mod membership;
pub mod auth_user;
pub mod auth_session;

pub use tenant::{NewTenant, Tenant, TenantInput, TenantPatch};
pub use profile::{Profile, ProfilePatch};
pub use app::{App, AppInput, AppPatch, NewApp};
pub use tenant_app::{NewTenantApp, TenantApp};
pub use membership::Membership;
pub use auth_user::AuthUser;
pub use auth_session::{AuthSession, SignUpMetadata};

/// Blank strings are stored as `null`.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
