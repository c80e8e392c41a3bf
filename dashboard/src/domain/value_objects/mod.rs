pub mod user_id;
pub mod tenant_id;
pub mod app_id;
pub mod user_role;
pub mod plan;
pub mod tenant_status;

pub use user_id::UserId;
pub use tenant_id::TenantId;
pub use app_id::AppId;
pub use user_role::UserRole;
pub use plan::Plan;
pub use tenant_status::TenantStatus;
