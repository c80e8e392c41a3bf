// Application ports - Driven ports (output ports implemented by infrastructure)

pub mod auth_gateway;
pub mod tenant_repository;
pub mod profile_repository;
pub mod app_repository;
pub mod tenant_app_repository;
pub mod membership_repository;
pub mod local_storage;

pub use auth_gateway::{AuthGateway, SignUpResponse};
pub use tenant_repository::TenantRepository;
pub use profile_repository::ProfileRepository;
pub use app_repository::AppRepository;
pub use tenant_app_repository::TenantAppRepository;
pub use membership_repository::MembershipRepository;
pub use local_storage::LocalStorage;

#[cfg(test)]
pub use auth_gateway::MockAuthGateway;
#[cfg(test)]
pub use tenant_repository::MockTenantRepository;
#[cfg(test)]
pub use profile_repository::MockProfileRepository;
#[cfg(test)]
pub use app_repository::MockAppRepository;
#[cfg(test)]
pub use tenant_app_repository::MockTenantAppRepository;
#[cfg(test)]
pub use membership_repository::MockMembershipRepository;
