// Table repositories over PostgREST

pub mod tenant_repository;
pub mod profile_repository;
pub mod app_repository;
pub mod tenant_app_repository;
pub mod membership_repository;

pub use tenant_repository::RestTenantRepository;
pub use profile_repository::RestProfileRepository;
pub use app_repository::RestAppRepository;
pub use tenant_app_repository::RestTenantAppRepository;
pub use membership_repository::RestMembershipRepository;
