pub mod tenant_context;

pub use tenant_context::TenantContext;
