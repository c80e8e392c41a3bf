use super::{profile::Profile, tenant::Tenant};
use crate::domain::value_objects::{TenantId, UserId, UserRole};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A `tenant_users` row: the role a user holds inside one tenant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Membership {
    pub id: uuid::Uuid,
    pub tenant_id: TenantId,
    pub user_id: UserId,
    #[serde(default)]
    pub role: UserRole,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, rename = "tenants", skip_serializing_if = "Option::is_none")]
    pub tenant: Option<Tenant>,
    #[serde(default, rename = "profiles", skip_serializing_if = "Option::is_none")]
    pub profile: Option<Profile>,
}
