use super::app::App;
use crate::domain::value_objects::{AppId, TenantId};
use serde::{Deserialize, Serialize};

/// Entitlement linking a tenant to a catalog app.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TenantApp {
    pub id: uuid::Uuid,
    pub tenant_id: TenantId,
    pub app_id: AppId,
    #[serde(default = "active")]
    pub is_active: bool,
    #[serde(default, rename = "apps", skip_serializing_if = "Option::is_none")]
    pub app: Option<App>,
}

fn active() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTenantApp {
    pub tenant_id: TenantId,
    pub app_id: AppId,
}
