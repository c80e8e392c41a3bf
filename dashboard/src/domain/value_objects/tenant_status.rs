use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TenantStatus {
    #[default]
    Active,
    Inactive,
    Suspended,
    Other(String),
}

impl TenantStatus {
    pub fn as_db_str(&self) -> &str {
        match self {
            TenantStatus::Active => "active",
            TenantStatus::Inactive => "inactive",
            TenantStatus::Suspended => "suspended",
            TenantStatus::Other(value) => value,
        }
    }
}

impl From<String> for TenantStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "active" => TenantStatus::Active,
            "inactive" => TenantStatus::Inactive,
            "suspended" => TenantStatus::Suspended,
            _ => TenantStatus::Other(value),
        }
    }
}

impl From<TenantStatus> for String {
    fn from(status: TenantStatus) -> Self {
        match status {
            TenantStatus::Other(value) => value,
            known => known.as_db_str().to_string(),
        }
    }
}
