use serde::{Deserialize, Serialize};

/// Role of a user inside a tenant. Stored upper-case by the platform.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum UserRole {
    SuperAdmin,
    CustomerAdmin,
    #[default]
    EndUser,
}

impl UserRole {
    pub fn as_db_str(&self) -> &'static str {
        match self {
            UserRole::SuperAdmin => "SUPER_ADMIN",
            UserRole::CustomerAdmin => "CUSTOMER_ADMIN",
            UserRole::EndUser => "END_USER",
        }
    }
}

impl From<String> for UserRole {
    fn from(value: String) -> Self {
        match value.to_ascii_uppercase().as_str() {
            "SUPER_ADMIN" => UserRole::SuperAdmin,
            "CUSTOMER_ADMIN" => UserRole::CustomerAdmin,
            _ => UserRole::EndUser,
        }
    }
}

impl From<UserRole> for String {
    fn from(role: UserRole) -> Self {
        role.as_db_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_role_falls_back_to_end_user() {
        let role: UserRole = serde_json::from_str("\"OWNER\"").unwrap();
        assert_eq!(role, UserRole::EndUser);
        let role: UserRole = serde_json::from_str("\"customer_admin\"").unwrap();
        assert_eq!(role, UserRole::CustomerAdmin);
        assert_eq!(serde_json::to_string(&UserRole::SuperAdmin).unwrap(), "\"SUPER_ADMIN\"");
    }
}
