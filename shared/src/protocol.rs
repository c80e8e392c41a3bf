use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Result envelope handed to the UI layer.
///
/// Serializes as `{"success": true, "data": ...}` or
/// `{"success": false, "error": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outcome<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> Outcome<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }

    pub fn into_result(self) -> Result<Option<T>, String> {
        if self.success {
            Ok(self.data)
        } else {
            Err(self.error.unwrap_or_default())
        }
    }
}

impl<T, E: Display> From<Result<T, E>> for Outcome<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => Outcome::ok(data),
            Err(e) => Outcome::err(e.to_string()),
        }
    }
}

/// Trial validity of the cached tenant.
///
/// `days_left` is `-1` for plans that never expire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrialStatus {
    pub valid: bool,
    pub days_left: i64,
}

impl TrialStatus {
    pub const UNLIMITED_DAYS: i64 = -1;

    pub fn unlimited() -> Self {
        Self {
            valid: true,
            days_left: Self::UNLIMITED_DAYS,
        }
    }

    pub fn expired() -> Self {
        Self {
            valid: false,
            days_left: 0,
        }
    }

    pub fn is_unlimited(&self) -> bool {
        self.days_left == Self::UNLIMITED_DAYS
    }
}

/// Aggregate counts shown on the super-admin overview.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_tenants: u64,
    pub total_users: u64,
    pub total_apps: u64,
    pub active_apps: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_from_error_keeps_message() {
        let outcome: Outcome<u32> = Err::<u32, _>("Email này đã được đăng ký").into();
        assert!(!outcome.success);
        assert_eq!(outcome.error.as_deref(), Some("Email này đã được đăng ký"));
        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            serde_json::json!({ "success": false, "error": "Email này đã được đăng ký" })
        );
    }

    #[test]
    fn test_outcome_success_omits_error() {
        let outcome: Outcome<Vec<u8>> = Ok::<_, String>(vec![1, 2]).into();
        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            serde_json::json!({ "success": true, "data": [1, 2] })
        );
        assert_eq!(outcome.into_result(), Ok(Some(vec![1, 2])));
    }

    #[test]
    fn test_trial_status_wire_names() {
        let value = serde_json::to_value(TrialStatus::unlimited()).unwrap();
        assert_eq!(value, serde_json::json!({ "valid": true, "daysLeft": -1 }));
    }
}
