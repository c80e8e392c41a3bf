use crate::domain::entities::{Membership, Tenant};
use crate::domain::value_objects::{Plan, TenantId, TenantStatus, UserRole};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::TrialStatus;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Snapshot of the signed-in user's tenant, as cached in local storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TenantContext {
    pub id: TenantId,
    pub name: String,
    pub code: String,
    pub plan: Plan,
    pub trial_ends_at: Option<DateTime<Utc>>,
    pub status: TenantStatus,
    pub role: UserRole,
}

impl TenantContext {
    pub fn from_membership(membership: &Membership, tenant: &Tenant) -> Self {
        Self {
            id: tenant.id,
            name: tenant.name.clone(),
            code: tenant.code.clone(),
            plan: tenant.plan.clone(),
            trial_ends_at: tenant.trial_ends_at,
            status: tenant.status.clone(),
            role: membership.role,
        }
    }

    /// Trial plans are valid until `trial_ends_at`; a trial without an end
    /// date counts as expired. Every other plan never expires.
    pub fn trial_status_at(&self, now: DateTime<Utc>) -> TrialStatus {
        if !self.plan.is_trial() {
            return TrialStatus::unlimited();
        }

        match self.trial_ends_at {
            Some(ends_at) if ends_at > now => {
                let remaining = (ends_at - now).num_milliseconds();
                TrialStatus {
                    valid: true,
                    days_left: (remaining + MILLIS_PER_DAY - 1) / MILLIS_PER_DAY,
                }
            }
            _ => TrialStatus::expired(),
        }
    }

    pub fn trial_status(&self) -> TrialStatus {
        self.trial_status_at(Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn context(plan: Plan, trial_ends_at: Option<DateTime<Utc>>) -> TenantContext {
        TenantContext {
            id: TenantId::from_uuid(uuid::Uuid::new_v4()),
            name: "Công ty Minh Long".to_string(),
            code: "cong-ty-minh-long".to_string(),
            plan,
            trial_ends_at,
            status: TenantStatus::Active,
            role: UserRole::CustomerAdmin,
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 16, 9, 0, 0).unwrap()
    }

    #[test]
    fn test_trial_expired_at_exact_end() {
        let status = context(Plan::Trial, Some(now())).trial_status_at(now());
        assert_eq!(status, TrialStatus { valid: false, days_left: 0 });
    }

    #[test]
    fn test_trial_expired_in_past() {
        let status = context(Plan::Trial, Some(now() - Duration::days(3))).trial_status_at(now());
        assert_eq!(status, TrialStatus::expired());
    }

    #[test]
    fn test_trial_without_end_date_is_expired() {
        assert_eq!(context(Plan::Trial, None).trial_status_at(now()), TrialStatus::expired());
    }

    #[test]
    fn test_trial_days_left_rounds_up() {
        let ctx = context(Plan::Trial, Some(now() + Duration::days(6) + Duration::hours(1)));
        assert_eq!(ctx.trial_status_at(now()), TrialStatus { valid: true, days_left: 7 });

        let ctx = context(Plan::Trial, Some(now() + Duration::milliseconds(1)));
        assert_eq!(ctx.trial_status_at(now()), TrialStatus { valid: true, days_left: 1 });

        let ctx = context(Plan::Trial, Some(now() + Duration::days(14)));
        assert_eq!(ctx.trial_status_at(now()).days_left, 14);
    }

    #[test]
    fn test_paid_plans_never_expire() {
        for plan in [
            Plan::Starter,
            Plan::Professional,
            Plan::Enterprise,
            Plan::Other("custom".to_string()),
        ] {
            let status = context(plan, Some(now() - Duration::days(30))).trial_status_at(now());
            assert_eq!(status, TrialStatus { valid: true, days_left: -1 });
        }
    }

    #[test]
    fn test_snapshot_json_shape() {
        let ctx = context(Plan::Trial, Some(now()));
        let value = serde_json::to_value(&ctx).unwrap();
        assert_eq!(value["plan"], "trial");
        assert_eq!(value["status"], "active");
        assert_eq!(value["role"], "CUSTOMER_ADMIN");
        let back: TenantContext = serde_json::from_value(value).unwrap();
        assert_eq!(back, ctx);
    }
}
