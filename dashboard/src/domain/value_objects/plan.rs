use serde::{Deserialize, Serialize};

/// Subscription tier. Plan strings the dashboard does not know are kept
/// verbatim so they round-trip back to the platform unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Plan {
    Trial,
    #[default]
    Starter,
    Professional,
    Enterprise,
    Other(String),
}

impl Plan {
    pub fn as_db_str(&self) -> &str {
        match self {
            Plan::Trial => "trial",
            Plan::Starter => "starter",
            Plan::Professional => "professional",
            Plan::Enterprise => "enterprise",
            Plan::Other(value) => value,
        }
    }

    pub fn is_trial(&self) -> bool {
        matches!(self, Plan::Trial)
    }
}

impl From<String> for Plan {
    fn from(value: String) -> Self {
        match value.as_str() {
            "trial" => Plan::Trial,
            "starter" => Plan::Starter,
            "professional" => Plan::Professional,
            "enterprise" => Plan::Enterprise,
            _ => Plan::Other(value),
        }
    }
}

impl From<Plan> for String {
    fn from(plan: Plan) -> Self {
        match plan {
            Plan::Other(value) => value,
            known => known.as_db_str().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_plan_round_trips() {
        let plan: Plan = serde_json::from_str("\"gold\"").unwrap();
        assert_eq!(plan, Plan::Other("gold".to_string()));
        assert_eq!(serde_json::to_string(&plan).unwrap(), "\"gold\"");
        assert!(serde_json::from_str::<Plan>("\"trial\"").unwrap().is_trial());
    }
}
