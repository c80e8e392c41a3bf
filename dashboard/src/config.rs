//! Layered configuration: built-in defaults, an optional `vsh.toml`, then
//! `VSH__SECTION__KEY` environment variables. `SUPABASE_URL` and
//! `SUPABASE_ANON_KEY` are honoured as shortcuts for the backend section.

use crate::domain::value_objects::Plan;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub app_name: String,
    pub app_version: String,
    /// Origin the dashboard is served from; redirect links are built on it.
    pub site_url: String,
    pub backend: BackendConfig,
    pub plans: BTreeMap<String, PlanTier>,
    pub routes: Routes,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BackendConfig {
    pub url: String,
    pub anon_key: String,
    pub request_timeout_secs: u64,
}

/// Subscription tier limits. `-1` means unlimited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanTier {
    pub name: String,
    pub max_users: i64,
    pub max_apps: i64,
}

impl PlanTier {
    fn new(name: &str, max_users: i64, max_apps: i64) -> Self {
        Self {
            name: name.to_string(),
            max_users,
            max_apps,
        }
    }

    pub fn user_limit(&self) -> Option<u64> {
        u64::try_from(self.max_users).ok()
    }

    pub fn app_limit(&self) -> Option<u64> {
        u64::try_from(self.max_apps).ok()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Routes {
    pub login: String,
    pub dashboard: String,
    pub admin: String,
    pub reset_password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        let mut plans = BTreeMap::new();
        plans.insert("trial".to_string(), PlanTier::new("Dùng thử", 5, 3));
        plans.insert("starter".to_string(), PlanTier::new("Khởi nghiệp", 10, 5));
        plans.insert("professional".to_string(), PlanTier::new("Chuyên nghiệp", 50, 20));
        plans.insert("enterprise".to_string(), PlanTier::new("Doanh nghiệp", -1, -1));

        Self {
            app_name: "UngDung360".to_string(),
            app_version: "1.0.0".to_string(),
            site_url: "http://localhost:3000".to_string(),
            backend: BackendConfig {
                url: String::new(),
                anon_key: String::new(),
                request_timeout_secs: 30,
            },
            plans,
            routes: Routes {
                login: "/login.html".to_string(),
                dashboard: "/dashboard/".to_string(),
                admin: "/admin/".to_string(),
                reset_password: "/reset-password.html".to_string(),
            },
            storage: StorageConfig {
                path: PathBuf::from(".vsh/local_storage.json"),
            },
        }
    }
}

impl AppConfig {
    /// Loads `.env`, then `vsh.toml` from the working directory if present.
    pub fn load() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load_from(Path::new("vsh"))
    }

    pub fn load_from(file: &Path) -> Result<Self, ConfigError> {
        let defaults = config::Config::try_from(&AppConfig::default())?;

        let settings = config::Config::builder()
            .add_source(defaults)
            .add_source(config::File::from(file).required(false))
            .add_source(config::Environment::with_prefix("VSH").separator("__"))
            .set_override_option("backend.url", std::env::var("SUPABASE_URL").ok())?
            .set_override_option("backend.anon_key", std::env::var("SUPABASE_ANON_KEY").ok())?
            .build()?;

        let config: AppConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.backend.url.trim().is_empty() {
            return Err(ConfigError::Missing("backend.url"));
        }
        if self.backend.anon_key.trim().is_empty() {
            return Err(ConfigError::Missing("backend.anon_key"));
        }
        url::Url::parse(&self.backend.url).map_err(|e| ConfigError::InvalidUrl {
            url: self.backend.url.clone(),
            reason: e.to_string(),
        })?;
        Ok(())
    }

    /// Absolute link to one of the dashboard routes.
    pub fn redirect_url(&self, route: &str) -> String {
        format!("{}{}", self.site_url.trim_end_matches('/'), route)
    }

    pub fn plan_tier(&self, plan: &Plan) -> Option<&PlanTier> {
        self.plans.get(plan.as_db_str())
    }

    pub fn plan_display_name(&self, plan: &Plan) -> String {
        self.plan_tier(plan)
            .map(|tier| tier.name.clone())
            .unwrap_or_else(|| plan.as_db_str().to_string())
    }
}
