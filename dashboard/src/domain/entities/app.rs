use super::non_blank;
use crate::domain::value_objects::AppId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_APP_ICON: &str = "📱";
pub const DEFAULT_APP_CATEGORY: &str = "other";

/// Entry of the application catalog a tenant can subscribe to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct App {
    pub id: AppId,
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_icon")]
    pub icon: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub app_url: Option<String>,
    #[serde(default)]
    pub is_free: bool,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

fn default_icon() -> String {
    DEFAULT_APP_ICON.to_string()
}

fn default_category() -> String {
    DEFAULT_APP_CATEGORY.to_string()
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppInput {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub category: Option<String>,
    pub app_url: Option<String>,
    pub is_free: Option<bool>,
    pub is_active: Option<bool>,
    pub sort_order: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewApp {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub icon: String,
    pub category: String,
    pub app_url: Option<String>,
    pub is_free: bool,
    pub is_active: bool,
    pub sort_order: i32,
}

impl From<AppInput> for NewApp {
    fn from(input: AppInput) -> Self {
        Self {
            code: input.code,
            name: input.name,
            description: non_blank(input.description),
            icon: non_blank(input.icon).unwrap_or_else(default_icon),
            category: non_blank(input.category).unwrap_or_else(default_category),
            app_url: non_blank(input.app_url),
            is_free: input.is_free.unwrap_or(false),
            // Only an explicit `false` hides a new app.
            is_active: input.is_active != Some(false),
            sort_order: input.sort_order.unwrap_or(0),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_free: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
}
