// Driven adapter - the hosted platform's REST and auth APIs

pub mod client;
pub mod query;
pub mod auth_api;

pub use auth_api::SupabaseAuth;
pub use client::SupabaseClient;
pub use query::QueryBuilder;

use std::sync::Arc;
use once_cell::sync::OnceCell;
use tracing::{error, info};

use crate::config::BackendConfig;
use crate::error::ConfigError;

static SHARED_CLIENT: OnceCell<Arc<SupabaseClient>> = OnceCell::new();

/// The process-wide client, built on first use. A failed build is not
/// memoized, so a later call with fixed settings can still succeed.
pub fn shared_client(config: &BackendConfig) -> Result<Arc<SupabaseClient>, ConfigError> {
    SHARED_CLIENT
        .get_or_try_init(|| {
            let client = SupabaseClient::new(config).map_err(|e| {
                error!(error = %e, "Supabase client unavailable");
                e
            })?;
            info!(url = %config.url, "Supabase client initialized");
            Ok(Arc::new(client))
        })
        .map(Arc::clone)
}
