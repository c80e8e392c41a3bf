// Local storage entries owned by the auth surface

use std::sync::Arc;
use tracing::{error, warn};
use crate::application::ports::LocalStorage;
use crate::domain::{AuthSession, TenantContext};

pub const TENANT_ID_KEY: &str = "vsh_tenant_id";
pub const TENANT_KEY: &str = "vsh_tenant";
pub const SESSION_KEY: &str = "vsh_auth_session";

/// The caller's tenant snapshot: its id under one key, the JSON snapshot
/// under another.
#[derive(Clone)]
pub struct TenantCache {
    storage: Arc<dyn LocalStorage>,
}

impl TenantCache {
    pub fn new(storage: Arc<dyn LocalStorage>) -> Self {
        Self { storage }
    }

    pub fn store(&self, tenant: &TenantContext) {
        let snapshot = match serde_json::to_string(tenant) {
            Ok(json) => json,
            Err(e) => {
                error!(error = %e, "failed to serialize tenant snapshot");
                self.clear();
                return;
            }
        };
        let written = self
            .storage
            .set_item(TENANT_ID_KEY, &tenant.id.to_string())
            .and_then(|_| self.storage.set_item(TENANT_KEY, &snapshot));
        if let Err(e) = written {
            error!(error = %e, tenant_id = %tenant.id, "failed to cache tenant");
            // An id without its snapshot would point at the wrong tenant
            self.clear();
        }
    }

    pub fn load(&self) -> Option<TenantContext> {
        let raw = match self.storage.get_item(TENANT_KEY) {
            Ok(raw) => raw?,
            Err(e) => {
                warn!(error = %e, "failed to read cached tenant");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(tenant) => Some(tenant),
            Err(e) => {
                warn!(error = %e, "discarding unreadable tenant snapshot");
                self.clear();
                None
            }
        }
    }

    /// Removes both keys, attempting each even if the other fails.
    pub fn clear(&self) {
        for key in [TENANT_ID_KEY, TENANT_KEY] {
            if let Err(e) = self.storage.remove_item(key) {
                error!(error = %e, key, "failed to clear cached tenant");
            }
        }
    }
}

#[derive(Clone)]
pub struct SessionCache {
    storage: Arc<dyn LocalStorage>,
}

impl SessionCache {
    pub fn new(storage: Arc<dyn LocalStorage>) -> Self {
        Self { storage }
    }

    pub fn store(&self, session: &AuthSession) {
        let written = serde_json::to_string(session)
            .map_err(crate::error::StorageError::from)
            .and_then(|json| self.storage.set_item(SESSION_KEY, &json));
        if let Err(e) = written {
            error!(error = %e, "failed to persist auth session");
        }
    }

    pub fn load(&self) -> Option<AuthSession> {
        let raw = self.storage.get_item(SESSION_KEY).ok().flatten()?;
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                warn!(error = %e, "discarding unreadable auth session");
                self.clear();
                None
            }
        }
    }

    pub fn clear(&self) {
        if let Err(e) = self.storage.remove_item(SESSION_KEY) {
            error!(error = %e, "failed to clear auth session");
        }
    }
}
