// Application layer - authentication surface used by the login, register and dashboard pages

pub mod cache;
pub mod error_translation;
pub mod guards;

pub use cache::{SessionCache, TenantCache, SESSION_KEY, TENANT_ID_KEY, TENANT_KEY};
pub use error_translation::{translate_error, AuthError};
pub use guards::Navigation;

use std::sync::Arc;
use chrono::{DateTime, Utc};
use shared::TrialStatus;
use tokio::sync::broadcast;
use tracing::{debug, error, info, warn};

use crate::application::ports::{AuthGateway, LocalStorage, MembershipRepository, SignUpResponse};
use crate::config::AppConfig;
use crate::domain::{
    AuthEvent, AuthNotice, AuthSession, AuthUser, SignUpMetadata, TenantContext, UserId,
};

const EVENT_CHANNEL_CAPACITY: usize = 16;
const GOOGLE_PROVIDER: &str = "google";

/// Result of a password sign-in. `tenant` is `None` when the user has no
/// active membership or the lookup failed.
#[derive(Debug, Clone, PartialEq)]
pub struct SignInResult {
    pub session: AuthSession,
    pub tenant: Option<TenantContext>,
}

pub struct AuthFacade {
    gateway: Arc<dyn AuthGateway>,
    memberships: Arc<dyn MembershipRepository>,
    tenant_cache: TenantCache,
    session_cache: SessionCache,
    pub(crate) config: Arc<AppConfig>,
    events: broadcast::Sender<AuthNotice>,
}

impl AuthFacade {
    pub fn new(
        gateway: Arc<dyn AuthGateway>,
        memberships: Arc<dyn MembershipRepository>,
        storage: Arc<dyn LocalStorage>,
        config: Arc<AppConfig>,
    ) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            gateway,
            memberships,
            tenant_cache: TenantCache::new(storage.clone()),
            session_cache: SessionCache::new(storage),
            config,
            events,
        }
    }

    /// Auth state changes: sign-in, sign-out, token refresh, recovery mail.
    pub fn subscribe(&self) -> broadcast::Receiver<AuthNotice> {
        self.events.subscribe()
    }

    fn emit(&self, event: AuthEvent) {
        debug!(kind = event.kind(), "auth state changed");
        // No receivers is fine
        let _ = self.events.send(AuthNotice::new(event));
    }

    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        metadata: SignUpMetadata,
    ) -> Result<SignUpResponse, AuthError> {
        debug!(email, "signing up");
        let response = self
            .gateway
            .sign_up(email, password, &metadata)
            .await
            .map_err(|e| {
                error!(error = %e, email, "sign-up failed");
                AuthError::from_backend(&e)
            })?;

        // Projects without email confirmation sign the user in right away
        if let Some(session) = &response.session {
            self.session_cache.store(session);
            self.emit(AuthEvent::SignedIn {
                user_id: session.user.id,
                email: session.user.email.clone(),
            });
        }

        info!(user_id = %response.user.id, "user signed up");
        Ok(response)
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<SignInResult, AuthError> {
        debug!(email, "signing in");
        let session = self
            .gateway
            .sign_in_with_password(email, password)
            .await
            .map_err(|e| {
                error!(error = %e, email, "sign-in failed");
                AuthError::from_backend(&e)
            })?;
        self.session_cache.store(&session);

        // Resolve and cache the tenant; a failed lookup only drops the cache
        let tenant = self.resolve_tenant(&session.user.id).await;
        match &tenant {
            Some(ctx) => self.tenant_cache.store(ctx),
            None => self.tenant_cache.clear(),
        }

        info!(user_id = %session.user.id, tenant_id = ?tenant.as_ref().map(|t| t.id), "user signed in");
        self.emit(AuthEvent::SignedIn {
            user_id: session.user.id,
            email: session.user.email.clone(),
        });

        Ok(SignInResult { session, tenant })
    }

    async fn resolve_tenant(&self, user_id: &UserId) -> Option<TenantContext> {
        match self.memberships.find_active_for_user(user_id).await {
            Ok(Some(membership)) => match &membership.tenant {
                Some(tenant) => Some(TenantContext::from_membership(&membership, tenant)),
                None => {
                    warn!(user_id = %user_id, "membership returned without its tenant");
                    None
                }
            },
            Ok(None) => {
                debug!(user_id = %user_id, "no active tenant membership");
                None
            }
            Err(e) => {
                error!(error = %e, user_id = %user_id, "tenant lookup failed");
                None
            }
        }
    }

    /// Returns the provider URL the browser should be sent to. The platform
    /// redirects back to the dashboard after consent.
    pub fn sign_in_with_google(&self) -> Result<String, AuthError> {
        let redirect_to = self.config.redirect_url(&self.config.routes.dashboard);
        self.gateway
            .authorize_url(GOOGLE_PROVIDER, &redirect_to)
            .map_err(|e| {
                error!(error = %e, "failed to build Google sign-in URL");
                AuthError::from_backend(&e)
            })
    }

    /// Local state is cleared even when the remote call fails. Errors are
    /// reported with the platform's own message.
    pub async fn sign_out(&self) -> Result<(), AuthError> {
        debug!("signing out");
        // The gateway only knows sessions set in this process; revoke the stored one
        if let Some(stored) = self.session_cache.load() {
            self.gateway.set_session(Some(stored)).await;
        }
        let result = self.gateway.sign_out().await;

        self.tenant_cache.clear();
        self.session_cache.clear();
        self.gateway.set_session(None).await;
        self.emit(AuthEvent::SignedOut);

        match result {
            Ok(()) => {
                info!("user signed out");
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "remote sign-out failed");
                Err(AuthError::from_backend_raw(&e))
            }
        }
    }

    /// The stored session, refreshed first if it has expired. `None` when
    /// there is no usable session.
    pub async fn session(&self) -> Option<AuthSession> {
        self.session_at(Utc::now()).await
    }

    pub async fn session_at(&self, now: DateTime<Utc>) -> Option<AuthSession> {
        let stored = self.session_cache.load()?;
        if !stored.is_expired_at(now) {
            self.gateway.set_session(Some(stored.clone())).await;
            return Some(stored);
        }

        debug!(user_id = %stored.user.id, "refreshing expired session");
        match self.gateway.refresh_session(&stored.refresh_token).await {
            Ok(session) => {
                self.session_cache.store(&session);
                self.emit(AuthEvent::TokenRefreshed { user_id: session.user.id });
                Some(session)
            }
            Err(e) => {
                warn!(error = %e, "session refresh failed, discarding stored session");
                self.session_cache.clear();
                self.gateway.set_session(None).await;
                None
            }
        }
    }

    pub async fn current_user(&self) -> Option<AuthUser> {
        self.session().await?;
        match self.gateway.get_user().await {
            Ok(user) => Some(user),
            Err(e) => {
                error!(error = %e, "failed to fetch current user");
                None
            }
        }
    }

    pub async fn is_logged_in(&self) -> bool {
        self.session().await.is_some()
    }

    pub async fn reset_password(&self, email: &str) -> Result<(), AuthError> {
        let redirect_to = self.config.redirect_url(&self.config.routes.reset_password);
        debug!(email, redirect_to = %redirect_to, "requesting password reset");
        self.gateway
            .reset_password_for_email(email, &redirect_to)
            .await
            .map_err(|e| {
                error!(error = %e, email, "password reset failed");
                AuthError::from_backend(&e)
            })?;

        self.emit(AuthEvent::PasswordRecoveryRequested {
            email: email.to_string(),
        });
        Ok(())
    }

    pub fn cached_tenant(&self) -> Option<TenantContext> {
        self.tenant_cache.load()
    }

    /// `None` when no tenant is cached.
    pub fn trial_status(&self) -> Option<TrialStatus> {
        self.trial_status_at(Utc::now())
    }

    pub fn trial_status_at(&self, now: DateTime<Utc>) -> Option<TrialStatus> {
        self.cached_tenant().map(|tenant| tenant.trial_status_at(now))
    }
}
