// Driven port - platform auth service (output port)

use async_trait::async_trait;
use crate::domain::{AuthSession, AuthUser, SignUpMetadata};
use crate::error::BackendError;

/// What a sign-up returns: the new user, plus a session when the project
/// does not require email confirmation.
#[derive(Debug, Clone, PartialEq)]
pub struct SignUpResponse {
    pub user: AuthUser,
    pub session: Option<AuthSession>,
}

/// The gateway is stateful the way the platform SDK is: a successful
/// sign-in or `set_session` makes later calls (and table queries sharing
/// the same client) run as that user.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthGateway: Send + Sync {
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        metadata: &SignUpMetadata,
    ) -> Result<SignUpResponse, BackendError>;
    async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<AuthSession, BackendError>;
    async fn refresh_session(&self, refresh_token: &str) -> Result<AuthSession, BackendError>;
    async fn sign_out(&self) -> Result<(), BackendError>;
    async fn get_user(&self) -> Result<AuthUser, BackendError>;
    async fn reset_password_for_email(&self, email: &str, redirect_to: &str) -> Result<(), BackendError>;
    async fn set_session(&self, session: Option<AuthSession>);
    fn authorize_url(&self, provider: &str, redirect_to: &str) -> Result<String, BackendError>;
}
