use chrono::{DateTime, Utc};
use crate::domain::value_objects::UserId;

/// Auth state transitions broadcast to subscribers.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthEvent {
    SignedIn { user_id: UserId, email: Option<String> },
    SignedOut,
    TokenRefreshed { user_id: UserId },
    PasswordRecoveryRequested { email: String },
}

impl AuthEvent {
    /// Name the platform's own auth listener uses for the same transition.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SignedIn { .. } => "SIGNED_IN",
            Self::SignedOut => "SIGNED_OUT",
            Self::TokenRefreshed { .. } => "TOKEN_REFRESHED",
            Self::PasswordRecoveryRequested { .. } => "PASSWORD_RECOVERY",
        }
    }

    pub fn user_id(&self) -> Option<UserId> {
        match self {
            Self::SignedIn { user_id, .. } | Self::TokenRefreshed { user_id } => Some(*user_id),
            Self::SignedOut | Self::PasswordRecoveryRequested { .. } => None,
        }
    }
}

/// An `AuthEvent` as delivered to subscribers, stamped when it was raised.
#[derive(Debug, Clone)]
pub struct AuthNotice {
    pub id: uuid::Uuid,
    pub occurred_at: DateTime<Utc>,
    pub event: AuthEvent,
}

impl AuthNotice {
    pub fn new(event: AuthEvent) -> Self {
        Self::at(event, Utc::now())
    }

    pub fn at(event: AuthEvent, occurred_at: DateTime<Utc>) -> Self {
        Self {
            id: uuid::Uuid::new_v4(),
            occurred_at,
            event,
        }
    }

    pub fn kind(&self) -> &'static str {
        self.event.kind()
    }
}
