use std::sync::Arc;
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use super::client::{check, SupabaseClient};
use crate::application::ports::{AuthGateway, SignUpResponse};
use crate::domain::{AuthSession, AuthUser, SignUpMetadata};
use crate::error::BackendError;

const DEFAULT_TOKEN_LIFETIME_SECS: i64 = 3600;

/// Token grant as returned by `/auth/v1/token` and an auto-confirmed sign-up.
#[derive(Debug, Deserialize)]
struct TokenGrant {
    access_token: String,
    refresh_token: String,
    #[serde(default)]
    token_type: Option<String>,
    #[serde(default)]
    expires_in: Option<i64>,
    #[serde(default)]
    expires_at: Option<i64>,
    user: AuthUser,
}

#[derive(Debug, Deserialize)]
struct AccessClaims {
    exp: Option<i64>,
}

impl TokenGrant {
    fn into_session(self, now: DateTime<Utc>) -> AuthSession {
        let expires_at = self
            .expires_at
            .and_then(|ts| DateTime::from_timestamp(ts, 0))
            .or_else(|| token_expiry(&self.access_token))
            .unwrap_or_else(|| {
                now + Duration::seconds(self.expires_in.unwrap_or(DEFAULT_TOKEN_LIFETIME_SECS))
            });

        AuthSession {
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            token_type: self.token_type.unwrap_or_else(|| "bearer".to_string()),
            expires_at,
            user: self.user,
        }
    }
}

/// Reads `exp` from the access token. The signature is not checked: the
/// signing secret stays on the platform.
fn token_expiry(token: &str) -> Option<DateTime<Utc>> {
    let mut validation = Validation::default();
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.validate_aud = false;
    validation.required_spec_claims.clear();

    let data = decode::<AccessClaims>(token, &DecodingKey::from_secret(&[]), &validation).ok()?;
    DateTime::from_timestamp(data.claims.exp?, 0)
}

/// GoTrue-backed [`AuthGateway`]. Keeps the client's access token in step
/// with the current session.
pub struct SupabaseAuth {
    client: Arc<SupabaseClient>,
}

impl SupabaseAuth {
    pub fn new(client: Arc<SupabaseClient>) -> Self {
        Self { client }
    }

    async fn post(&self, path: &str, query: &[(&str, &str)], body: Value) -> Result<reqwest::Response, BackendError> {
        let mut url = self.client.auth_endpoint(path)?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query.iter());
        }
        debug!(path, "auth request");
        let request = self.client.authorize(self.client.http().post(url)).await.json(&body);
        check(request.send().await?).await
    }

    async fn grant(&self, grant_type: &str, body: Value) -> Result<AuthSession, BackendError> {
        let response = self.post("token", &[("grant_type", grant_type)], body).await?;
        let grant: TokenGrant = serde_json::from_slice(&response.bytes().await?)?;
        let session = grant.into_session(Utc::now());
        self.client.set_access_token(Some(session.access_token.clone())).await;
        Ok(session)
    }
}

#[async_trait]
impl AuthGateway for SupabaseAuth {
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        metadata: &SignUpMetadata,
    ) -> Result<SignUpResponse, BackendError> {
        let body = json!({ "email": email, "password": password, "data": metadata });
        let response = self.post("signup", &[], body).await?;
        let value: Value = serde_json::from_slice(&response.bytes().await?)?;

        // Auto-confirmed projects answer with a full session, the rest with the bare user
        if value.get("access_token").is_some() {
            let session = serde_json::from_value::<TokenGrant>(value)?.into_session(Utc::now());
            self.client.set_access_token(Some(session.access_token.clone())).await;
            Ok(SignUpResponse {
                user: session.user.clone(),
                session: Some(session),
            })
        } else {
            Ok(SignUpResponse {
                user: serde_json::from_value(value)?,
                session: None,
            })
        }
    }

    async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<AuthSession, BackendError> {
        self.grant("password", json!({ "email": email, "password": password })).await
    }

    async fn refresh_session(&self, refresh_token: &str) -> Result<AuthSession, BackendError> {
        self.grant("refresh_token", json!({ "refresh_token": refresh_token })).await
    }

    async fn sign_out(&self) -> Result<(), BackendError> {
        if self.client.access_token().await.is_none() {
            return Ok(());
        }
        let result = self.post("logout", &[], json!({})).await;
        self.client.set_access_token(None).await;
        result.map(|_| ())
    }

    async fn get_user(&self) -> Result<AuthUser, BackendError> {
        if self.client.access_token().await.is_none() {
            return Err(BackendError::NoSession);
        }
        let url = self.client.auth_endpoint("user")?;
        let request = self.client.authorize(self.client.http().get(url)).await;
        let response = check(request.send().await?).await?;
        Ok(serde_json::from_slice(&response.bytes().await?)?)
    }

    async fn reset_password_for_email(&self, email: &str, redirect_to: &str) -> Result<(), BackendError> {
        self.post("recover", &[("redirect_to", redirect_to)], json!({ "email": email }))
            .await
            .map(|_| ())
    }

    async fn set_session(&self, session: Option<AuthSession>) {
        self.client
            .set_access_token(session.map(|s| s.access_token))
            .await;
    }

    fn authorize_url(&self, provider: &str, redirect_to: &str) -> Result<String, BackendError> {
        let mut url = self.client.auth_endpoint("authorize")?;
        url.query_pairs_mut()
            .append_pair("provider", provider)
            .append_pair("redirect_to", redirect_to);
        Ok(url.into())
    }
}
