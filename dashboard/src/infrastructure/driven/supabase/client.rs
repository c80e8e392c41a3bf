use std::time::Duration;
use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::{RequestBuilder, Response};
use serde_json::Value;
use tokio::sync::RwLock;
use url::Url;

use super::query::QueryBuilder;
use crate::config::BackendConfig;
use crate::error::{BackendError, ConfigError};

/// Handle on one platform project. Table queries and auth calls share it,
/// so once a user signs in every request runs with their access token.
pub struct SupabaseClient {
    http: reqwest::Client,
    rest_url: Url,
    auth_url: Url,
    anon_key: String,
    access_token: RwLock<Option<String>>,
}

impl SupabaseClient {
    pub fn new(config: &BackendConfig) -> Result<Self, ConfigError> {
        if config.url.trim().is_empty() {
            return Err(ConfigError::Missing("backend.url"));
        }
        if config.anon_key.trim().is_empty() {
            return Err(ConfigError::Missing("backend.anon_key"));
        }

        let base = Url::parse(&format!("{}/", config.url.trim_end_matches('/'))).map_err(|e| {
            ConfigError::InvalidUrl {
                url: config.url.clone(),
                reason: e.to_string(),
            }
        })?;
        let invalid = |e: url::ParseError| ConfigError::InvalidUrl {
            url: config.url.clone(),
            reason: e.to_string(),
        };
        let rest_url = base.join("rest/v1/").map_err(invalid)?;
        let auth_url = base.join("auth/v1/").map_err(invalid)?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;

        Ok(Self {
            http,
            rest_url,
            auth_url,
            anon_key: config.anon_key.clone(),
            access_token: RwLock::new(None),
        })
    }

    /// Starts a query against `/rest/v1/{table}`.
    pub fn table(&self, table: &'static str) -> QueryBuilder<'_> {
        QueryBuilder::new(self, table)
    }

    pub async fn set_access_token(&self, token: Option<String>) {
        *self.access_token.write().await = token;
    }

    pub async fn access_token(&self) -> Option<String> {
        self.access_token.read().await.clone()
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub(crate) fn rest_endpoint(&self, table: &str) -> Result<Url, BackendError> {
        Ok(self.rest_url.join(table)?)
    }

    pub(crate) fn auth_endpoint(&self, path: &str) -> Result<Url, BackendError> {
        Ok(self.auth_url.join(path)?)
    }

    /// Adds `apikey` and a bearer token: the user's when signed in, the
    /// anon key otherwise.
    pub(crate) async fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        let token = self
            .access_token()
            .await
            .unwrap_or_else(|| self.anon_key.clone());
        let bearer = HeaderValue::from_str(&format!("Bearer {token}"));
        let request = request.header("apikey", &self.anon_key);
        match bearer {
            Ok(value) => request.header(AUTHORIZATION, value),
            Err(_) => request,
        }
    }
}

/// Passes successful responses through and turns the rest into
/// [`BackendError::Api`] carrying the platform's own message.
pub(crate) async fn check(response: Response) -> Result<Response, BackendError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = error_message(&body).unwrap_or_else(|| {
        status
            .canonical_reason()
            .map(str::to_string)
            .unwrap_or_else(|| status.to_string())
    });
    Err(BackendError::api(status.as_u16(), message))
}

/// Auth errors use `msg` or `error_description`, PostgREST uses `message`.
fn error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    ["msg", "message", "error_description", "error"]
        .iter()
        .find_map(|key| value.get(*key).and_then(Value::as_str))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backend(url: &str) -> BackendConfig {
        BackendConfig {
            url: url.to_string(),
            anon_key: "anon-key".to_string(),
            request_timeout_secs: 5,
        }
    }

    #[test]
    fn test_endpoints_tolerate_trailing_slash() {
        let client = SupabaseClient::new(&backend("https://demo.supabase.co/")).unwrap();
        assert_eq!(
            client.rest_endpoint("tenants").unwrap().as_str(),
            "https://demo.supabase.co/rest/v1/tenants"
        );
        assert_eq!(
            client.auth_endpoint("token").unwrap().as_str(),
            "https://demo.supabase.co/auth/v1/token"
        );
    }

    #[test]
    fn test_missing_settings_fail_fast() {
        let mut config = backend("");
        assert!(matches!(SupabaseClient::new(&config), Err(ConfigError::Missing("backend.url"))));

        config.url = "https://demo.supabase.co".to_string();
        config.anon_key = " ".to_string();
        assert!(matches!(SupabaseClient::new(&config), Err(ConfigError::Missing("backend.anon_key"))));

        config.anon_key = "anon-key".to_string();
        config.url = "not a url".to_string();
        assert!(matches!(SupabaseClient::new(&config), Err(ConfigError::InvalidUrl { .. })));
    }

    #[test]
    fn test_error_message_extraction() {
        assert_eq!(
            error_message(r#"{"code":400,"msg":"Invalid login credentials"}"#).as_deref(),
            Some("Invalid login credentials")
        );
        assert_eq!(
            error_message(r#"{"error":"invalid_grant","error_description":"Email not confirmed"}"#).as_deref(),
            Some("Email not confirmed")
        );
        assert_eq!(
            error_message(r#"{"code":"23505","message":"duplicate key value violates unique constraint"}"#)
                .as_deref(),
            Some("duplicate key value violates unique constraint")
        );
        assert_eq!(error_message("<html>bad gateway</html>"), None);
    }
}
