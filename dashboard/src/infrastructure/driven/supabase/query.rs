use std::fmt::Display;
use reqwest::header::{ACCEPT, CONTENT_RANGE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use super::client::{check, SupabaseClient};
use crate::error::BackendError;

const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";
const PREFER: &str = "Prefer";

/// PostgREST request under construction: filters, projection and ordering
/// become query parameters.
pub struct QueryBuilder<'a> {
    client: &'a SupabaseClient,
    table: &'static str,
    params: Vec<(String, String)>,
}

impl<'a> QueryBuilder<'a> {
    pub(crate) fn new(client: &'a SupabaseClient, table: &'static str) -> Self {
        Self {
            client,
            table,
            params: Vec::new(),
        }
    }

    pub fn select(mut self, columns: &str) -> Self {
        self.params.push(("select".to_string(), columns.to_string()));
        self
    }

    pub fn eq(mut self, column: &str, value: impl Display) -> Self {
        self.params.push((column.to_string(), format!("eq.{value}")));
        self
    }

    pub fn order(mut self, column: &str, ascending: bool) -> Self {
        let direction = if ascending { "asc" } else { "desc" };
        self.params.push(("order".to_string(), format!("{column}.{direction}")));
        self
    }

    pub fn limit(mut self, count: usize) -> Self {
        self.params.push(("limit".to_string(), count.to_string()));
        self
    }

    async fn request(&self, method: Method) -> Result<reqwest::RequestBuilder, BackendError> {
        let mut url = self.client.rest_endpoint(self.table)?;
        if !self.params.is_empty() {
            url.query_pairs_mut().extend_pairs(self.params.iter());
        }
        debug!(table = self.table, method = %method, query = url.query().unwrap_or(""), "rest request");
        Ok(self.client.authorize(self.client.http().request(method, url)).await)
    }

    pub async fn fetch<T: DeserializeOwned>(self) -> Result<Vec<T>, BackendError> {
        let response = check(self.request(Method::GET).await?.send().await?).await?;
        Ok(serde_json::from_slice(&response.bytes().await?)?)
    }

    /// First matching row, if any.
    pub async fn fetch_optional<T: DeserializeOwned>(self) -> Result<Option<T>, BackendError> {
        let rows: Vec<T> = self.limit(1).fetch().await?;
        Ok(rows.into_iter().next())
    }

    /// Exact row count via `HEAD` and the `Content-Range` header.
    pub async fn count(self) -> Result<u64, BackendError> {
        let request = self.request(Method::HEAD).await?.header(PREFER, "count=exact");
        let response = check(request.send().await?).await?;
        let header = response
            .headers()
            .get(CONTENT_RANGE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");
        parse_content_range(header)
            .ok_or_else(|| BackendError::api(response.status().as_u16(), format!("Unexpected Content-Range '{header}'")))
    }

    /// Inserts one row and returns it as stored.
    pub async fn insert<B, T>(self, body: &B) -> Result<T, BackendError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.write_one(Method::POST, body).await
    }

    /// Patches the rows matching the filters; exactly one must match.
    pub async fn update<B, T>(self, body: &B) -> Result<T, BackendError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.write_one(Method::PATCH, body).await
    }

    async fn write_one<B, T>(self, method: Method, body: &B) -> Result<T, BackendError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self
            .request(method)
            .await?
            .header(PREFER, "return=representation")
            .header(ACCEPT, SINGLE_OBJECT)
            .json(body);
        let response = check(request.send().await?).await?;
        Ok(serde_json::from_slice(&response.bytes().await?)?)
    }

    pub async fn delete(self) -> Result<(), BackendError> {
        check(self.request(Method::DELETE).await?.send().await?).await?;
        Ok(())
    }
}

/// `0-24/3573` and `*/0` both carry the total after the slash.
fn parse_content_range(header: &str) -> Option<u64> {
    header.rsplit_once('/')?.1.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BackendConfig;
    use serde_json::{json, Value};
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn client_for(server: &MockServer) -> SupabaseClient {
        SupabaseClient::new(&BackendConfig {
            url: server.uri(),
            anon_key: "anon-key".to_string(),
            request_timeout_secs: 5,
        })
        .unwrap()
    }

    #[test]
    fn test_parse_content_range() {
        assert_eq!(parse_content_range("0-24/3573"), Some(3573));
        assert_eq!(parse_content_range("*/0"), Some(0));
        assert_eq!(parse_content_range("*/*"), None);
        assert_eq!(parse_content_range(""), None);
    }

    #[tokio::test]
    async fn test_fetch_sends_filters_and_keys() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/v1/apps"))
            .and(query_param("select", "*"))
            .and(query_param("is_active", "eq.true"))
            .and(query_param("order", "sort_order.asc"))
            .and(header("apikey", "anon-key"))
            .and(header("authorization", "Bearer anon-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "code": "crm" }])))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let rows: Vec<Value> = client
            .table("apps")
            .select("*")
            .eq("is_active", true)
            .order("sort_order", true)
            .fetch()
            .await
            .unwrap();

        assert_eq!(rows, vec![json!({ "code": "crm" })]);
    }

    #[tokio::test]
    async fn test_signed_in_token_is_used() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/v1/tenants"))
            .and(header("authorization", "Bearer user-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        client.set_access_token(Some("user-token".to_string())).await;
        let rows: Vec<Value> = client.table("tenants").fetch().await.unwrap();
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn test_count_reads_content_range() {
        let server = MockServer::start().await;
        Mock::given(method("HEAD"))
            .and(path("/rest/v1/profiles"))
            .and(header("prefer", "count=exact"))
            .respond_with(ResponseTemplate::new(200).insert_header("content-range", "*/42"))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        assert_eq!(client.table("profiles").select("*").count().await.unwrap(), 42);
    }

    #[tokio::test]
    async fn test_insert_returns_single_row() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/rest/v1/tenant_apps"))
            .and(header("prefer", "return=representation"))
            .and(header("accept", SINGLE_OBJECT))
            .and(body_json(json!({ "tenant_id": "t1", "app_id": "a1" })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": "x", "is_active": true })))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let row: Value = client
            .table("tenant_apps")
            .insert(&json!({ "tenant_id": "t1", "app_id": "a1" }))
            .await
            .unwrap();
        assert_eq!(row["is_active"], true);
    }

    #[tokio::test]
    async fn test_rejection_keeps_platform_message() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/rest/v1/tenants"))
            .and(query_param("id", "eq.abc"))
            .respond_with(ResponseTemplate::new(409).set_body_json(json!({
                "code": "23503",
                "message": "update or delete on table \"tenants\" violates foreign key constraint"
            })))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = client.table("tenants").eq("id", "abc").delete().await.unwrap_err();

        assert!(matches!(err, BackendError::Api { status: 409, .. }));
        assert_eq!(
            err.to_string(),
            "update or delete on table \"tenants\" violates foreign key constraint"
        );
    }
}
