use reqwest::Method;
use serde_json::{Map, Value, json};
use std::sync::Arc;
use std::time::Duration;

use super::auth::{Clock, TokenManager};
use super::constants::{self, headers};
use super::error::{Failure, HaloError, Result};
use super::metadata::{
    self, DetailOptions, DocumentSource, EndpointDetails, EndpointList, EndpointSearch, FileDocument,
    SchemaListing, SchemaOverview,
};
use super::models::ApiResponse;
use crate::config::HaloConfig;

/// HaloPSA REST client: authenticated calls, report queries, and
/// navigation of the bundled API description document
pub struct HaloClient {
    base_url: String,
    tenant: String,
    http_client: reqwest::Client,
    token_manager: TokenManager,
    documents: Arc<dyn DocumentSource>,
}

impl HaloClient {
    pub fn new(config: &HaloConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(concat!("halopsa-cli/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(HaloError::HttpClient)?;

        Ok(Self::with_custom_client(config, http_client))
    }

    /// Create a client on top of an existing HTTP client
    pub fn with_custom_client(config: &HaloConfig, http_client: reqwest::Client) -> Self {
        let token_manager = TokenManager::new(config, http_client.clone());
        Self::assemble(config, http_client, token_manager)
    }

    /// Create a client whose token expiry is judged against `clock`
    pub fn with_clock(config: &HaloConfig, http_client: reqwest::Client, clock: Arc<dyn Clock>) -> Self {
        let token_manager = TokenManager::with_clock(config, http_client.clone(), clock);
        Self::assemble(config, http_client, token_manager)
    }

    fn assemble(config: &HaloConfig, http_client: reqwest::Client, token_manager: TokenManager) -> Self {
        Self {
            base_url: config.base_url().to_string(),
            tenant: config.tenant.clone(),
            http_client,
            token_manager,
            documents: Arc::new(FileDocument::new(config.api_doc_path.clone())),
        }
    }

    /// Replace where the API description document is read from
    pub fn with_document_source(mut self, source: Arc<dyn DocumentSource>) -> Self {
        self.documents = source;
        self
    }

    pub fn token_manager(&self) -> &TokenManager {
        &self.token_manager
    }

    /// Make sure a valid token is cached, exchanging credentials if needed
    pub async fn authenticate(&self) -> Result<()> {
        self.token_manager.ensure_valid().await.map(|_| ())
    }

    /// Issue an authenticated request against `path`.
    ///
    /// The tenant is always sent as a query parameter, followed by
    /// `query_params` entries whose value is not null. A body is only sent
    /// for POST, PUT and PATCH; string bodies go out verbatim, anything
    /// else as JSON.
    pub async fn call_api(
        &self,
        path: &str,
        method: Method,
        body: Option<&Value>,
        query_params: Option<&Map<String, Value>>,
    ) -> Result<ApiResponse> {
        let access_token = self.token_manager.ensure_valid().await?;
        let url = constants::api_endpoint(&self.base_url, path);

        let mut params = vec![("tenant".to_string(), self.tenant.clone())];
        if let Some(query_params) = query_params {
            params.extend(
                query_params
                    .iter()
                    .filter_map(|(key, value)| query_value(value).map(|v| (key.clone(), v))),
            );
        }

        log::debug!("{} {}", method, url);

        let sends_body = method == Method::POST || method == Method::PUT || method == Method::PATCH;
        let mut request = self
            .http_client
            .request(method, &url)
            .bearer_auth(&access_token)
            .header(reqwest::header::ACCEPT, headers::CONTENT_TYPE_JSON)
            .header(reqwest::header::CONTENT_TYPE, headers::CONTENT_TYPE_JSON)
            .query(&params);

        if sends_body {
            if let Some(body) = body {
                request = match body {
                    Value::String(raw) => request.body(raw.clone()),
                    other => request.body(other.to_string()),
                };
            }
        }

        let response = request
            .send()
            .await
            .map_err(|e| HaloError::ApiCall(Failure::from_reqwest(e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(HaloError::ApiCall(Failure::Status {
                status: status.as_u16(),
                body,
            }));
        }

        let is_json = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.contains(headers::CONTENT_TYPE_JSON));

        if is_json {
            let value = response
                .json()
                .await
                .map_err(|e| HaloError::ApiCall(Failure::from_reqwest(e)))?;
            Ok(ApiResponse::Json(value))
        } else {
            let text = response
                .text()
                .await
                .map_err(|e| HaloError::ApiCall(Failure::from_reqwest(e)))?;
            Ok(ApiResponse::Text(text))
        }
    }

    /// Run a SQL report query and return the server's JSON unmodified
    pub async fn execute_query(&self, sql: &str) -> Result<Value> {
        let access_token = self.token_manager.ensure_valid().await?;
        let url = constants::report_endpoint(&self.base_url);
        let payload = json!([{ "_loadreportonly": true, "sql": sql }]);

        log::debug!("Executing report query ({} chars)", sql.len());

        let response = self
            .http_client
            .post(&url)
            .query(&[("tenant", self.tenant.as_str())])
            .bearer_auth(&access_token)
            .header(reqwest::header::ACCEPT, headers::ACCEPT_ANY)
            .json(&payload)
            .send()
            .await
            .map_err(|e| HaloError::Query(Failure::from_reqwest(e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(HaloError::Query(Failure::Status {
                status: status.as_u16(),
                body,
            }));
        }

        response
            .json()
            .await
            .map_err(|e| HaloError::Query(Failure::from_reqwest(e)))
    }

    /// Liveness probe: authenticate and run a trivial query. Never fails;
    /// the cause of a failure is logged.
    pub async fn test_connection(&self) -> bool {
        let outcome = match self.authenticate().await {
            Ok(()) => self.execute_query(constants::CONNECTION_TEST_SQL).await.map(|_| ()),
            Err(e) => Err(e),
        };

        match outcome {
            Ok(()) => {
                log::info!("Connection test succeeded");
                true
            }
            Err(e) => {
                log::error!("Connection test failed: {}", e);
                false
            }
        }
    }

    pub async fn get_api_schema_overview(&self) -> Result<SchemaOverview> {
        let doc = self.documents.load().await?;
        Ok(metadata::schema_overview(&doc))
    }

    pub async fn get_api_endpoint_details(&self, path_pattern: &str, options: &DetailOptions) -> Result<EndpointDetails> {
        let doc = self.documents.load().await?;
        Ok(metadata::endpoint_details(&doc, path_pattern, options))
    }

    pub async fn list_api_endpoints(&self, category: Option<&str>, limit: usize, skip: usize) -> Result<EndpointList> {
        let doc = self.documents.load().await?;
        Ok(metadata::list_endpoints(&doc, category, limit, skip))
    }

    pub async fn search_api_endpoints(&self, query: &str, limit: usize, skip: usize) -> Result<EndpointSearch> {
        let doc = self.documents.load().await?;
        Ok(metadata::search_endpoints(&doc, query, limit, skip))
    }

    pub async fn get_api_schemas(
        &self,
        schema_pattern: Option<&str>,
        limit: usize,
        skip: usize,
        list_names: bool,
    ) -> Result<SchemaListing> {
        let doc = self.documents.load().await?;
        Ok(metadata::list_schemas(&doc, schema_pattern, limit, skip, list_names))
    }
}

/// Text form of a query parameter value; null means "leave it out"
fn query_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
