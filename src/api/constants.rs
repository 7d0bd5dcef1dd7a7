//! API constants for the HaloPSA REST API

/// OAuth2 token endpoint, relative to the instance URL
pub const TOKEN_PATH: &str = "/auth/token";

/// Report endpoint used for SQL-style queries
pub const REPORT_PATH: &str = "/api/Report";

/// Scope requested in the client-credentials exchange
pub const TOKEN_SCOPE: &str = "all";

/// Seconds shaved off the server-declared token lifetime so a token never
/// expires mid-flight
pub const TOKEN_EXPIRY_SKEW_SECS: u64 = 60;

/// Query used by the connection probe
pub const CONNECTION_TEST_SQL: &str = "SELECT 1 as test";

/// Default request timeout for the HTTP transport
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Standard headers for HaloPSA requests
pub mod headers {
    pub const CONTENT_TYPE_JSON: &str = "application/json";

    pub const CONTENT_TYPE_FORM: &str = "application/x-www-form-urlencoded";

    /// Report endpoint accepts anything back
    pub const ACCEPT_ANY: &str = "*/*";
}

/// Limits applied by the description-document navigation operations
pub mod limits {
    /// Hard ceiling on endpoints returned by the detail lookup
    pub const MAX_ENDPOINT_DETAILS: usize = 50;

    /// Per-path summaries included in the overview
    pub const OVERVIEW_PATH_LIMIT: usize = 100;

    /// Component schemas attached to a detail lookup
    pub const DETAIL_SCHEMA_LIMIT: usize = 20;

    /// Matching schema names are listed automatically up to this many
    pub const SCHEMA_NAME_LIST_THRESHOLD: usize = 20;

    pub const DEFAULT_MAX_ENDPOINTS: usize = 10;
    pub const DEFAULT_LIST_LIMIT: usize = 100;
    pub const DEFAULT_SEARCH_LIMIT: usize = 50;
    pub const DEFAULT_SCHEMA_LIMIT: usize = 50;
}

/// Build the token endpoint URL
pub fn token_endpoint(base_url: &str) -> String {
    format!("{}{}", base_url, TOKEN_PATH)
}

/// Build the report endpoint URL (tenant is added as a query parameter)
pub fn report_endpoint(base_url: &str) -> String {
    format!("{}{}", base_url, REPORT_PATH)
}

/// Build the URL for an arbitrary API path
pub fn api_endpoint(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url, path)
}
