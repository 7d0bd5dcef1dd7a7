use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::SystemTime;

/// Cached bearer token, replaced wholesale on every refresh
#[derive(Debug, Clone)]
pub struct TokenInfo {
    pub access_token: String,
    pub expires_at: SystemTime,
}

impl TokenInfo {
    /// A token is usable only while its expiry is strictly in the future
    pub fn is_valid_at(&self, now: SystemTime) -> bool {
        self.expires_at > now
    }
}

/// Body returned by the token endpoint
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: Option<String>,
    /// Lifetime in seconds
    pub expires_in: Option<u64>,
}

/// Successful response of a generic API call
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ApiResponse {
    /// Body decoded because the server declared a JSON content type
    Json(Value),
    /// Any other content type, returned verbatim
    Text(String),
}

impl ApiResponse {
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            ApiResponse::Json(value) => Some(value),
            ApiResponse::Text(_) => None,
        }
    }

    pub fn into_json(self) -> Value {
        match self {
            ApiResponse::Json(value) => value,
            ApiResponse::Text(text) => Value::String(text),
        }
    }
}
