use std::fmt;
use std::sync::Arc;
use std::time::{Duration, SystemTime};
use tokio::sync::RwLock;

use super::constants::{self, headers};
use super::error::{Failure, HaloError, Result};
use super::models::{TokenInfo, TokenResponse};
use crate::config::HaloConfig;

/// Source of the current instant, injectable so expiry can be tested
/// without sleeping
pub trait Clock: Send + Sync + fmt::Debug {
    fn now(&self) -> SystemTime;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }
}

/// Owns the bearer token for one HaloPSA instance and re-authenticates
/// only when the cached token is missing or expired.
///
/// Concurrent callers that all see an expired token will each run the
/// exchange; the last one to finish wins. The lock is never held across
/// the network call.
pub struct TokenManager {
    http_client: reqwest::Client,
    token_url: String,
    client_id: String,
    client_secret: String,
    token: Arc<RwLock<Option<TokenInfo>>>,
    clock: Arc<dyn Clock>,
}

impl TokenManager {
    pub fn new(config: &HaloConfig, http_client: reqwest::Client) -> Self {
        Self::with_clock(config, http_client, Arc::new(SystemClock))
    }

    pub fn with_clock(config: &HaloConfig, http_client: reqwest::Client, clock: Arc<dyn Clock>) -> Self {
        Self {
            http_client,
            token_url: constants::token_endpoint(config.base_url()),
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            token: Arc::new(RwLock::new(None)),
            clock,
        }
    }

    /// Return a bearer token that is valid right now, exchanging
    /// credentials first if needed
    pub async fn ensure_valid(&self) -> Result<String> {
        let now = self.clock.now();
        if let Some(token) = self.token.read().await.as_ref() {
            if token.is_valid_at(now) {
                log::debug!("Using cached access token");
                return Ok(token.access_token.clone());
            }
            log::debug!("Cached access token expired");
        }

        let token = self.request_token().await?;
        let access_token = token.access_token.clone();
        *self.token.write().await = Some(token);
        Ok(access_token)
    }

    /// Expiry of the cached token, if one has been fetched
    pub async fn expires_at(&self) -> Option<SystemTime> {
        self.token.read().await.as_ref().map(|t| t.expires_at)
    }

    /// Drop the cached token so the next call re-authenticates
    pub async fn invalidate(&self) {
        *self.token.write().await = None;
    }

    async fn request_token(&self) -> Result<TokenInfo> {
        log::info!("Authenticating to {}", self.token_url);

        let response = self
            .http_client
            .post(&self.token_url)
            .header(reqwest::header::ACCEPT, headers::CONTENT_TYPE_JSON)
            .header(reqwest::header::CONTENT_TYPE, headers::CONTENT_TYPE_FORM)
            .form(&[
                ("grant_type", "client_credentials"),
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
                ("scope", constants::TOKEN_SCOPE),
            ])
            .send()
            .await
            .map_err(|e| HaloError::Authentication(Failure::from_reqwest(e)))?;

        let status = response.status();
        log::debug!("Token request status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(HaloError::Authentication(Failure::Status {
                status: status.as_u16(),
                body,
            }));
        }

        let token_data: TokenResponse = response
            .json()
            .await
            .map_err(|e| HaloError::Authentication(Failure::InvalidResponse(e.to_string())))?;

        let access_token = token_data.access_token.ok_or_else(|| {
            HaloError::Authentication(Failure::InvalidResponse("no access_token in response".to_string()))
        })?;

        let expires_in = token_data.expires_in.unwrap_or_else(|| {
            log::warn!("Token response has no expires_in; token will be refreshed on next use");
            0
        });

        let lifetime = expires_in.saturating_sub(constants::TOKEN_EXPIRY_SKEW_SECS);
        let expires_at = self.clock.now() + Duration::from_secs(lifetime);

        log::info!("Successfully authenticated, token valid for {}s", lifetime);
        Ok(TokenInfo {
            access_token,
            expires_at,
        })
    }
}

impl fmt::Debug for TokenManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenManager")
            .field("token_url", &self.token_url)
            .field("client_id", &self.client_id)
            .finish_non_exhaustive()
    }
}
