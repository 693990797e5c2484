use std::time::Duration;

use bot_logging::bot_debug;
use homework_core::{ApiError, Cursor};
use reqwest::header::AUTHORIZATION;
use serde_json::Value;
use url::Url;

const CURSOR_PARAM: &str = "from_date";

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub endpoint: Url,
    pub token: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl ClientSettings {
    pub fn new(endpoint: Url, token: impl Into<String>) -> Self {
        Self {
            endpoint,
            token: token.into(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Source of raw homework status answers.
#[async_trait::async_trait]
pub trait ApiClient: Send + Sync {
    /// Requests statuses changed since `cursor` and returns the decoded JSON body.
    async fn fetch(&self, cursor: Cursor) -> Result<Value, ApiError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestApiClient {
    settings: ClientSettings,
    client: reqwest::Client,
}

impl ReqwestApiClient {
    /// Builds the underlying HTTP client once; it is reused for every fetch.
    pub fn new(settings: ClientSettings) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| transport_error(&settings.endpoint, err))?;
        Ok(Self { settings, client })
    }
}

fn transport_error(endpoint: &Url, err: reqwest::Error) -> ApiError {
    let message = if err.is_timeout() {
        format!("timed out: {err}")
    } else {
        err.to_string()
    };
    ApiError::Transport {
        endpoint: endpoint.to_string(),
        message,
    }
}

#[async_trait::async_trait]
impl ApiClient for ReqwestApiClient {
    async fn fetch(&self, cursor: Cursor) -> Result<Value, ApiError> {
        bot_debug!(
            "Requesting {} with {}={}",
            self.settings.endpoint,
            CURSOR_PARAM,
            cursor
        );

        let response = self
            .client
            .get(self.settings.endpoint.clone())
            .header(AUTHORIZATION, format!("OAuth {}", self.settings.token))
            .query(&[(CURSOR_PARAM, cursor)])
            .send()
            .await
            .map_err(|err| transport_error(&self.settings.endpoint, err))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::HttpStatus {
                code: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|err| transport_error(&self.settings.endpoint, err))?;
        serde_json::from_slice(&body).map_err(|err| ApiError::Decode {
            message: err.to_string(),
        })
    }
}
