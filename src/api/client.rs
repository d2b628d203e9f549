//! HTTP Client
//!
//! Sends [`ApiRequest`] values with `reqwest` (browser `fetch` under WASM).

use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use super::{ApiError, ApiRequest};
use crate::config::AppConfig;

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: AppConfig,
}

impl ApiClient {
    pub fn new(config: AppConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Send a request and decode its JSON response
    pub async fn fetch<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, ApiError> {
        let body = self.execute(request).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Send a request whose response body is not needed
    pub async fn send(&self, request: ApiRequest) -> Result<(), ApiError> {
        self.execute(request).await.map(|_| ())
    }

    async fn execute(&self, request: ApiRequest) -> Result<String, ApiError> {
        let url = self.config.api_url(&request.target());
        tracing::debug!("{} {}", request.method, url);

        let mut builder = self.http.request(request.method, &url);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;
        check_status(status, body)
    }
}

/// Map non-2xx responses to [`ApiError::Status`]
fn check_status(status: StatusCode, body: String) -> Result<String, ApiError> {
    if status.is_success() {
        Ok(body)
    } else {
        tracing::debug!("error body: {}", body);
        Err(ApiError::from_status(status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_status_success() {
        assert_eq!(check_status(StatusCode::OK, "[]".to_string()), Ok("[]".to_string()));
        assert_eq!(check_status(StatusCode::NO_CONTENT, String::new()), Ok(String::new()));
    }

    #[test]
    fn test_check_status_failure() {
        let err = check_status(StatusCode::FORBIDDEN, "denied".to_string()).unwrap_err();
        assert_eq!(
            err,
            ApiError::Status { status: 403, reason: "Forbidden".to_string() }
        );
    }
}
