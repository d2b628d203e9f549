//! API Errors

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("log in first")]
    NotLoggedIn,

    /// Server answered with a non-2xx status
    #[error("{status}: {reason}")]
    Status { status: u16, reason: String },

    #[error("request failed: {0}")]
    Network(String),

    #[error("unexpected response: {0}")]
    Decode(String),

    /// The modal holds no entity the action can apply to
    #[error("{0}")]
    InvalidState(&'static str),

    /// A value typed by the user was rejected before any request
    #[error("{0}")]
    InvalidInput(&'static str),
}

impl ApiError {
    pub fn from_status(status: StatusCode) -> Self {
        ApiError::Status {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Network(e.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message() {
        let err = ApiError::from_status(StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "404: Not Found");
    }

    #[test]
    fn test_decode_from_serde() {
        let err: ApiError = serde_json::from_str::<u64>("\"x\"").unwrap_err().into();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
