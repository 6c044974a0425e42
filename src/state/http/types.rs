use std::error::Error as StdError;
use std::fmt;

use reqwest::Error as ReqwestError;
use serde_json::Value;

/// Errors surfaced by the API helpers.
///
/// Wrapped into `anyhow::Error`, callers can tell them apart with
/// `downcast_ref::<ApiError>()`.
#[derive(Debug)]
#[non_exhaustive]
pub enum ApiError {
    /// The API rejected the input (HTTP 422). Carries the decoded error body.
    Validation(Value),
    /// Any other client or server error status.
    Status(ReqwestError),
}

impl ApiError {
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            Self::Validation(_) => Some(reqwest::StatusCode::UNPROCESSABLE_ENTITY),
            Self::Status(inner) => inner.status(),
        }
    }
}

impl From<ReqwestError> for ApiError {
    fn from(e: ReqwestError) -> Self {
        Self::Status(e)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(body) => write!(f, "Validation error: {body}"),
            Self::Status(inner) => fmt::Display::fmt(&inner, f),
        }
    }
}

impl StdError for ApiError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Validation(_) => None,
            Self::Status(inner) => Some(inner),
        }
    }
}

/// Successful response body, decoded when possible.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Json(Value),
    Text(String),
}

impl fmt::Display for ResponseBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(value) => match serde_json::to_string_pretty(value) {
                Ok(pretty) => f.write_str(&pretty),
                Err(_) => write!(f, "{value}"),
            },
            Self::Text(text) => f.write_str(text),
        }
    }
}
