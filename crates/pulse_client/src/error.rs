use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, derive_more::From, Error)]
pub enum Error {
    #[error("Invalid base url: {0}")]
    InvalidBaseUrl(url::ParseError),

    #[from(ignore)]
    #[error("Unsupported url scheme '{0}', expected http or https")]
    UnsupportedScheme(String),

    #[from(ignore)]
    #[error("Invalid Status Code: {code}{}", detail_suffix(.detail))]
    InvalidStatusCode { code: u16, detail: Option<ErrorResponse> },
}

impl Error {
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::InvalidStatusCode { code, .. } => Some(*code),
            _ => None,
        }
    }
}

fn detail_suffix(detail: &Option<ErrorResponse>) -> String {
    detail
        .as_ref()
        .map(|detail| format!(" ({detail})"))
        .unwrap_or_default()
}

/// Error body produced by the backend, `{"detail": ...}`.
///
/// `detail` is a plain string for handler errors and a list of objects for
/// request validation failures.
#[derive(Default, Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ErrorResponse {
    #[serde(default)]
    pub detail: Value,
}

impl ErrorResponse {
    pub fn message(&self) -> Option<String> {
        match &self.detail {
            Value::Null => None,
            Value::String(detail) => Some(detail.clone()),
            Value::Array(items) => {
                let messages: Vec<_> = items
                    .iter()
                    .filter_map(|item| item.get("msg").and_then(Value::as_str))
                    .collect();
                if messages.is_empty() {
                    Some(self.detail.to_string())
                } else {
                    Some(messages.join("; "))
                }
            }
            other => Some(other.to_string()),
        }
    }
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message() {
            Some(message) => f.write_str(&message),
            None => f.write_str("no details"),
        }
    }
}
