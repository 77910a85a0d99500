// Error types shared by the API client and the content model.
//
// The client never recovers from these: every failure carries the HTTP
// method and path so that callers can report it as-is.

use std::path::PathBuf;

use reqwest::{Method, StatusCode};

use crate::content::ContentKind;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Connection, DNS, TLS or timeout failure.
    #[error("{method} {path}: request failed: {source}")]
    Transport {
        method: Method,
        path: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{method} {path}: request cancelled")]
    Cancelled { method: Method, path: String },
    /// The server answered with a non-2xx status.
    #[error("{method} {path}: {status}: {message}")]
    Status {
        method: Method,
        path: String,
        status: StatusCode,
        message: String,
    },
    #[error("{method} {path}: cannot decode response body: {source}")]
    Decode {
        method: Method,
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("cannot encode request body: {0}")]
    Serialization(#[source] serde_json::Error),
    #[error("invalid client setup: {0}")]
    Setup(String),
    #[error("operation requires a concrete content kind, got {0:?}")]
    UnsupportedKind(ContentKind),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid content kind {text:?}: must be one of {allowed}")]
pub struct InvalidKindError {
    pub text: String,
    pub allowed: &'static str,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("cannot read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
}
