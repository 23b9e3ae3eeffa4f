use reqwest::StatusCode;
use thiserror::Error;

/// Failures raised while talking to the upstream service.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid url '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("api key contains characters that are not valid in an HTTP header")]
    InvalidApiKey,

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("failed to decode response from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("request cancelled")]
    Cancelled,
}

impl ApiError {
    pub fn invalid_url(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            reason: reason.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status, .. } if *status == StatusCode::NOT_FOUND)
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(err) => err.status(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_404_counts_as_not_found() {
        let missing = ApiError::Status {
            status: StatusCode::NOT_FOUND,
            body: String::new(),
        };
        let conflict = ApiError::Status {
            status: StatusCode::CONFLICT,
            body: "duplicate".into(),
        };
        assert!(missing.is_not_found());
        assert!(!conflict.is_not_found());
        assert!(!ApiError::Cancelled.is_not_found());
        assert_eq!(conflict.to_string(), "unexpected status 409 Conflict: duplicate");
    }
}
