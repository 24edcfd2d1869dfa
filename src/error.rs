use thiserror::Error;

/// Failure of a single call against the task-tracking API
#[derive(Debug, Error)]
pub(crate) enum FetchError {
    #[error("authentication rejected (HTTP {status}); check ASANA_PERSONAL_ACCESS_TOKEN")]
    Auth { status: u16 },

    #[error("resource not found: {resource}")]
    NotFound { resource: String },

    #[error("rate limited by the API (HTTP 429)")]
    RateLimited,

    #[error("unexpected HTTP status {0}")]
    Status(u16),

    #[error("network error: {0}")]
    Network(String),

    #[error("invalid response body: {0}")]
    Decode(String),
}

impl FetchError {
    /// Map an HTTP status code to an error kind
    pub(crate) fn from_status(status: u16, resource: &str) -> Self {
        match status {
            401 | 403 => FetchError::Auth { status },
            404 => FetchError::NotFound {
                resource: resource.to_string(),
            },
            429 => FetchError::RateLimited,
            other => FetchError::Status(other),
        }
    }

    /// Whether a later identical request could succeed.
    /// Nothing retries today; callers only use this to word their logs.
    pub(crate) fn is_retryable(&self) -> bool {
        match self {
            FetchError::RateLimited | FetchError::Network(_) => true,
            FetchError::Status(code) => *code >= 500,
            FetchError::Auth { .. } | FetchError::NotFound { .. } | FetchError::Decode(_) => false,
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum RenderError {
    #[error("Failed to encode dashboard image {path}: {source}")]
    Encode {
        path: String,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to create output directory {path}: {source}")]
    CreateDir {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_401_and_403_are_auth() {
        assert!(matches!(
            FetchError::from_status(401, "x"),
            FetchError::Auth { status: 401 }
        ));
        assert!(matches!(
            FetchError::from_status(403, "x"),
            FetchError::Auth { status: 403 }
        ));
    }

    #[test]
    fn status_404_keeps_resource() {
        let e = FetchError::from_status(404, "projects/123/tasks");
        assert_eq!(e.to_string(), "resource not found: projects/123/tasks");
    }

    #[test]
    fn status_429_is_rate_limited() {
        assert!(matches!(
            FetchError::from_status(429, "x"),
            FetchError::RateLimited
        ));
    }

    #[test]
    fn other_status_is_passed_through() {
        assert_eq!(
            FetchError::from_status(502, "x").to_string(),
            "unexpected HTTP status 502"
        );
    }

    #[test]
    fn retryable_kinds() {
        assert!(FetchError::RateLimited.is_retryable());
        assert!(FetchError::Network("reset".to_string()).is_retryable());
        assert!(FetchError::Status(503).is_retryable());
        assert!(!FetchError::Status(400).is_retryable());
        assert!(!FetchError::Auth { status: 401 }.is_retryable());
        assert!(
            !FetchError::NotFound {
                resource: "x".to_string()
            }
            .is_retryable()
        );
        assert!(!FetchError::Decode("eof".to_string()).is_retryable());
    }

    #[test]
    fn auth_error_display_mentions_token_variable() {
        let e = FetchError::Auth { status: 401 };
        assert_eq!(
            e.to_string(),
            "authentication rejected (HTTP 401); check ASANA_PERSONAL_ACCESS_TOKEN"
        );
    }
}
