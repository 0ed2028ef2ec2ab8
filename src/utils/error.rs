use thiserror::Error;

#[derive(Error, Debug)]
pub enum FolioError {
    #[error("API Error: {status} - {endpoint}")]
    RequestError { status: u16, endpoint: String },

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl FolioError {
    /// HTTP status of a rejected remote request, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            FolioError::RequestError { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, FolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_error_display_names_status_and_endpoint() {
        let err = FolioError::RequestError {
            status: 404,
            endpoint: "/wp/v2/posts".to_string(),
        };

        assert_eq!(err.to_string(), "API Error: 404 - /wp/v2/posts");
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_status_is_none_for_local_errors() {
        let err = FolioError::ConfigError {
            message: "missing".to_string(),
        };

        assert_eq!(err.status(), None);
    }
}
