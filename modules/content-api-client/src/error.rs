use thiserror::Error;

pub type Result<T> = std::result::Result<T, ContentApiError>;

#[derive(Debug, Error)]
pub enum ContentApiError {
    #[error("{0}")]
    Network(String),

    /// Non-2xx response. `message` is the response body, or `HTTP <code>` when the body is empty.
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("Invalid response: {0}")]
    Parse(String),
}

impl ContentApiError {
    pub fn api(status: u16, body: String) -> Self {
        let message = if body.trim().is_empty() {
            format!("HTTP {status}")
        } else {
            body
        };
        ContentApiError::Api { status, message }
    }
}

impl From<reqwest::Error> for ContentApiError {
    fn from(err: reqwest::Error) -> Self {
        ContentApiError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for ContentApiError {
    fn from(err: serde_json::Error) -> Self {
        ContentApiError::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_uses_body_as_message() {
        let err = ContentApiError::api(404, "Client not found".to_string());
        assert_eq!(err.to_string(), "Client not found");
    }

    #[test]
    fn api_error_falls_back_to_status_code() {
        let err = ContentApiError::api(502, "  ".to_string());
        assert_eq!(err.to_string(), "HTTP 502");
    }
}
