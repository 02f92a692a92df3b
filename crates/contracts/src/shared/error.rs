use thiserror::Error;

/// Failure of a call to the assistant backend.
///
/// The `Display` text is what the user sees in the transcript after the
/// `"Error: "` prefix, so variants carry the underlying message verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request (URL, form body) could not be built
    #[error("{0}")]
    Request(String),
    /// Transport failure: connection refused, CORS, aborted
    #[error("{0}")]
    Network(String),
    /// Server answered with a non-success status
    #[error("HTTP {0}")]
    Http(u16),
    /// Body was not JSON or did not match the expected shape
    #[error("{0}")]
    Decode(String),
}

impl ApiError {
    pub fn request(e: impl std::fmt::Display) -> Self {
        ApiError::Request(e.to_string())
    }

    pub fn network(e: impl std::fmt::Display) -> Self {
        ApiError::Network(e.to_string())
    }

    pub fn decode(e: impl std::fmt::Display) -> Self {
        ApiError::Decode(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_bare_message() {
        assert_eq!(ApiError::network("Failed to fetch").to_string(), "Failed to fetch");
        assert_eq!(ApiError::Http(502).to_string(), "HTTP 502");
    }

    #[test]
    fn test_decode_from_serde_error() {
        let err = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let api = ApiError::decode(&err);
        assert!(matches!(api, ApiError::Decode(_)));
        assert_eq!(api.to_string(), err.to_string());
    }
}
