//! The error body Graph returns alongside non-success status codes.

use std::fmt;

use crate::model;

/// Top-level `{"error": {...}}` document.
#[model]
pub struct ODataError {
    pub error: Option<MainError>,
}

#[model]
pub struct MainError {
    pub code: Option<String>,
    pub details: Option<Vec<ErrorDetails>>,
    pub inner_error: Option<InnerError>,
    pub message: Option<String>,
    pub target: Option<String>,
}

#[model]
pub struct ErrorDetails {
    pub code: Option<String>,
    pub message: Option<String>,
    pub target: Option<String>,
}

/// Request correlation data attached by the service.
#[model]
pub struct InnerError {
    #[serde(rename = "client-request-id")]
    pub client_request_id: Option<String>,
    /// Kept as text since the service omits the offset.
    pub date: Option<String>,
    #[serde(rename = "request-id")]
    pub request_id: Option<String>,
}

impl ODataError {
    /// Code of the main error, if any.
    pub fn code(&self) -> Option<&str> {
        self.error.as_ref()?.code.as_deref()
    }

    /// Human-readable message of the main error, if any.
    pub fn message(&self) -> Option<&str> {
        self.error.as_ref()?.message.as_deref()
    }

    /// Service request id, for support tickets.
    pub fn request_id(&self) -> Option<&str> {
        self.error.as_ref()?.inner_error.as_ref()?.request_id.as_deref()
    }
}

impl fmt::Display for ODataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.code(), self.message()) {
            (Some(code), Some(message)) => write!(f, "{code}: {message}"),
            (Some(code), None) => f.write_str(code),
            (None, Some(message)) => f.write_str(message),
            (None, None) => f.write_str("unspecified Graph error"),
        }
    }
}

impl std::error::Error for ODataError {}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{codec, diff};

    fn throttled() -> serde_json::Value {
        json!({
            "error": {
                "code": "TooManyRequests",
                "message": "Too many requests, retry later.",
                "innerError": {
                    "date": "2024-06-01T12:00:00",
                    "request-id": "6b1e3f7a-1111-4c2d-9e8f-aaaaaaaaaaaa",
                    "client-request-id": "6b1e3f7a-2222-4c2d-9e8f-bbbbbbbbbbbb"
                },
                "details": [{"code": "Throttled", "message": "Slow down", "target": "users"}]
            }
        })
    }

    #[test]
    fn test_decode_reads_hyphenated_inner_error_keys() {
        // Arrange
        let input = throttled();

        // Act
        let error: ODataError = codec::decode_value(input).expect("decode");

        // Assert
        assert_eq!(error.code(), Some("TooManyRequests"));
        assert_eq!(error.request_id(), Some("6b1e3f7a-1111-4c2d-9e8f-aaaaaaaaaaaa"));
        let inner = error.error.as_ref().and_then(|main| main.inner_error.as_ref());
        assert_eq!(
            inner.and_then(|inner| inner.client_request_id.as_deref()),
            Some("6b1e3f7a-2222-4c2d-9e8f-bbbbbbbbbbbb")
        );
        assert!(inner.is_some_and(|inner| inner.additional_data.is_empty()));
    }

    #[test]
    fn test_display_joins_code_and_message() {
        // Arrange
        let error: ODataError = codec::decode_value(throttled()).expect("decode");

        // Act
        let rendered = error.to_string();

        // Assert
        assert_eq!(rendered, "TooManyRequests: Too many requests, retry later.");
    }

    #[test]
    fn test_display_without_body_is_generic() {
        // Arrange
        let error = ODataError::default();

        // Act
        let rendered = error.to_string();

        // Assert
        assert_eq!(rendered, "unspecified Graph error");
    }

    #[test]
    fn test_roundtrip_is_lossless() {
        // Arrange
        let input = throttled();

        // Act
        let output = codec::roundtrip_value::<ODataError>(input.clone()).expect("roundtrip");

        // Assert
        assert!(diff::diff(&input, &output).is_empty());
    }

    #[test]
    fn test_usable_as_boxed_error() {
        // Arrange
        let error: ODataError = codec::decode_value(throttled()).expect("decode");

        // Act
        let boxed: Box<dyn std::error::Error> = Box::new(error);

        // Assert
        assert!(boxed.to_string().starts_with("TooManyRequests"));
    }
}
