use std::error::Error as StdError;

use serde_json::Value;

/// Result alias used across the model crates.
pub type Result<T, E = ModelError> = std::result::Result<T, E>;

/// Errors produced while decoding, encoding or paging Graph models.
///
/// Every failure is returned to the immediate caller. A decode stops at the
/// first malformed property; there is no partial recovery.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ModelError {
    /// A JSON document did not match the shape of the requested type.
    #[error("failed to decode {type_name}: {source}")]
    Decode {
        type_name: String,
        #[source]
        source: serde_json::Error,
    },

    /// A value could not be written as JSON.
    #[error("failed to encode {type_name}: {source}")]
    Encode {
        type_name: String,
        #[source]
        source: serde_json::Error,
    },

    /// A family decode was handed something other than a JSON object.
    #[error("expected a JSON object for {type_name}, found {found}")]
    NotAnObject {
        type_name: String,
        found: &'static str,
    },

    /// `@odata.type` was present but not a string.
    #[error("@odata.type on {type_name} must be a string, found {found}")]
    InvalidDiscriminator {
        type_name: String,
        found: &'static str,
    },

    /// An ISO-8601 duration literal could not be parsed.
    #[error("invalid ISO-8601 duration `{value}`: {reason}")]
    InvalidDuration { value: String, reason: &'static str },

    /// A `DateTimeOffset` value was not an RFC 3339 timestamp.
    #[error("invalid timestamp `{value}`: {source}")]
    InvalidDateTime {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// A `TimeOfDay` value was not `HH:MM:SS` with an optional fraction.
    #[error("invalid time of day `{value}`: {source}")]
    InvalidTimeOnly {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// A binary property did not hold valid base64.
    #[error("invalid base64 payload: {source}")]
    InvalidBase64 {
        #[from]
        source: base64::DecodeError,
    },

    /// No registered model matches the requested name or discriminator.
    #[error("unknown model `{0}`")]
    UnknownModel(String),

    /// A page source failed to produce the page behind a next link.
    #[error("failed to fetch page `{link}`: {source}")]
    PageFetch {
        link: String,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    /// `@odata.nextLink` named a page that was already fetched.
    #[error("next link `{link}` was already fetched")]
    PagingLoop { link: String },
}

impl ModelError {
    /// Wraps a transport or source failure for the page at `link`.
    pub fn page_fetch(
        link: impl Into<String>,
        source: impl Into<Box<dyn StdError + Send + Sync>>,
    ) -> Self {
        Self::PageFetch {
            link: link.into(),
            source: source.into(),
        }
    }
}

/// Name of a JSON value's kind, for error messages.
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
