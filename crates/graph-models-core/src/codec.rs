//! Decode and encode entry points.
//!
//! These wrap `serde_json` so that every failure names the type being
//! processed, and so tooling can drive any registered model through the same
//! generic functions.

use schemars::JsonSchema;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::trace;

use crate::{Model, ModelError, ODATA_TYPE_KEY, Result};

/// What a decode resolved to, without the values themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelSummary {
    /// Concrete type the document decoded into.
    pub model: &'static str,
    /// Discriminator carried by the decoded value.
    pub odata_type: Option<String>,
    /// Declared properties present after decoding, in wire order.
    pub fields: Vec<String>,
    /// Keys captured in the additional-data map.
    pub additional_keys: Vec<String>,
}

/// Decodes `T` from a JSON string.
///
/// # Errors
///
/// Returns [`ModelError::Decode`] if the text is not JSON or any declared
/// property holds a malformed value.
pub fn decode<T: DeserializeOwned>(json: &str) -> Result<T> {
    trace!(type_name = %short_type_name::<T>(), "decoding from text");
    serde_json::from_str(json).map_err(decode_error::<T>)
}

/// Decodes `T` from raw JSON bytes.
///
/// # Errors
///
/// Same as [`decode`].
pub fn decode_slice<T: DeserializeOwned>(json: &[u8]) -> Result<T> {
    trace!(type_name = %short_type_name::<T>(), bytes = json.len(), "decoding from bytes");
    serde_json::from_slice(json).map_err(decode_error::<T>)
}

/// Decodes `T` from an already parsed JSON tree.
///
/// # Errors
///
/// Same as [`decode`].
pub fn decode_value<T: DeserializeOwned>(value: Value) -> Result<T> {
    serde_json::from_value(value).map_err(decode_error::<T>)
}

/// Encodes a value as compact JSON.
///
/// # Errors
///
/// Returns [`ModelError::Encode`] if serialization fails.
pub fn encode<T: Serialize>(model: &T) -> Result<String> {
    trace!(type_name = %short_type_name::<T>(), "encoding to text");
    serde_json::to_string(model).map_err(encode_error::<T>)
}

/// Encodes a value as indented JSON.
///
/// # Errors
///
/// Returns [`ModelError::Encode`] if serialization fails.
pub fn encode_pretty<T: Serialize>(model: &T) -> Result<String> {
    serde_json::to_string_pretty(model).map_err(encode_error::<T>)
}

/// Encodes a value into a JSON tree.
///
/// # Errors
///
/// Returns [`ModelError::Encode`] if serialization fails.
pub fn encode_value<T: Serialize>(model: &T) -> Result<Value> {
    serde_json::to_value(model).map_err(encode_error::<T>)
}

/// Decodes a document as `T` and encodes it straight back.
///
/// # Errors
///
/// Propagates the first decode or encode failure.
pub fn roundtrip_value<T: Model>(value: Value) -> Result<Value> {
    let model: T = decode_value(value)?;
    encode_value(&model)
}

/// Decodes a document as `T` and reports what it resolved to.
///
/// # Errors
///
/// Propagates the first decode or encode failure.
pub fn summarize<T: Model>(value: Value) -> Result<ModelSummary> {
    let model: T = decode_value(value)?;
    let additional = model.additional_data();

    let fields = match encode_value(&model)? {
        Value::Object(map) => map
            .keys()
            .filter(|key| key.as_str() != ODATA_TYPE_KEY && !additional.contains_key(key.as_str()))
            .cloned()
            .collect(),
        _ => Vec::new(),
    };

    Ok(ModelSummary {
        model: model.model_name(),
        odata_type: model.odata_type().map(str::to_owned),
        fields,
        additional_keys: additional.keys().cloned().collect(),
    })
}

/// Produces the JSON Schema for `T` as a JSON tree.
///
/// # Errors
///
/// Returns [`ModelError::Encode`] if the schema cannot be serialized.
pub fn schema_value<T: JsonSchema>() -> Result<Value> {
    let schema = schemars::schema_for!(T);
    serde_json::to_value(&schema).map_err(encode_error::<T>)
}

fn decode_error<T>(source: serde_json::Error) -> ModelError {
    ModelError::Decode {
        type_name: short_type_name::<T>(),
        source,
    }
}

fn encode_error<T>(source: serde_json::Error) -> ModelError {
    ModelError::Encode {
        type_name: short_type_name::<T>(),
        source,
    }
}

/// `std::any::type_name` with every module path stripped, so
/// `alloc::vec::Vec<graph_models::SingleUser>` becomes `Vec<SingleUser>`.
pub(crate) fn short_type_name<T: ?Sized>() -> String {
    let full = std::any::type_name::<T>();
    let mut out = String::with_capacity(full.len());
    let mut segment = String::new();
    let mut chars = full.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            ':' if chars.peek() == Some(&':') => {
                chars.next();
                segment.clear();
            }
            '<' | '>' | ',' | ' ' | '&' | '[' | ']' | '(' | ')' | ';' => {
                out.push_str(&segment);
                segment.clear();
                out.push(c);
            }
            _ => segment.push(c),
        }
    }
    out.push_str(&segment);
    out
}
