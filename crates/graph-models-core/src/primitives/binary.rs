use std::{borrow::Cow, fmt, ops::Deref};

use base64::{Engine as _, engine::general_purpose::STANDARD};
use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::Result;

/// Binary content carried as standard base64 text (Graph `Edm.Binary`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Base64Binary(pub Vec<u8>);

impl Base64Binary {
    /// Decodes standard-alphabet, padded base64.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidBase64`](crate::ModelError::InvalidBase64)
    /// if `encoded` is not valid base64.
    pub fn from_base64(encoded: &str) -> Result<Self> {
        Ok(Self(STANDARD.decode(encoded)?))
    }

    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.0)
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }
}

impl Deref for Base64Binary {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for Base64Binary {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for Base64Binary {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl Serialize for Base64Binary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_base64())
    }
}

impl<'de> Deserialize<'de> for Base64Binary {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct Base64Visitor;

        impl de::Visitor<'_> for Base64Visitor {
            type Value = Base64Binary;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a base64 string")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Base64Binary, E> {
                Base64Binary::from_base64(value).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(Base64Visitor)
    }
}

impl JsonSchema for Base64Binary {
    fn inline_schema() -> bool {
        true
    }

    fn schema_name() -> Cow<'static, str> {
        "Base64Binary".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "type": "string",
            "contentEncoding": "base64"
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::ModelError;

    #[test]
    fn test_from_base64_decodes_standard_alphabet() {
        let binary = Base64Binary::from_base64("aGVsbG8=").expect("valid base64");

        assert_eq!(&*binary, b"hello");
        assert_eq!(binary.to_base64(), "aGVsbG8=");
    }

    #[test]
    fn test_from_base64_rejects_invalid_text() {
        let error = Base64Binary::from_base64("not base64!").expect_err("must fail");

        assert!(matches!(error, ModelError::InvalidBase64 { .. }));
    }

    #[test]
    fn test_serde_uses_padded_string_form() {
        // Arrange
        let binary = Base64Binary::from(vec![0xde, 0xad, 0xbe, 0xef]);

        // Act
        let encoded = serde_json::to_value(&binary).expect("encode");
        let decoded: Base64Binary = serde_json::from_value(encoded.clone()).expect("decode");

        // Assert
        assert_eq!(encoded, json!("3q2+7w=="));
        assert_eq!(decoded, binary);
    }

    #[test]
    fn test_deserialize_rejects_non_string() {
        let error = serde_json::from_value::<Base64Binary>(json!([1, 2])).expect_err("must fail");

        assert!(error.to_string().contains("a base64 string"));
    }
}
