//! Support for discriminated families.
//!
//! A family is an enum over a polymorphic Graph base type and its concrete
//! subtypes. `define_family!` generates the enum and a decode that reads
//! `@odata.type`, matches it against a fixed table, and falls back to the base
//! variant. The helpers here are the non-generic parts of that decode.

use serde_json::Value;
use tracing::{debug, trace};

use crate::{ModelError, ODATA_TYPE_KEY, Result, error::json_kind};

/// Reads the discriminator of a JSON object.
///
/// Returns `Ok(None)` when the key is absent or `null`.
///
/// # Errors
///
/// - [`ModelError::NotAnObject`] if `value` is not a JSON object
/// - [`ModelError::InvalidDiscriminator`] if the tag is not a string
pub fn discriminator_of<'v>(value: &'v Value, family: &str) -> Result<Option<&'v str>> {
    let Value::Object(map) = value else {
        return Err(ModelError::NotAnObject {
            type_name: family.to_owned(),
            found: json_kind(value),
        });
    };

    match map.get(ODATA_TYPE_KEY) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(tag)) => Ok(Some(tag.as_str())),
        Some(other) => Err(ModelError::InvalidDiscriminator {
            type_name: family.to_owned(),
            found: json_kind(other),
        }),
    }
}

/// Records that a family decode is using its base variant.
pub fn note_fallback(family: &str, tag: Option<&str>, base_tag: Option<&str>) {
    match tag {
        None => trace!(family, "no discriminator, decoding base variant"),
        Some(tag) if Some(tag) == base_tag => trace!(family, tag, "base discriminator"),
        Some(tag) => debug!(family, tag, "unrecognized discriminator, decoding base variant"),
    }
}

/// Compile-time string comparison used to check that a family's tag table
/// agrees with each variant's declared discriminator.
pub const fn tag_matches(declared: Option<&str>, tag: &str) -> bool {
    let Some(declared) = declared else {
        return false;
    };
    let (left, right) = (declared.as_bytes(), tag.as_bytes());
    if left.len() != right.len() {
        return false;
    }
    let mut index = 0;
    while index < left.len() {
        if left[index] != right[index] {
            return false;
        }
        index += 1;
    }
    true
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_discriminator_of_reads_string_tag() {
        // Arrange
        let value = json!({"@odata.type": "#microsoft.graph.singleUser", "userId": "u1"});

        // Act
        let tag = discriminator_of(&value, "SubjectSet").expect("tag should be readable");

        // Assert
        assert_eq!(tag, Some("#microsoft.graph.singleUser"));
    }

    #[test]
    fn test_discriminator_of_absent_or_null_is_none() {
        assert_eq!(discriminator_of(&json!({}), "SubjectSet").ok(), Some(None));
        assert_eq!(
            discriminator_of(&json!({"@odata.type": null}), "SubjectSet").ok(),
            Some(None)
        );
    }

    #[test]
    fn test_discriminator_of_rejects_non_object() {
        // Act
        let error = discriminator_of(&json!([1, 2]), "SubjectSet").expect_err("array must fail");

        // Assert
        assert_eq!(
            error.to_string(),
            "expected a JSON object for SubjectSet, found an array"
        );
    }

    #[test]
    fn test_discriminator_of_rejects_non_string_tag() {
        let error = discriminator_of(&json!({"@odata.type": 7}), "SubjectSet")
            .expect_err("numeric tag must fail");

        assert!(matches!(
            error,
            ModelError::InvalidDiscriminator { found: "a number", .. }
        ));
    }

    #[test]
    fn test_tag_matches_compares_exactly() {
        assert!(tag_matches(Some("#microsoft.graph.singleUser"), "#microsoft.graph.singleUser"));
        assert!(!tag_matches(Some("#microsoft.graph.singleUser"), "#microsoft.graph.singleuser"));
        assert!(!tag_matches(Some("#microsoft.graph.a"), "#microsoft.graph.ab"));
        assert!(!tag_matches(None, "#microsoft.graph.singleUser"));
    }

    #[test]
    fn test_tag_matches_is_usable_in_const_context() {
        const MATCHES: bool = tag_matches(Some("#x"), "#x");

        assert!(MATCHES);
    }
}
