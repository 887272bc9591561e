use std::{
    borrow::Cow,
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

use chrono::{DateTime, FixedOffset, Timelike, Utc};
use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use super::{fraction_digits_at, write_fraction};
use crate::ModelError;

/// Byte offset of the fraction in `YYYY-MM-DDTHH:MM:SS.fff`.
const FRACTION_START: usize = 19;

/// An RFC 3339 timestamp (Graph `Edm.DateTimeOffset`).
///
/// The offset is kept as written, and so are the number of fractional
/// second digits and whether UTC was spelled `Z`. A decoded value therefore
/// prints back unchanged: `2017-01-01T00:00:35.1329464-08:00` stays in
/// `-08:00` with seven digits. Values built in code print the shortest
/// fraction that keeps every non-zero digit, and UTC prints as `Z`.
///
/// Equality, ordering and hashing look at the instant only.
#[derive(Debug, Clone, Copy)]
pub struct DateTimeOffset {
    value: DateTime<FixedOffset>,
    fraction_digits: u8,
    utc_designator: bool,
}

impl DateTimeOffset {
    /// Current time in UTC.
    pub fn now() -> Self {
        Utc::now().into()
    }

    pub fn as_fixed_offset(&self) -> DateTime<FixedOffset> {
        self.value
    }

    pub fn to_utc(&self) -> DateTime<Utc> {
        self.value.with_timezone(&Utc)
    }

    pub fn offset(&self) -> FixedOffset {
        *self.value.offset()
    }

    /// Number of fractional second digits printed at minimum.
    pub fn fraction_digits(&self) -> u8 {
        self.fraction_digits
    }

    /// Pads the fraction to at least `digits` digits (at most nine).
    #[must_use]
    pub fn with_fraction_digits(mut self, digits: u8) -> Self {
        self.fraction_digits = digits.min(9);
        self
    }
}

impl From<DateTime<Utc>> for DateTimeOffset {
    fn from(value: DateTime<Utc>) -> Self {
        Self {
            value: value.fixed_offset(),
            fraction_digits: 0,
            utc_designator: true,
        }
    }
}

impl From<DateTime<FixedOffset>> for DateTimeOffset {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Self {
            utc_designator: value.offset().local_minus_utc() == 0,
            value,
            fraction_digits: 0,
        }
    }
}

impl From<DateTimeOffset> for DateTime<Utc> {
    fn from(value: DateTimeOffset) -> Self {
        value.to_utc()
    }
}

impl FromStr for DateTimeOffset {
    type Err = ModelError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let value =
            DateTime::parse_from_rfc3339(input).map_err(|source| ModelError::InvalidDateTime {
                value: input.to_owned(),
                source,
            })?;

        Ok(Self {
            value,
            fraction_digits: fraction_digits_at(input, FRACTION_START),
            utc_designator: input.ends_with(['Z', 'z']),
        })
    }
}

impl fmt::Display for DateTimeOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value.format("%Y-%m-%dT%H:%M:%S"))?;
        write_fraction(f, '.', self.value.nanosecond(), self.fraction_digits)?;
        if self.utc_designator && self.value.offset().local_minus_utc() == 0 {
            f.write_str("Z")
        } else {
            write!(f, "{}", self.value.format("%:z"))
        }
    }
}

impl PartialEq for DateTimeOffset {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for DateTimeOffset {}

impl PartialOrd for DateTimeOffset {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DateTimeOffset {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl Hash for DateTimeOffset {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl Serialize for DateTimeOffset {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DateTimeOffset {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DateTimeVisitor;

        impl de::Visitor<'_> for DateTimeVisitor {
            type Value = DateTimeOffset;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an RFC 3339 timestamp")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<DateTimeOffset, E> {
                value.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(DateTimeVisitor)
    }
}

impl JsonSchema for DateTimeOffset {
    fn inline_schema() -> bool {
        true
    }

    fn schema_name() -> Cow<'static, str> {
        "DateTimeOffset".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "type": "string",
            "format": "date-time"
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use serde_json::json;

    use super::*;
    use crate::diff;

    fn parse(input: &str) -> DateTimeOffset {
        input.parse().expect("timestamp should parse")
    }

    #[test]
    fn test_display_keeps_offset_and_fraction_as_written() {
        for literal in [
            "2017-01-01T00:00:35.1329464-08:00",
            "2019-09-17T21:17:10.2914398Z",
            "2024-05-01T08:30:00Z",
            "2024-05-01T08:30:00+00:00",
            "2024-05-01T08:30:00.000Z",
            "2024-05-01T08:30:00.5+05:30",
            "2024-05-01T08:30:00.123456789Z",
        ] {
            assert_eq!(parse(literal).to_string(), literal);
        }
    }

    #[test]
    fn test_serde_roundtrip_is_lossless() {
        // Arrange
        let input = json!({
            "createdDateTime": "2017-01-01T00:00:35.1329464-08:00",
            "lastModifiedDateTime": "2019-09-17T21:17:10.2914398Z"
        });

        // Act
        let decoded: std::collections::BTreeMap<String, DateTimeOffset> =
            serde_json::from_value(input.clone()).expect("decode");
        let output = serde_json::to_value(&decoded).expect("encode");

        // Assert
        assert!(diff::diff(&input, &output).is_empty(), "{output}");
    }

    #[test]
    fn test_equality_compares_instants() {
        // Arrange
        let pacific = parse("2017-01-01T00:00:35.1329464-08:00");
        let utc = parse("2017-01-01T08:00:35.13294640Z");

        // Assert
        assert_eq!(pacific, utc);
        assert_ne!(pacific.to_string(), utc.to_string());
        assert_eq!(pacific.offset().local_minus_utc(), -8 * 3600);
        assert!(parse("2024-01-01T00:00:00Z") < parse("2024-01-01T00:00:01+00:00"));
    }

    #[test]
    fn test_values_built_in_code_print_shortest_form() {
        // Arrange
        let instant = Utc
            .with_ymd_and_hms(2024, 5, 1, 8, 30, 0)
            .single()
            .expect("valid date");
        let with_millis = instant + chrono::Duration::milliseconds(250);

        // Act & Assert
        assert_eq!(DateTimeOffset::from(instant).to_string(), "2024-05-01T08:30:00Z");
        assert_eq!(DateTimeOffset::from(with_millis).to_string(), "2024-05-01T08:30:00.25Z");
        assert_eq!(
            DateTimeOffset::from(instant).with_fraction_digits(7).to_string(),
            "2024-05-01T08:30:00.0000000Z"
        );
        assert_eq!(DateTime::<Utc>::from(DateTimeOffset::from(instant)), instant);
    }

    #[test]
    fn test_rejects_text_without_offset() {
        // Act
        let error = "2024-05-01T08:30:00".parse::<DateTimeOffset>().expect_err("no offset");
        let serde_error = serde_json::from_value::<DateTimeOffset>(json!("yesterday"))
            .expect_err("free text must fail");

        // Assert
        assert!(matches!(error, ModelError::InvalidDateTime { ref value, .. } if value == "2024-05-01T08:30:00"));
        assert!(serde_error.to_string().contains("invalid timestamp `yesterday`"));
    }
}
