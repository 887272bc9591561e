use std::{
    borrow::Cow,
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

use chrono::{NaiveTime, Timelike};
use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use super::{fraction_digits_at, write_fraction};
use crate::ModelError;

/// Byte offset of the fraction in `HH:MM:SS.fffffff`.
const FRACTION_START: usize = 8;

/// A wall-clock time with no date or offset (Graph `Edm.TimeOfDay`), written
/// `HH:MM:SS` with an optional fraction such as `02:00:00.0000000`.
///
/// The fraction keeps the number of digits it was read with. Equality,
/// ordering and hashing ignore that width.
#[derive(Debug, Clone, Copy)]
pub struct TimeOnly {
    value: NaiveTime,
    fraction_digits: u8,
}

impl TimeOnly {
    /// Returns `None` for an hour, minute or second out of range.
    pub fn from_hms(hour: u32, minute: u32, second: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, second).map(Self::from)
    }

    pub fn as_naive_time(&self) -> NaiveTime {
        self.value
    }

    pub fn hour(&self) -> u32 {
        self.value.hour()
    }

    pub fn minute(&self) -> u32 {
        self.value.minute()
    }

    pub fn second(&self) -> u32 {
        self.value.second()
    }

    /// Pads the fraction to at least `digits` digits (at most nine).
    #[must_use]
    pub fn with_fraction_digits(mut self, digits: u8) -> Self {
        self.fraction_digits = digits.min(9);
        self
    }
}

impl From<NaiveTime> for TimeOnly {
    fn from(value: NaiveTime) -> Self {
        Self {
            value,
            fraction_digits: 0,
        }
    }
}

impl FromStr for TimeOnly {
    type Err = ModelError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let value = NaiveTime::parse_from_str(input, "%H:%M:%S%.f").map_err(|source| {
            ModelError::InvalidTimeOnly {
                value: input.to_owned(),
                source,
            }
        })?;

        Ok(Self {
            value,
            fraction_digits: fraction_digits_at(input, FRACTION_START),
        })
    }
}

impl fmt::Display for TimeOnly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value.format("%H:%M:%S"))?;
        write_fraction(f, '.', self.value.nanosecond(), self.fraction_digits)
    }
}

impl PartialEq for TimeOnly {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for TimeOnly {}

impl PartialOrd for TimeOnly {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TimeOnly {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl Hash for TimeOnly {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl Serialize for TimeOnly {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOnly {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TimeVisitor;

        impl de::Visitor<'_> for TimeVisitor {
            type Value = TimeOnly;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a time of day such as 02:00:00")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<TimeOnly, E> {
                value.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(TimeVisitor)
    }
}

impl JsonSchema for TimeOnly {
    fn inline_schema() -> bool {
        true
    }

    fn schema_name() -> Cow<'static, str> {
        "TimeOnly".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "type": "string",
            "format": "time",
            "pattern": "^[0-9]{2}:[0-9]{2}:[0-9]{2}(\\.[0-9]+)?$"
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_display_keeps_fraction_width() {
        for literal in ["02:00:00.0000000", "02:00:00", "23:59:59.5", "13:45:10.1234567"] {
            let time: TimeOnly = literal.parse().expect("time should parse");
            assert_eq!(time.to_string(), literal);
        }
    }

    #[test]
    fn test_accessors_and_construction() {
        // Act
        let time = TimeOnly::from_hms(2, 30, 5).expect("valid time");

        // Assert
        assert_eq!((time.hour(), time.minute(), time.second()), (2, 30, 5));
        assert_eq!(time.to_string(), "02:30:05");
        assert_eq!(time.with_fraction_digits(3).to_string(), "02:30:05.000");
        assert_eq!(TimeOnly::from_hms(24, 0, 0), None);
        assert_eq!(time, time.with_fraction_digits(7));
    }

    #[test]
    fn test_serde_rejects_malformed_time() {
        // Act
        let decoded: TimeOnly = serde_json::from_value(json!("02:00:00.0000000")).expect("decode");
        let error = serde_json::from_value::<TimeOnly>(json!("2am")).expect_err("must fail");

        // Assert
        assert_eq!(serde_json::to_value(decoded).expect("encode"), json!("02:00:00.0000000"));
        assert!(error.to_string().contains("invalid time of day `2am`"));
    }
}
