use std::{
    borrow::Cow,
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
    time::Duration,
};

use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use super::{MAX_FRACTION_DIGITS, write_fraction};
use crate::ModelError;

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: u64 = 24 * SECONDS_PER_HOUR;
const NANOS_PER_SECOND: u32 = 1_000_000_000;

const YEARS: u8 = 0b0000_0001;
const MONTHS: u8 = 0b0000_0010;
const WEEKS: u8 = 0b0000_0100;
const DAYS: u8 = 0b0000_1000;
const HOURS: u8 = 0b0001_0000;
const MINUTES: u8 = 0b0010_0000;
const SECONDS: u8 = 0b0100_0000;

/// An ISO-8601 duration such as `P14D` or `PT1H30M`.
///
/// Components are kept as written; `PT36H` stays `PT36H` and is not carried
/// into days. Only seconds may carry a fraction, kept to nanosecond
/// precision.
///
/// A parsed duration also remembers how it was spelled: components written
/// as zero (`P0D`, `PT1H0M`), the width of the seconds fraction (`PT1.50S`)
/// and the decimal separator. Display writes that spelling back. Equality
/// and hashing compare component values only.
#[derive(Debug, Clone, Copy, Default)]
pub struct IsoDuration {
    pub negative: bool,
    pub years: u32,
    pub months: u32,
    pub weeks: u32,
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub nanos: u32,
    spelling: Spelling,
}

/// Lexical details of a parsed duration that its values do not capture.
#[derive(Debug, Clone, Copy, Default)]
struct Spelling {
    /// Designators present in the text, as `YEARS`..`SECONDS` bits.
    written: u8,
    fraction_digits: u8,
    comma: bool,
    explicit_plus: bool,
}

impl Spelling {
    const NONE: Self = Self {
        written: 0,
        fraction_digits: 0,
        comma: false,
        explicit_plus: false,
    };

    fn has(self, bit: u8) -> bool {
        self.written & bit != 0
    }
}

impl IsoDuration {
    pub const fn from_days(days: u32) -> Self {
        Self {
            negative: false,
            years: 0,
            months: 0,
            weeks: 0,
            days,
            hours: 0,
            minutes: 0,
            seconds: 0,
            nanos: 0,
            spelling: Spelling::NONE,
        }
    }

    pub const fn from_hours(hours: u32) -> Self {
        Self {
            hours,
            ..Self::from_days(0)
        }
    }

    /// Splits a `std` duration into days, hours, minutes and seconds.
    ///
    /// Returns `None` if the day count does not fit in a `u32`.
    pub fn from_std(duration: Duration) -> Option<Self> {
        let total = duration.as_secs();
        let days = u32::try_from(total / SECONDS_PER_DAY).ok()?;
        let rest = total % SECONDS_PER_DAY;
        // Each remainder is bounded by its unit, so these conversions never fail.
        let hours = u32::try_from(rest / SECONDS_PER_HOUR).ok()?;
        let minutes = u32::try_from(rest % SECONDS_PER_HOUR / SECONDS_PER_MINUTE).ok()?;
        let seconds = u32::try_from(rest % SECONDS_PER_MINUTE).ok()?;

        Some(Self {
            days,
            hours,
            minutes,
            seconds,
            nanos: duration.subsec_nanos(),
            ..Self::default()
        })
    }

    /// Converts to a `std` duration.
    ///
    /// Returns `None` for negative durations and for durations with year or
    /// month components, whose length depends on the calendar.
    pub fn to_std(&self) -> Option<Duration> {
        if self.negative || self.years > 0 || self.months > 0 {
            return None;
        }

        let days = u64::from(self.weeks) * 7 + u64::from(self.days);
        let seconds = days * SECONDS_PER_DAY
            + u64::from(self.hours) * SECONDS_PER_HOUR
            + u64::from(self.minutes) * SECONDS_PER_MINUTE
            + u64::from(self.seconds);
        Some(Duration::new(seconds, self.nanos))
    }

    pub fn is_zero(&self) -> bool {
        !self.has_date_part() && !self.has_time_part()
    }

    fn has_date_part(&self) -> bool {
        self.years > 0 || self.months > 0 || self.weeks > 0 || self.days > 0
    }

    fn has_time_part(&self) -> bool {
        self.hours > 0 || self.minutes > 0 || self.seconds > 0 || self.nanos > 0
    }

    fn values(&self) -> (bool, [u32; 8]) {
        (
            self.negative,
            [
                self.years,
                self.months,
                self.weeks,
                self.days,
                self.hours,
                self.minutes,
                self.seconds,
                self.nanos,
            ],
        )
    }
}

impl PartialEq for IsoDuration {
    fn eq(&self, other: &Self) -> bool {
        self.values() == other.values()
    }
}

impl Eq for IsoDuration {}

impl Hash for IsoDuration {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.values().hash(state);
    }
}

impl FromStr for IsoDuration {
    type Err = ModelError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &'static str| ModelError::InvalidDuration {
            value: input.to_owned(),
            reason,
        };

        let (negative, explicit_plus, rest) = match input.strip_prefix('-') {
            Some(rest) => (true, false, rest),
            None => match input.strip_prefix('+') {
                Some(rest) => (false, true, rest),
                None => (false, false, input),
            },
        };
        let rest = rest
            .strip_prefix('P')
            .ok_or_else(|| invalid("missing leading 'P'"))?;
        let (date, time) = match rest.split_once('T') {
            Some((date, time)) => (date, Some(time)),
            None => (rest, None),
        };

        let mut duration = Self {
            negative,
            ..Self::default()
        };
        duration.spelling.explicit_plus = explicit_plus;
        let mut any_component = false;

        let mut rank = 0;
        for component in components(date).map_err(invalid)? {
            let component_rank = match component.designator {
                'Y' => 1,
                'M' => 2,
                'W' => 3,
                'D' => 4,
                _ => return Err(invalid("unknown date designator")),
            };
            if component_rank <= rank {
                return Err(invalid("date designators out of order or repeated"));
            }
            if component.nanos.is_some() {
                return Err(invalid("only seconds may have a fraction"));
            }
            rank = component_rank;
            any_component = true;

            match component.designator {
                'Y' => duration.years = component.whole,
                'M' => duration.months = component.whole,
                'W' => duration.weeks = component.whole,
                _ => duration.days = component.whole,
            }
            duration.spelling.written |= [YEARS, MONTHS, WEEKS, DAYS][component_rank - 1];
        }

        if let Some(time) = time {
            if time.is_empty() {
                return Err(invalid("'T' must be followed by a time component"));
            }

            let mut rank = 0;
            for component in components(time).map_err(invalid)? {
                let component_rank = match component.designator {
                    'H' => 1,
                    'M' => 2,
                    'S' => 3,
                    _ => return Err(invalid("unknown time designator")),
                };
                if component_rank <= rank {
                    return Err(invalid("time designators out of order or repeated"));
                }
                if component.nanos.is_some() && component.designator != 'S' {
                    return Err(invalid("only seconds may have a fraction"));
                }
                rank = component_rank;
                any_component = true;

                match component.designator {
                    'H' => duration.hours = component.whole,
                    'M' => duration.minutes = component.whole,
                    _ => {
                        duration.seconds = component.whole;
                        duration.nanos = component.nanos.unwrap_or(0);
                        duration.spelling.fraction_digits = component.fraction_digits;
                        duration.spelling.comma = component.comma;
                    }
                }
                duration.spelling.written |= [HOURS, MINUTES, SECONDS][component_rank - 1];
            }
        }

        if !any_component {
            return Err(invalid("at least one component is required"));
        }
        Ok(duration)
    }
}

/// One `<number><designator>` run, e.g. `12H` or `1.5S`.
struct Component {
    whole: u32,
    nanos: Option<u32>,
    fraction_digits: u8,
    comma: bool,
    designator: char,
}

fn components(part: &str) -> Result<Vec<Component>, &'static str> {
    const MISSING_DESIGNATOR: &str = "component is missing its designator";

    let mut out = Vec::new();
    let mut rest = part;

    while !rest.is_empty() {
        let digits = rest
            .find(|c: char| !c.is_ascii_digit())
            .ok_or(MISSING_DESIGNATOR)?;
        if digits == 0 {
            return Err("expected digits before designator");
        }
        let whole = rest[..digits]
            .parse::<u32>()
            .map_err(|_| "component value is too large")?;

        let mut cursor = digits;
        let mut nanos = None;
        let mut written_digits = 0;
        let comma = rest[cursor..].starts_with(',');
        if rest[cursor..].starts_with(['.', ',']) {
            let fraction = &rest[cursor + 1..];
            let fraction_digits = fraction
                .find(|c: char| !c.is_ascii_digit())
                .ok_or(MISSING_DESIGNATOR)?;
            if fraction_digits == 0 {
                return Err("expected digits after decimal separator");
            }
            nanos = Some(fraction_to_nanos(&fraction[..fraction_digits]));
            written_digits = u8::try_from(fraction_digits)
                .map_or(MAX_FRACTION_DIGITS, |digits| digits.min(MAX_FRACTION_DIGITS));
            cursor += 1 + fraction_digits;
        }

        let designator = rest[cursor..].chars().next().ok_or(MISSING_DESIGNATOR)?;
        out.push(Component {
            whole,
            nanos,
            fraction_digits: written_digits,
            comma,
            designator,
        });
        rest = &rest[cursor + designator.len_utf8()..];
    }

    Ok(out)
}

/// Reads up to nine fractional digits as nanoseconds; further digits are
/// truncated.
fn fraction_to_nanos(digits: &str) -> u32 {
    let mut value = 0u32;
    let mut scale = NANOS_PER_SECOND;
    for digit in digits.bytes().take(9) {
        scale /= 10;
        value += u32::from(digit - b'0') * scale;
    }
    value
}

impl fmt::Display for IsoDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let spelling = self.spelling;
        if self.negative {
            f.write_str("-")?;
        } else if spelling.explicit_plus {
            f.write_str("+")?;
        }
        f.write_str("P")?;

        let mut wrote_date = false;
        for (value, designator, bit) in [
            (self.years, 'Y', YEARS),
            (self.months, 'M', MONTHS),
            (self.weeks, 'W', WEEKS),
            (self.days, 'D', DAYS),
        ] {
            if value > 0 || spelling.has(bit) {
                write!(f, "{value}{designator}")?;
                wrote_date = true;
            }
        }

        let hours = self.hours > 0 || spelling.has(HOURS);
        let minutes = self.minutes > 0 || spelling.has(MINUTES);
        let seconds = self.seconds > 0 || self.nanos > 0 || spelling.has(SECONDS);
        if !(hours || minutes || seconds) {
            if !wrote_date {
                f.write_str("T0S")?;
            }
            return Ok(());
        }

        f.write_str("T")?;
        if hours {
            write!(f, "{}H", self.hours)?;
        }
        if minutes {
            write!(f, "{}M", self.minutes)?;
        }
        if seconds {
            write!(f, "{}", self.seconds)?;
            let separator = if spelling.comma { ',' } else { '.' };
            write_fraction(f, separator, self.nanos, spelling.fraction_digits)?;
            f.write_str("S")?;
        }
        Ok(())
    }
}

impl Serialize for IsoDuration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for IsoDuration {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DurationVisitor;

        impl de::Visitor<'_> for DurationVisitor {
            type Value = IsoDuration;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an ISO-8601 duration string")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<IsoDuration, E> {
                value.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(DurationVisitor)
    }
}

impl JsonSchema for IsoDuration {
    fn inline_schema() -> bool {
        true
    }

    fn schema_name() -> Cow<'static, str> {
        "IsoDuration".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "type": "string",
            "format": "duration"
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn parse(input: &str) -> IsoDuration {
        input.parse().expect("duration should parse")
    }

    fn reason(input: &str) -> &'static str {
        match input.parse::<IsoDuration>() {
            Err(ModelError::InvalidDuration { reason, .. }) => reason,
            other => panic!("expected InvalidDuration for {input}, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_date_and_time_components() {
        // Act
        let duration = parse("P1Y2M3W4DT5H6M7S");

        // Assert
        assert_eq!(
            duration,
            IsoDuration {
                negative: false,
                years: 1,
                months: 2,
                weeks: 3,
                days: 4,
                hours: 5,
                minutes: 6,
                seconds: 7,
                nanos: 0,
                spelling: Spelling::NONE,
            }
        );
    }

    #[test]
    fn test_parse_fractional_seconds_with_either_separator() {
        assert_eq!(parse("PT1.5S").nanos, 500_000_000);
        assert_eq!(parse("PT0,25S").nanos, 250_000_000);
        assert_eq!(parse("PT2.0000000011S").nanos, 1);
    }

    #[test]
    fn test_parse_negative_duration() {
        let duration = parse("-P2D");

        assert!(duration.negative);
        assert_eq!(duration.days, 2);
        assert_eq!(duration.to_std(), None);
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        assert_eq!(reason("14D"), "missing leading 'P'");
        assert_eq!(reason("P"), "at least one component is required");
        assert_eq!(reason("P1DT"), "'T' must be followed by a time component");
        assert_eq!(reason("P1D2Y"), "date designators out of order or repeated");
        assert_eq!(reason("PT1M1M"), "time designators out of order or repeated");
        assert_eq!(reason("P1X"), "unknown date designator");
        assert_eq!(reason("PT1D"), "unknown time designator");
        assert_eq!(reason("P1.5D"), "only seconds may have a fraction");
        assert_eq!(reason("PT1.5H"), "only seconds may have a fraction");
        assert_eq!(reason("P12"), "component is missing its designator");
        assert_eq!(reason("PD"), "expected digits before designator");
        assert_eq!(reason("PT1.S"), "expected digits after decimal separator");
        assert_eq!(reason("P99999999999D"), "component value is too large");
    }

    #[test]
    fn test_display_keeps_components_as_written() {
        for literal in ["P14D", "PT1H30M", "P1DT12H", "PT36H", "P2W", "PT1.5S", "-PT10M"] {
            assert_eq!(parse(literal).to_string(), literal);
        }
    }

    #[test]
    fn test_display_zero_duration() {
        assert_eq!(IsoDuration::default().to_string(), "PT0S");
        assert!(parse("PT0S").is_zero());
        assert!(parse("P0D").is_zero());
        assert_eq!(parse("P0D"), parse("PT0S"));
    }

    #[test]
    fn test_display_keeps_explicit_zeros_and_fraction_width() {
        for literal in ["P0D", "PT1H0M", "PT1.50S", "P1DT0H", "PT0,250S", "+P1D", "PT0.0S", "P0Y0M"] {
            assert_eq!(parse(literal).to_string(), literal);
        }
    }

    #[test]
    fn test_serde_roundtrip_of_non_canonical_spellings_is_lossless() {
        // Arrange
        let input = json!(["P0D", "PT1H0M", "PT1.50S", "P1DT0H"]);

        // Act
        let decoded: Vec<IsoDuration> = serde_json::from_value(input.clone()).expect("decode");
        let output = serde_json::to_value(&decoded).expect("encode");

        // Assert
        assert!(crate::diff::diff(&input, &output).is_empty(), "{output}");
        assert_eq!(decoded[2], parse("PT1.5S"));
    }

    #[test]
    fn test_edited_values_still_print() {
        // Arrange
        let mut duration = parse("PT1H0M");

        // Act
        duration.hours = 0;
        duration.seconds = 30;

        // Assert
        assert_eq!(duration.to_string(), "PT0H0M30S");
    }

    #[test]
    fn test_std_conversion_both_ways() {
        // Arrange
        let std_duration = Duration::new(SECONDS_PER_DAY + 2 * SECONDS_PER_HOUR + 3, 400);

        // Act
        let duration = IsoDuration::from_std(std_duration).expect("fits in u32 days");

        // Assert
        assert_eq!(duration.to_string(), "P1DT2H3.0000004S");
        assert_eq!(duration.to_std(), Some(std_duration));
        assert_eq!(parse("P1W").to_std(), Some(Duration::from_secs(7 * SECONDS_PER_DAY)));
        assert_eq!(parse("P1M").to_std(), None);
    }

    #[test]
    fn test_serde_uses_string_form() {
        // Act
        let encoded = serde_json::to_value(IsoDuration::from_days(14)).expect("encode");
        let decoded: IsoDuration = serde_json::from_value(json!("PT2H")).expect("decode");
        let error = serde_json::from_value::<IsoDuration>(json!("two hours"))
            .expect_err("free text must fail");

        // Assert
        assert_eq!(encoded, json!("P14D"));
        assert_eq!(decoded, IsoDuration::from_hours(2));
        assert!(error.to_string().contains("invalid ISO-8601 duration"));
    }
}
