//! Wire primitives without a native serde representation.
//!
//! Identifiers typed as `Guid` use [`uuid::Uuid`] directly. The types here
//! cover the rest, and each one prints back the exact text it was read from
//! so a decoded payload re-encodes unchanged.

use std::fmt;

mod binary;
mod date_time;
mod duration;
mod time_only;

pub use binary::Base64Binary;
pub use chrono::{DateTime, FixedOffset, NaiveTime, Utc};
pub use date_time::DateTimeOffset;
pub use duration::IsoDuration;
pub use time_only::TimeOnly;
pub use uuid::Uuid;

const NANOS_PER_SECOND: u32 = 1_000_000_000;
const MAX_FRACTION_DIGITS: u8 = 9;

/// Counts the digits of a fraction written right after a `.` or `,` at
/// `start`, capped at nanosecond precision.
fn fraction_digits_at(input: &str, start: usize) -> u8 {
    let Some(rest) = input.get(start..) else {
        return 0;
    };
    if !rest.starts_with(['.', ',']) {
        return 0;
    }
    let digits = rest[1..].bytes().take_while(u8::is_ascii_digit).count();
    u8::try_from(digits).map_or(MAX_FRACTION_DIGITS, |digits| digits.min(MAX_FRACTION_DIGITS))
}

/// Writes `nanos` as a fraction of at least `min_digits` digits, adding
/// digits only where they are non-zero. Nothing is written for a zero
/// fraction with no recorded width.
fn write_fraction(
    f: &mut fmt::Formatter<'_>,
    separator: char,
    nanos: u32,
    min_digits: u8,
) -> fmt::Result {
    let nanos = nanos % NANOS_PER_SECOND;
    let digits = usize::from(min_digits.min(MAX_FRACTION_DIGITS)).max(significant_digits(nanos));
    if digits == 0 {
        return Ok(());
    }
    let padded = format!("{nanos:09}");
    write!(f, "{separator}{}", &padded[..digits])
}

fn significant_digits(nanos: u32) -> usize {
    if nanos == 0 {
        return 0;
    }
    let padded = format!("{nanos:09}");
    padded.trim_end_matches('0').len()
}
