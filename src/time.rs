//! Clock-time helpers.
//!
//! All times in this crate are minute offsets from midnight of a single day
//! (`0..=1440`). This module converts between offsets and `HH:MM` strings and
//! provides a serde adapter so that request files can use wall-clock notation.

use std::fmt;

/// Minutes in one day. Offsets are valid in `[0, MINUTES_PER_DAY]`.
pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// Error returned by [`parse_clock`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClockError {
    /// Input is not of the form `H:MM` / `HH:MM`.
    Malformed(String),
    /// Hours or minutes out of range.
    OutOfRange(String),
}

impl fmt::Display for ClockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClockError::Malformed(s) => write!(f, "malformed clock time '{s}', expected HH:MM"),
            ClockError::OutOfRange(s) => write!(f, "clock time '{s}' is outside 00:00..=24:00"),
        }
    }
}

impl std::error::Error for ClockError {}

/// Parses `HH:MM` into a minute offset from midnight.
///
/// `24:00` is accepted as the end of the day.
///
/// ```
/// use u_itinerary::time::parse_clock;
/// assert_eq!(parse_clock("10:30"), Ok(630));
/// assert_eq!(parse_clock("24:00"), Ok(1440));
/// assert!(parse_clock("10h30").is_err());
/// ```
pub fn parse_clock(s: &str) -> Result<i64, ClockError> {
    let trimmed = s.trim();
    let (h, m) = trimmed
        .split_once(':')
        .ok_or_else(|| ClockError::Malformed(s.to_string()))?;

    if h.is_empty() || m.len() != 2 {
        return Err(ClockError::Malformed(s.to_string()));
    }
    let hours: i64 = h.parse().map_err(|_| ClockError::Malformed(s.to_string()))?;
    let minutes: i64 = m.parse().map_err(|_| ClockError::Malformed(s.to_string()))?;

    if !(0..60).contains(&minutes) || !(0..=24).contains(&hours) {
        return Err(ClockError::OutOfRange(s.to_string()));
    }
    let offset = hours * 60 + minutes;
    if offset > MINUTES_PER_DAY {
        return Err(ClockError::OutOfRange(s.to_string()));
    }
    Ok(offset)
}

/// Formats a minute offset as `HH:MM`.
///
/// Negative offsets are prefixed with `-`; offsets past midnight keep counting
/// hours (`25:00`), so the output always round-trips through arithmetic.
pub fn format_clock(offset_min: i64) -> String {
    let sign = if offset_min < 0 { "-" } else { "" };
    let abs = offset_min.unsigned_abs();
    format!("{sign}{:02}:{:02}", abs / 60, abs % 60)
}

/// Serde adapter: minute offset ↔ `"HH:MM"`.
///
/// Deserialization also accepts a bare integer offset within the day.
///
/// ```
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Slot {
///     #[serde(with = "u_itinerary::time::clock")]
///     at: i64,
/// }
///
/// let slot: Slot = serde_json::from_str(r#"{"at":"13:05"}"#).unwrap();
/// assert_eq!(slot.at, 785);
/// assert_eq!(serde_json::to_string(&slot).unwrap(), r#"{"at":"13:05"}"#);
/// ```
pub mod clock {
    use serde::de::{self, Deserializer, Visitor};
    use serde::Serializer;
    use std::fmt;

    pub fn serialize<S: Serializer>(offset_min: &i64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_clock(*offset_min))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        deserializer.deserialize_any(ClockVisitor)
    }

    struct ClockVisitor;

    impl<'de> Visitor<'de> for ClockVisitor {
        type Value = i64;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("an HH:MM string or a minute offset")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<i64, E> {
            super::parse_clock(v).map_err(E::custom)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<i64, E> {
            if (0..=super::MINUTES_PER_DAY).contains(&v) {
                Ok(v)
            } else {
                Err(E::custom(format!("offset {v} is outside 0..=1440")))
            }
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<i64, E> {
            match i64::try_from(v) {
                Ok(v) => self.visit_i64(v),
                Err(_) => Err(E::custom(format!("offset {v} is outside 0..=1440"))),
            }
        }
    }
}
