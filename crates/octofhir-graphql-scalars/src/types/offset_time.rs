//! Time of day with a UTC offset, plus the ISO-8601 time and offset codecs
//! shared by the temporal scalars.

use std::fmt;
use std::str::FromStr;

use time::{Time, UtcOffset};

/// A wall-clock time paired with a UTC offset, e.g. `10:15:30+01:00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OffsetTime {
    pub time: Time,
    pub offset: UtcOffset,
}

/// Error returned when text is not an ISO-8601 (offset) time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Text '{0}' could not be parsed")]
pub struct ParseTimeError(pub String);

impl OffsetTime {
    pub const fn new(time: Time, offset: UtcOffset) -> Self {
        Self { time, offset }
    }

    /// Parses `HH:mm[:ss[.fffffffff]]` followed by `Z` or `±HH:MM[:SS]`.
    pub fn parse(text: &str) -> Result<Self, ParseTimeError> {
        let err = || ParseTimeError(text.to_string());
        let (time, rest) = parse_time_prefix(text).ok_or_else(err)?;
        let offset = parse_offset(rest).ok_or_else(err)?;
        Ok(Self::new(time, offset))
    }
}

impl fmt::Display for OffsetTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            format_local_time(&self.time),
            format_offset(&self.offset)
        )
    }
}

impl FromStr for OffsetTime {
    type Err = ParseTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Parses a complete `HH:mm[:ss[.fffffffff]]` string.
pub fn parse_local_time(text: &str) -> Result<Time, ParseTimeError> {
    match parse_time_prefix(text) {
        Some((time, "")) => Ok(time),
        _ => Err(ParseTimeError(text.to_string())),
    }
}

/// `HH:mm:ss` with the shortest fraction that keeps full precision.
#[must_use]
pub fn format_local_time(time: &Time) -> String {
    let (hour, minute, second, nanos) = time.as_hms_nano();
    let mut out = format!("{hour:02}:{minute:02}:{second:02}");
    if nanos != 0 {
        let fraction = format!("{nanos:09}");
        out.push('.');
        out.push_str(fraction.trim_end_matches('0'));
    }
    out
}

/// `Z` for UTC, otherwise `±HH:MM` with `:SS` only when seconds are present.
#[must_use]
pub fn format_offset(offset: &UtcOffset) -> String {
    if offset.is_utc() {
        return "Z".to_string();
    }
    let (h, m, s) = offset.as_hms();
    let sign = if offset.is_negative() { '-' } else { '+' };
    let (h, m, s) = (h.unsigned_abs(), m.unsigned_abs(), s.unsigned_abs());
    if s == 0 {
        format!("{sign}{h:02}:{m:02}")
    } else {
        format!("{sign}{h:02}:{m:02}:{s:02}")
    }
}

/// Parses `Z` or `±HH:MM[:SS]`, consuming the whole input.
pub(crate) fn parse_offset(text: &str) -> Option<UtcOffset> {
    if text == "Z" || text == "z" {
        return Some(UtcOffset::UTC);
    }
    let bytes = text.as_bytes();
    let negative = match bytes.first()? {
        b'+' => false,
        b'-' => true,
        _ => return None,
    };
    let fields: Vec<&str> = text[1..].split(':').collect();
    if !(2..=3).contains(&fields.len()) {
        return None;
    }
    let mut parts = [0i8; 3];
    for (slot, field) in parts.iter_mut().zip(&fields) {
        *slot = two_digits(field)? as i8;
    }
    let [h, m, s] = parts;
    if h > 18 || m > 59 || s > 59 {
        return None;
    }
    if negative {
        UtcOffset::from_hms(-h, -m, -s).ok()
    } else {
        UtcOffset::from_hms(h, m, s).ok()
    }
}

/// Parses a leading `HH:mm[:ss[.fffffffff]]` and returns the unparsed rest.
pub(crate) fn parse_time_prefix(text: &str) -> Option<(Time, &str)> {
    let bytes = text.as_bytes();
    if bytes.len() < 5 || bytes[2] != b':' {
        return None;
    }
    let hour = two_digits(text.get(0..2)?)?;
    let minute = two_digits(text.get(3..5)?)?;
    let mut rest = &text[5..];
    let mut second = 0u8;
    let mut nanos = 0u32;

    if let Some(tail) = rest.strip_prefix(':') {
        second = two_digits(tail.get(0..2)?)?;
        rest = &tail[2..];
        if let Some(tail) = rest.strip_prefix('.') {
            let len = tail.bytes().take_while(u8::is_ascii_digit).count();
            if len == 0 || len > 9 {
                return None;
            }
            nanos = format!("{:0<9}", &tail[..len]).parse().ok()?;
            rest = &tail[len..];
        }
    }

    let time = Time::from_hms_nano(hour, minute, second, nanos).ok()?;
    Some((time, rest))
}

fn two_digits(field: &str) -> Option<u8> {
    if field.len() != 2 || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}
