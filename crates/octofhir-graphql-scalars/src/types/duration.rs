//! ISO-8601 text codec for exact durations (`time::Duration`).
//!
//! Grammar: `[+-]P[nD][T[nH][nM][n[.f]S]]` where every number may carry its
//! own sign and the fraction has at most nine digits. Days are exactly 24
//! hours. Output never has a day component: `P2D` prints as `PT48H` and a
//! zero duration prints as `PT0S`.

use time::Duration;

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 3_600;
const SECONDS_PER_DAY: i64 = 86_400;

/// Error returned when text is not an ISO-8601 day-time duration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Text '{0}' cannot be parsed to a Duration")]
pub struct ParseDurationError(pub String);

/// Parses an ISO-8601 day-time duration such as `PT1H30M` or `P1DT0.5S`.
pub fn parse_duration(text: &str) -> Result<Duration, ParseDurationError> {
    let err = || ParseDurationError(text.to_string());

    let (negate, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let body = rest
        .strip_prefix('P')
        .or_else(|| rest.strip_prefix('p'))
        .ok_or_else(err)?;

    let (date_part, time_part) = match body.find(['T', 't']) {
        Some(idx) => (&body[..idx], Some(&body[idx + 1..])),
        None => (body, None),
    };

    let mut total = Duration::ZERO;
    let mut components = 0usize;

    if !date_part.is_empty() {
        let digits = date_part
            .strip_suffix('D')
            .or_else(|| date_part.strip_suffix('d'))
            .ok_or_else(err)?;
        let days = parse_signed(digits).ok_or_else(err)?;
        let secs = days.checked_mul(SECONDS_PER_DAY).ok_or_else(err)?;
        total = total
            .checked_add(Duration::seconds(secs))
            .ok_or_else(err)?;
        components += 1;
    }

    if let Some(time_part) = time_part {
        if time_part.is_empty() {
            return Err(err());
        }
        let mut last_rank = 0u8;
        let mut remaining = time_part;
        while !remaining.is_empty() {
            let end = remaining
                .find(|c: char| c.is_ascii_alphabetic())
                .ok_or_else(err)?;
            let (number, tail) = remaining.split_at(end);
            let designator = tail.as_bytes()[0].to_ascii_uppercase();
            remaining = &tail[1..];

            let (rank, amount) = match designator {
                b'H' => (1, hms(number, SECONDS_PER_HOUR).ok_or_else(err)?),
                b'M' => (2, hms(number, SECONDS_PER_MINUTE).ok_or_else(err)?),
                b'S' => (3, parse_seconds(number).ok_or_else(err)?),
                _ => return Err(err()),
            };
            if rank <= last_rank {
                return Err(err());
            }
            last_rank = rank;
            total = total.checked_add(amount).ok_or_else(err)?;
            components += 1;
        }
    }

    if components == 0 {
        return Err(err());
    }
    if negate {
        total.checked_neg().ok_or_else(err)
    } else {
        Ok(total)
    }
}

/// Formats a duration as `PTnHnMn.fS`, omitting zero components.
#[must_use]
pub fn format_duration(duration: &Duration) -> String {
    if duration.is_zero() {
        return "PT0S".to_string();
    }
    let total_secs = duration.whole_seconds();
    let nanos = duration.subsec_nanoseconds();
    let hours = total_secs / SECONDS_PER_HOUR;
    let minutes = (total_secs % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
    let secs = total_secs % SECONDS_PER_MINUTE;

    let mut out = String::from("PT");
    if hours != 0 {
        out.push_str(&format!("{hours}H"));
    }
    if minutes != 0 {
        out.push_str(&format!("{minutes}M"));
    }
    if secs == 0 && nanos == 0 {
        return out;
    }
    if secs == 0 && nanos < 0 {
        out.push_str("-0");
    } else {
        out.push_str(&secs.to_string());
    }
    if nanos != 0 {
        let fraction = format!("{:09}", nanos.unsigned_abs());
        out.push('.');
        out.push_str(fraction.trim_end_matches('0'));
    }
    out.push('S');
    out
}

fn parse_signed(number: &str) -> Option<i64> {
    let digits = number
        .strip_prefix('-')
        .or_else(|| number.strip_prefix('+'))
        .unwrap_or(number);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    number.parse().ok()
}

fn hms(number: &str, unit: i64) -> Option<Duration> {
    let secs = parse_signed(number)?.checked_mul(unit)?;
    Some(Duration::seconds(secs))
}

fn parse_seconds(number: &str) -> Option<Duration> {
    let (whole, fraction) = match number.find(['.', ',']) {
        Some(idx) => (&number[..idx], Some(&number[idx + 1..])),
        None => (number, None),
    };
    let secs = parse_signed(whole)?;
    let mut nanos = 0i64;
    if let Some(fraction) = fraction {
        if fraction.is_empty()
            || fraction.len() > 9
            || !fraction.bytes().all(|b| b.is_ascii_digit())
        {
            return None;
        }
        nanos = format!("{fraction:0<9}").parse().ok()?;
        if whole.starts_with('-') {
            nanos = -nanos;
        }
    }
    Duration::seconds(secs).checked_add(Duration::nanoseconds(nanos))
}
