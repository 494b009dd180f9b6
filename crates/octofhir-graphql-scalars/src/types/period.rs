//! Nominal (calendar) period: years, months and days.
//!
//! Text form is the ISO-8601 period subset `PnYnMnWnD`. Weeks are folded into
//! days when parsing; the canonical output never contains a week component and
//! a zero period prints as `P0D`.

use std::fmt;
use std::str::FromStr;

/// A date-based amount of time such as `P1Y2M3D`.
///
/// Components are independent and may carry different signs; no normalization
/// between years and months is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Period {
    pub years: i32,
    pub months: i32,
    pub days: i32,
}

/// Error returned when text does not match the ISO-8601 period grammar.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Text '{0}' cannot be parsed to a Period")]
pub struct ParsePeriodError(pub String);

impl Period {
    pub const ZERO: Period = Period::new(0, 0, 0);

    pub const fn new(years: i32, months: i32, days: i32) -> Self {
        Self {
            years,
            months,
            days,
        }
    }

    pub const fn of_days(days: i32) -> Self {
        Self::new(0, 0, days)
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Parses `[+-]P[nY][nM][nW][nD]`, each component optionally signed.
    pub fn parse(text: &str) -> Result<Self, ParsePeriodError> {
        let err = || ParsePeriodError(text.to_string());

        let (negate, rest) = match text.as_bytes().first() {
            Some(b'-') => (true, &text[1..]),
            Some(b'+') => (false, &text[1..]),
            _ => (false, text),
        };
        let body = rest
            .strip_prefix('P')
            .or_else(|| rest.strip_prefix('p'))
            .ok_or_else(err)?;
        if body.is_empty() {
            return Err(err());
        }

        let mut years = 0i32;
        let mut months = 0i32;
        let mut weeks = 0i32;
        let mut days = 0i32;
        // Designators must appear in Y, M, W, D order, each at most once.
        let mut last_rank = 0u8;
        let mut remaining = body;

        while !remaining.is_empty() {
            let end = remaining
                .find(|c: char| c.is_ascii_alphabetic())
                .ok_or_else(err)?;
            let (number, tail) = remaining.split_at(end);
            let designator = tail.as_bytes()[0].to_ascii_uppercase();
            remaining = &tail[1..];

            let amount = parse_signed_component(number).ok_or_else(err)?;
            let rank = match designator {
                b'Y' => 1,
                b'M' => 2,
                b'W' => 3,
                b'D' => 4,
                _ => return Err(err()),
            };
            if rank <= last_rank {
                return Err(err());
            }
            last_rank = rank;

            match rank {
                1 => years = amount,
                2 => months = amount,
                3 => weeks = amount,
                _ => days = amount,
            }
        }

        let days = weeks
            .checked_mul(7)
            .and_then(|w| w.checked_add(days))
            .ok_or_else(err)?;
        let period = Self::new(years, months, days);
        if negate {
            period.checked_neg().ok_or_else(err)
        } else {
            Ok(period)
        }
    }

    fn checked_neg(self) -> Option<Self> {
        Some(Self::new(
            self.years.checked_neg()?,
            self.months.checked_neg()?,
            self.days.checked_neg()?,
        ))
    }
}

fn parse_signed_component(number: &str) -> Option<i32> {
    let digits = number
        .strip_prefix('-')
        .or_else(|| number.strip_prefix('+'))
        .unwrap_or(number);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    number.parse().ok()
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("P0D");
        }
        f.write_str("P")?;
        if self.years != 0 {
            write!(f, "{}Y", self.years)?;
        }
        if self.months != 0 {
            write!(f, "{}M", self.months)?;
        }
        if self.days != 0 {
            write!(f, "{}D", self.days)?;
        }
        Ok(())
    }
}

impl FromStr for Period {
    type Err = ParsePeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let valid = vec![
            ("P1Y", Period::new(1, 0, 0)),
            ("P2M", Period::new(0, 2, 0)),
            ("P3D", Period::of_days(3)),
            ("P1W", Period::of_days(7)),
            ("P1Y2M3W4D", Period::new(1, 2, 25)),
            ("P-1Y2M", Period::new(-1, 2, 0)),
            ("-P1Y2M", Period::new(-1, -2, 0)),
            ("P0D", Period::ZERO),
        ];
        for (text, expected) in valid {
            assert_eq!(Period::parse(text).unwrap(), expected, "{text}");
        }
    }

    #[test]
    fn test_parse_invalid() {
        let invalid = vec![
            "", "P", "1Y", "PT1H", "P1H", "P1M1Y", "P1Y1Y", "PY", "P1.5D", "P 1D", "P1D ",
        ];
        for text in invalid {
            assert!(Period::parse(text).is_err(), "Expected invalid period: {text}");
        }
    }

    #[test]
    fn test_display_canonical() {
        assert_eq!(Period::ZERO.to_string(), "P0D");
        assert_eq!(Period::new(1, 2, 3).to_string(), "P1Y2M3D");
        assert_eq!(Period::of_days(14).to_string(), "P14D");
        assert_eq!(Period::new(-1, 0, 5).to_string(), "P-1Y5D");
    }

    #[test]
    fn test_weeks_fold_into_days() {
        let period: Period = "P2W".parse().unwrap();
        assert_eq!(period.to_string(), "P14D");
    }
}
