//! Calendar year and year-month values (`yyyy`, `yyyy-MM`).

use std::fmt;
use std::str::FromStr;

use time::{Date, Month};

/// Error returned when text is not a `yyyy` or `yyyy-MM` value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Text '{0}' could not be parsed")]
pub struct ParseYearError(pub String);

/// A proleptic Gregorian year in the range `0000..=9999`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Year(i32);

impl Year {
    pub const MIN: i32 = 0;
    pub const MAX: i32 = 9999;

    /// Returns `None` outside `0..=9999`.
    pub fn new(year: i32) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&year).then_some(Self(year))
    }

    #[must_use]
    pub fn value(&self) -> i32 {
        self.0
    }

    /// Year of a calendar date, if it is representable.
    pub fn from_date(date: Date) -> Option<Self> {
        Self::new(date.year())
    }

    #[must_use]
    pub fn is_leap(&self) -> bool {
        time::util::is_leap_year(self.0)
    }

    /// Exactly four ASCII digits.
    pub fn parse(text: &str) -> Result<Self, ParseYearError> {
        four_digits(text)
            .and_then(Self::new)
            .ok_or_else(|| ParseYearError(text.to_string()))
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

impl FromStr for Year {
    type Err = ParseYearError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// A year and month without a day, e.g. `2024-02`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: Year,
    month: Month,
}

impl YearMonth {
    pub const fn new(year: Year, month: Month) -> Self {
        Self { year, month }
    }

    pub fn year(&self) -> Year {
        self.year
    }

    pub fn month(&self) -> Month {
        self.month
    }

    /// Exactly `yyyy-MM`.
    pub fn parse(text: &str) -> Result<Self, ParseYearError> {
        let err = || ParseYearError(text.to_string());
        let (year, month) = text.split_once('-').ok_or_else(err)?;
        let year = Year::parse(year).map_err(|_| err())?;
        if month.len() != 2 || !month.bytes().all(|b| b.is_ascii_digit()) {
            return Err(err());
        }
        let month: u8 = month.parse().map_err(|_| err())?;
        let month = Month::try_from(month).map_err(|_| err())?;
        Ok(Self::new(year, month))
    }

    /// Year-month of a calendar date, if its year is representable.
    pub fn from_date(date: Date) -> Option<Self> {
        Some(Self::new(Year::new(date.year())?, date.month()))
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.year, u8::from(self.month))
    }
}

impl FromStr for YearMonth {
    type Err = ParseYearError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn four_digits(text: &str) -> Option<i32> {
    if text.len() != 4 || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}
