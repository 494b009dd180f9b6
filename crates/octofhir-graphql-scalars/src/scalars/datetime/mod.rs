//! Temporal scalars.
//!
//! The string-formatted ones are [`TextCoercing`]s over a format per scalar.
//! `SecondsSinceEpoch` is numeric on the wire and has its own coercion.

mod date;
mod date_time;
mod duration;
mod local_date_time;
mod seconds_since_epoch;
mod time_of_day;
mod year;

use time::Date;
use time::macros::format_description;

pub use date::DateFormat;
pub use date_time::DateTimeFormat;
pub use duration::{AccurateDurationFormat, NominalDurationFormat};
pub use local_date_time::LocalDateTimeFormat;
pub use seconds_since_epoch::SecondsSinceEpochCoercing;
pub use time_of_day::{LocalTimeFormat, TimeFormat};
pub use year::{YearFormat, YearMonthFormat};

use super::text::TextCoercing;

pub type DateTimeCoercing = TextCoercing<DateTimeFormat>;
pub type DateCoercing = TextCoercing<DateFormat>;
pub type TimeCoercing = TextCoercing<TimeFormat>;
pub type LocalTimeCoercing = TextCoercing<LocalTimeFormat>;
pub type LocalDateTimeCoercing = TextCoercing<LocalDateTimeFormat>;
pub type YearCoercing = TextCoercing<YearFormat>;
pub type YearMonthCoercing = TextCoercing<YearMonthFormat>;
pub type AccurateDurationCoercing = TextCoercing<AccurateDurationFormat>;
pub type NominalDurationCoercing = TextCoercing<NominalDurationFormat>;

/// Strict `yyyy-MM-dd`: four year digits, no sign.
pub(crate) fn parse_iso_date(text: &str) -> Result<Date, String> {
    if text.len() != 10 || !text.as_bytes()[..4].iter().all(u8::is_ascii_digit) {
        return Err(format!("Text '{text}' could not be parsed"));
    }
    Date::parse(text, format_description!("[year]-[month]-[day]")).map_err(|e| e.to_string())
}
