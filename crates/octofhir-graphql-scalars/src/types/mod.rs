//! Runtime domain types carried by [`crate::Value`].
//!
//! Calendar and clock values come from the `time` crate, identifiers from
//! `uuid` and `url`. The types here fill the gaps:
//!
//! - Calendar: [`Year`], [`YearMonth`], [`OffsetTime`], [`Period`], plus the
//!   ISO-8601 text codec for `time::Duration`
//! - Standards tables: [`Currency`] (ISO-4217), [`CountryCode`] (ISO-3166-1)
//! - Other: [`Locale`] (BCP-47), [`Color`] (hex web colors)

mod color;
mod country;
mod currency;
mod duration;
mod locale;
mod offset_time;
mod period;
mod year;

pub use color::{Color, ParseColorError};
pub use country::{CountryCode, ParseCountryCodeError};
pub use currency::{Currency, ParseCurrencyError};
pub use duration::{ParseDurationError, format_duration, parse_duration};
pub use locale::{Locale, ParseLocaleError};
pub use offset_time::{
    OffsetTime, ParseTimeError, format_local_time, format_offset, parse_local_time,
};
pub use period::{ParsePeriodError, Period};
pub use year::{ParseYearError, Year, YearMonth};

pub(crate) use offset_time::{parse_offset, parse_time_prefix};
