use time::Date;

use super::parse_iso_date;
use crate::scalars::text::TextFormat;
use crate::value::{Value, format_date};

/// RFC-3339 `full-date`: `yyyy-MM-dd`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateFormat;

impl TextFormat for DateFormat {
    type Native = Date;

    const NATIVE: &'static str = "Date";

    fn extract(value: &Value) -> Option<Result<Date, String>> {
        match value {
            Value::Date(date) => Some(Ok(*date)),
            Value::DateTime(dt) => Some(Ok(dt.date())),
            Value::LocalDateTime(dt) => Some(Ok(dt.date())),
            Value::Time(_) | Value::LocalTime(_) | Value::Year(_) | Value::YearMonth(_) => {
                Some(Err(format!(
                    "Unable to turn '{}' into full date because of : 'Unsupported field: DayOfMonth'.",
                    value.type_name()
                )))
            }
            _ => None,
        }
    }

    fn parse(text: &str) -> Result<Date, String> {
        parse_iso_date(text).map_err(|cause| {
            format!("Invalid RFC3339 full date value : '{text}'. because of : '{cause}'")
        })
    }

    fn format(native: &Date) -> String {
        format_date(native)
    }
}
