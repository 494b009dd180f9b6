use time::Time;

use crate::scalars::text::TextFormat;
use crate::types::{OffsetTime, format_local_time, parse_local_time};
use crate::value::Value;

fn not_a_time(value: &Value, missing: &str) -> String {
    format!(
        "Unable to turn '{}' into full time because of : 'Unsupported field: {missing}'.",
        value.type_name()
    )
}

/// RFC-3339 `full-time`: a time of day with its UTC offset.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeFormat;

impl TextFormat for TimeFormat {
    type Native = OffsetTime;

    const NATIVE: &'static str = "OffsetTime";

    fn extract(value: &Value) -> Option<Result<OffsetTime, String>> {
        match value {
            Value::Time(t) => Some(Ok(*t)),
            Value::DateTime(dt) => Some(Ok(OffsetTime::new(dt.time(), dt.offset()))),
            Value::LocalTime(_) | Value::LocalDateTime(_) => {
                Some(Err(not_a_time(value, "OffsetSeconds")))
            }
            Value::Date(_) | Value::Year(_) | Value::YearMonth(_) => {
                Some(Err(not_a_time(value, "HourOfDay")))
            }
            _ => None,
        }
    }

    fn parse(text: &str) -> Result<OffsetTime, String> {
        OffsetTime::parse(text).map_err(|cause| {
            format!("Invalid RFC3339 full time value : '{text}'. because of : '{cause}'")
        })
    }

    fn format(native: &OffsetTime) -> String {
        native.to_string()
    }
}

/// `HH:mm:ss[.SSS]` without an offset.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalTimeFormat;

impl TextFormat for LocalTimeFormat {
    type Native = Time;

    const NATIVE: &'static str = "LocalTime";

    fn extract(value: &Value) -> Option<Result<Time, String>> {
        match value {
            Value::LocalTime(t) => Some(Ok(*t)),
            Value::Time(t) => Some(Ok(t.time)),
            Value::DateTime(dt) => Some(Ok(dt.time())),
            Value::LocalDateTime(dt) => Some(Ok(dt.time())),
            Value::Date(_) | Value::Year(_) | Value::YearMonth(_) => {
                Some(Err(not_a_time(value, "HourOfDay")))
            }
            _ => None,
        }
    }

    fn parse(text: &str) -> Result<Time, String> {
        parse_local_time(text).map_err(|cause| {
            format!("Invalid local time value : '{text}'. because of : '{cause}'")
        })
    }

    fn format(native: &Time) -> String {
        format_local_time(native)
    }
}
