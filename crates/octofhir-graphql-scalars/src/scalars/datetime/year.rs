use crate::scalars::text::TextFormat;
use crate::types::{Year, YearMonth};
use crate::value::Value;

fn out_of_range(value: &Value, target: &str) -> String {
    format!(
        "Unable to turn '{}' into full {target} because of : 'Year out of range: {value}'.",
        value.type_name()
    )
}

fn unsupported(value: &Value, target: &str, missing: &str) -> String {
    format!(
        "Unable to turn '{}' into full {target} because of : 'Unsupported field: {missing}'.",
        value.type_name()
    )
}

/// `yyyy`, four digits.
#[derive(Debug, Clone, Copy, Default)]
pub struct YearFormat;

impl TextFormat for YearFormat {
    type Native = Year;

    const NATIVE: &'static str = "Year";

    fn extract(value: &Value) -> Option<Result<Year, String>> {
        let date = match value {
            Value::Year(year) => return Some(Ok(*year)),
            Value::YearMonth(ym) => return Some(Ok(ym.year())),
            Value::Date(date) => *date,
            Value::DateTime(dt) => dt.date(),
            Value::LocalDateTime(dt) => dt.date(),
            Value::Time(_) | Value::LocalTime(_) => {
                return Some(Err(unsupported(value, "year", "YearOfEra")));
            }
            _ => return None,
        };
        Some(Year::from_date(date).ok_or_else(|| out_of_range(value, "year")))
    }

    fn parse(text: &str) -> Result<Year, String> {
        Year::parse(text).map_err(|cause| {
            format!("Invalid RFC3339 full year value : '{text}'. because of : '{cause}'")
        })
    }

    fn format(native: &Year) -> String {
        native.to_string()
    }
}

/// `yyyy-MM`.
#[derive(Debug, Clone, Copy, Default)]
pub struct YearMonthFormat;

impl TextFormat for YearMonthFormat {
    type Native = YearMonth;

    const NATIVE: &'static str = "YearMonth";

    fn extract(value: &Value) -> Option<Result<YearMonth, String>> {
        let date = match value {
            Value::YearMonth(ym) => return Some(Ok(*ym)),
            Value::Date(date) => *date,
            Value::DateTime(dt) => dt.date(),
            Value::LocalDateTime(dt) => dt.date(),
            Value::Year(_) => return Some(Err(unsupported(value, "yearMonth", "MonthOfYear"))),
            Value::Time(_) | Value::LocalTime(_) => {
                return Some(Err(unsupported(value, "yearMonth", "YearOfEra")));
            }
            _ => return None,
        };
        Some(YearMonth::from_date(date).ok_or_else(|| out_of_range(value, "yearMonth")))
    }

    fn parse(text: &str) -> Result<YearMonth, String> {
        YearMonth::parse(text).map_err(|cause| {
            format!("Invalid RFC3339 full yearMonth value : '{text}'. because of : '{cause}'")
        })
    }

    fn format(native: &YearMonth) -> String {
        native.to_string()
    }
}
