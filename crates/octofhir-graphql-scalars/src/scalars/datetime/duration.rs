use time::Duration;

use crate::error::ErrorKind;
use crate::scalars::text::TextFormat;
use crate::types::{Period, format_duration, parse_duration};
use crate::value::Value;

fn convertible_mismatch(kind: ErrorKind, value: &Value, native: &str) -> String {
    match kind {
        ErrorKind::Serialize => format!(
            "Expected something we can convert to '{native}' but was '{}'.",
            value.type_name()
        ),
        _ => format!("Expected a 'String' but was '{}'.", value.type_name()),
    }
}

/// ISO-8601 duration with day, hour, minute and second components only.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccurateDurationFormat;

impl TextFormat for AccurateDurationFormat {
    type Native = Duration;

    const NATIVE: &'static str = "Duration";

    fn extract(value: &Value) -> Option<Result<Duration, String>> {
        match value {
            Value::Duration(d) => Some(Ok(*d)),
            _ => None,
        }
    }

    fn parse(text: &str) -> Result<Duration, String> {
        parse_duration(text)
            .map_err(|cause| format!("Invalid ISO 8601 value : '{text}'. because of : '{cause}'"))
    }

    fn format(native: &Duration) -> String {
        format_duration(native)
    }

    fn mismatch(kind: ErrorKind, value: &Value) -> String {
        convertible_mismatch(kind, value, Self::NATIVE)
    }
}

/// ISO-8601 duration with year, month, week and day components only.
#[derive(Debug, Clone, Copy, Default)]
pub struct NominalDurationFormat;

impl TextFormat for NominalDurationFormat {
    type Native = Period;

    const NATIVE: &'static str = "Period";

    fn extract(value: &Value) -> Option<Result<Period, String>> {
        match value {
            Value::Period(p) => Some(Ok(*p)),
            _ => None,
        }
    }

    fn parse(text: &str) -> Result<Period, String> {
        Period::parse(text)
            .map_err(|cause| format!("Invalid ISO 8601 value : '{text}'. because of : '{cause}'"))
    }

    fn format(native: &Period) -> String {
        native.to_string()
    }

    fn mismatch(kind: ErrorKind, value: &Value) -> String {
        convertible_mismatch(kind, value, Self::NATIVE)
    }
}
