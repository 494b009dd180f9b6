use time::{OffsetDateTime, PrimitiveDateTime};

use super::parse_iso_date;
use crate::error::ErrorKind;
use crate::scalars::text::TextFormat;
use crate::types::{format_offset, parse_offset, parse_time_prefix};
use crate::value::{Value, format_date};

/// RFC-3339 `date-time` with a mandatory offset.
///
/// Output always carries seconds and at least millisecond precision:
/// `2024-01-15T10:30:00.000Z`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateTimeFormat;

impl TextFormat for DateTimeFormat {
    type Native = OffsetDateTime;

    const NATIVE: &'static str = "OffsetDateTime";

    fn extract(value: &Value) -> Option<Result<OffsetDateTime, String>> {
        match value {
            Value::DateTime(dt) => Some(Ok(*dt)),
            _ => None,
        }
    }

    fn parse(text: &str) -> Result<OffsetDateTime, String> {
        let parsed = parse_date_time(text)
            .map_err(|cause| format!("Invalid RFC3339 value : '{text}'. because of : '{cause}'"))?;
        // `-00:00` means "offset unknown" in RFC-3339, which this scalar cannot carry.
        if parsed.offset().is_utc() && (text.ends_with("-00:00") || text.ends_with("-00:00:00")) {
            return Err(format!(
                "Invalid value : '{text}'. because negative zero offset is not allowed"
            ));
        }
        Ok(parsed)
    }

    fn format(native: &OffsetDateTime) -> String {
        format_date_time(native)
    }

    fn mismatch(kind: ErrorKind, value: &Value) -> String {
        match kind {
            ErrorKind::Serialize => format!(
                "Expected something we can convert to 'OffsetDateTime' but was '{}'.",
                value.type_name()
            ),
            _ => format!("Expected a 'String' but was '{}'.", value.type_name()),
        }
    }
}

/// Parses `yyyy-MM-ddTHH:mm[:ss[.f]]` followed by `Z` or `±HH:MM[:SS]`.
fn parse_date_time(text: &str) -> Result<OffsetDateTime, String> {
    let malformed = || format!("Text '{text}' could not be parsed");
    let date_text = text.get(..10).ok_or_else(malformed)?;
    let date = parse_iso_date(date_text)?;
    let rest = text[10..]
        .strip_prefix(|c: char| c == 'T' || c == 't')
        .ok_or_else(malformed)?;
    let (time, offset_text) = parse_time_prefix(rest).ok_or_else(malformed)?;
    let offset = parse_offset(offset_text).ok_or_else(malformed)?;
    Ok(PrimitiveDateTime::new(date, time).assume_offset(offset))
}

fn format_date_time(dt: &OffsetDateTime) -> String {
    let (hour, minute, second, nanos) = dt.time().as_hms_nano();
    let digits = format!("{nanos:09}");
    let trimmed = digits.trim_end_matches('0');
    let fraction = if trimmed.len() < 3 { &digits[..3] } else { trimmed };
    format!(
        "{}T{hour:02}:{minute:02}:{second:02}.{fraction}{}",
        format_date(&dt.date()),
        format_offset(&dt.offset())
    )
}

#[cfg(test)]
mod tests {
    use super::super::DateTimeCoercing;
    use super::*;
    use crate::CoercingError;
    use crate::coercing::Coercing;
    use crate::context::CoercingContext;
    use crate::literal::{Literal, Variables};
    use time::macros::{date, datetime};

    fn ctx() -> CoercingContext {
        CoercingContext::new()
    }

    #[test]
    fn test_negative_zero_offset_rejected() {
        let coercing = DateTimeCoercing::new();
        let err = coercing
            .parse_value(&Value::from("2023-01-01T10:00:00.000-00:00"), &ctx())
            .unwrap_err();
        assert_eq!(
            err,
            CoercingError::ParseValue(
                "Invalid value : '2023-01-01T10:00:00.000-00:00'. because negative zero offset is not allowed"
                    .into()
            )
        );
        let expected = Value::DateTime(datetime!(2023-01-01 10:00 UTC));
        assert_eq!(
            coercing
                .parse_value(&Value::from("2023-01-01T10:00:00.000+00:00"), &ctx())
                .unwrap(),
            expected
        );
        assert_eq!(
            coercing
                .parse_value(&Value::from("2023-01-01T10:00:00.000Z"), &ctx())
                .unwrap(),
            expected
        );
    }

    #[test]
    fn test_parse_date_time() {
        let valid = vec![
            ("1985-04-12T23:20:50.52Z", datetime!(1985-04-12 23:20:50.52 UTC)),
            ("1996-12-19T16:39:57-08:00", datetime!(1996-12-19 16:39:57 -08:00)),
            ("1937-01-01t12:00:27.87+00:20", datetime!(1937-01-01 12:00:27.87 +00:20)),
            ("2024-06-01T08:30+02:00", datetime!(2024-06-01 08:30 +02:00)),
            ("2024-06-01T08:30:00z", datetime!(2024-06-01 08:30 UTC)),
        ];
        for (text, expected) in valid {
            assert_eq!(parse_date_time(text), Ok(expected), "{text}");
        }
        let invalid = vec![
            "2024-06-01",
            "2024-06-01T08:30:00",
            "2024-06-01 08:30:00Z",
            "2024-06-01T25:00:00Z",
            "2024-06-31T08:30:00Z",
            "2024-06-01T08:30:00+19:00",
            "2024-06-01T08:30:00.Z",
            "2024-06-01T08:30:00Z ",
        ];
        for text in invalid {
            assert!(parse_date_time(text).is_err(), "Expected invalid: {text}");
        }
    }

    #[test]
    fn test_format_keeps_millisecond_precision() {
        let cases = vec![
            (datetime!(2024-01-15 10:30 UTC), "2024-01-15T10:30:00.000Z"),
            (datetime!(2024-01-15 10:30:00.5 +01:00), "2024-01-15T10:30:00.500+01:00"),
            (datetime!(2024-01-15 10:30:00.123456 -05:30), "2024-01-15T10:30:00.123456-05:30"),
            (datetime!(2024-01-15 10:30:00.000000001 UTC), "2024-01-15T10:30:00.000000001Z"),
        ];
        for (dt, expected) in cases {
            assert_eq!(format_date_time(&dt), expected);
        }
    }

    #[test]
    fn test_serialize_and_round_trip() {
        let coercing = DateTimeCoercing::new();
        let dt = datetime!(2020-02-29 23:59:59.999 +09:00);
        let wire = coercing.serialize(&Value::from(dt), &ctx()).unwrap();
        assert_eq!(wire, Value::from("2020-02-29T23:59:59.999+09:00"));
        assert_eq!(coercing.parse_value(&wire, &ctx()).unwrap(), Value::from(dt));
    }

    #[test]
    fn test_mismatch_messages() {
        let coercing = DateTimeCoercing::new();
        let date_only = Value::from(date!(2024 - 01 - 01));
        assert_eq!(
            coercing.serialize(&date_only, &ctx()).unwrap_err().message(),
            "Expected something we can convert to 'OffsetDateTime' but was 'Date'."
        );
        assert_eq!(
            coercing.parse_value(&Value::Long(0), &ctx()).unwrap_err().message(),
            "Expected a 'String' but was 'Long'."
        );
    }

    #[test]
    fn test_parse_literal_error_kinds() {
        let vars = Variables::new();
        let coercing = DateTimeCoercing::new();
        assert!(matches!(
            coercing.parse_literal(&Literal::string("yesterday"), &vars, &ctx()),
            Err(CoercingError::ParseLiteral(msg)) if msg.starts_with("Invalid RFC3339 value : 'yesterday'")
        ));
        assert!(matches!(
            coercing.parse_literal(&Literal::Boolean(true), &vars, &ctx()),
            Err(CoercingError::ParseLiteral(_))
        ));
    }
}
