use time::macros::format_description;
use time::{PrimitiveDateTime, Time};

use super::parse_iso_date;
use crate::error::ErrorKind;
use crate::scalars::text::TextFormat;
use crate::value::{Value, format_date};

/// `yyyy-MM-dd HH:mm:ss`, no offset. Sub-second precision is not kept.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalDateTimeFormat;

impl TextFormat for LocalDateTimeFormat {
    type Native = PrimitiveDateTime;

    const NATIVE: &'static str = "LocalDateTime";

    fn extract(value: &Value) -> Option<Result<PrimitiveDateTime, String>> {
        match value {
            Value::LocalDateTime(dt) => Some(Ok(*dt)),
            _ => None,
        }
    }

    fn parse(text: &str) -> Result<PrimitiveDateTime, String> {
        let unparseable = || format!("Unable to parse {text} as LocalDateTime");
        let (date_text, clock_text) = text.split_once(' ').ok_or_else(unparseable)?;
        let date = parse_iso_date(date_text).map_err(|_| unparseable())?;
        let clock = Time::parse(clock_text, format_description!("[hour]:[minute]:[second]"))
            .map_err(|_| unparseable())?;
        Ok(PrimitiveDateTime::new(date, clock))
    }

    fn format(native: &PrimitiveDateTime) -> String {
        let (hour, minute, second) = native.time().as_hms();
        format!(
            "{} {hour:02}:{minute:02}:{second:02}",
            format_date(&native.date())
        )
    }

    fn mismatch(kind: ErrorKind, value: &Value) -> String {
        match kind {
            ErrorKind::Serialize => "Input is not a LocalDateTime".to_string(),
            _ => format!("Unable to parse {value} as LocalDateTime"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::LocalDateTimeCoercing;
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
    fn test_local_date_time_format() {
        let coercing = LocalDateTimeCoercing::new();
        assert_eq!(
            coercing
                .parse_value(&Value::from("2007-12-03 10:15:30"), &ctx())
                .unwrap(),
            Value::LocalDateTime(datetime!(2007-12-03 10:15:30))
        );
        assert_eq!(
            coercing
                .serialize(&Value::from(datetime!(2007-12-03 10:15:30.75)), &ctx())
                .unwrap(),
            Value::from("2007-12-03 10:15:30")
        );
        let invalid = vec![
            "2007-12-03T10:15:30",
            "2007-12-03 10:15",
            "2007-12-03 10:15:30.5",
            "2007-02-30 10:15:30",
        ];
        for text in invalid {
            assert_eq!(
                coercing.parse_value(&Value::from(text), &ctx()).unwrap_err(),
                CoercingError::ParseValue(format!("Unable to parse {text} as LocalDateTime"))
            );
        }
    }

    #[test]
    fn test_local_date_time_mismatch() {
        let coercing = LocalDateTimeCoercing::new();
        assert_eq!(
            coercing
                .serialize(&Value::from(date!(2007 - 12 - 03)), &ctx())
                .unwrap_err(),
            CoercingError::Serialize("Input is not a LocalDateTime".into())
        );
        assert!(matches!(
            coercing.parse_literal(&Literal::string("2007-12-03"), &Variables::new(), &ctx()),
            Err(CoercingError::ParseLiteral(_))
        ));
    }
}
