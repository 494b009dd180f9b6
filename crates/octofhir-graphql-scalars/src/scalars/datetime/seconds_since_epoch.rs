use num_traits::ToPrimitive;
use time::OffsetDateTime;

use crate::Result;
use crate::coercing::Coercing;
use crate::context::CoercingContext;
use crate::error::{CoercingError, ErrorKind};
use crate::literal::{Literal, Variables};
use crate::scalars::decimal::{number, truncate};
use crate::value::Value;

/// A point in time as whole seconds since `1970-01-01T00:00:00Z`.
///
/// Output is a `Long`. Input numbers are truncated toward zero; input strings
/// must be digits only. Parsed values are UTC date-times.
#[derive(Debug, Clone, Copy, Default)]
pub struct SecondsSinceEpochCoercing;

impl SecondsSinceEpochCoercing {
    fn truncated(value: &Value) -> Option<i64> {
        truncate(&number(value)?).to_i64()
    }

    fn only_digits(text: &str, kind: ErrorKind) -> Result<i64> {
        let invalid = || {
            kind.error(format!(
                "Invalid seconds since epoch value : '{text}'. Expected a string containing only digits."
            ))
        };
        if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        text.parse().map_err(|_| invalid())
    }

    fn to_date_time(seconds: i64, kind: ErrorKind) -> Result<Value> {
        OffsetDateTime::from_unix_timestamp(seconds)
            .map(Value::DateTime)
            .map_err(|e| {
                kind.error(format!(
                    "Invalid seconds since epoch value : '{seconds}'. {e}"
                ))
            })
    }

    fn epoch_seconds(value: &Value) -> Result<i64> {
        match value {
            Value::String(text) => text.parse().map_err(|_| {
                CoercingError::serialize(format!(
                    "Invalid seconds since epoch value : '{text}'. Expected a string containing only digits."
                ))
            }),
            Value::DateTime(dt) => Ok(dt.unix_timestamp()),
            Value::LocalDateTime(dt) => Ok(dt.assume_utc().unix_timestamp()),
            Value::Date(_)
            | Value::Time(_)
            | Value::LocalTime(_)
            | Value::Year(_)
            | Value::YearMonth(_) => Err(CoercingError::serialize(format!(
                "Unable to convert '{}' to seconds since epoch because of : 'Unsupported field: InstantSeconds'.",
                value.type_name()
            ))),
            other if other.is_number() => Self::truncated(other).ok_or_else(|| {
                CoercingError::serialize(format!(
                    "Unable to convert to seconds since epoch because of : 'Value out of range: {other}'."
                ))
            }),
            other => Err(CoercingError::serialize(format!(
                "Expected a 'Number', 'String' or 'DateTime' but was '{}'.",
                other.type_name()
            ))),
        }
    }
}

impl Coercing for SecondsSinceEpochCoercing {
    fn serialize(&self, value: &Value, _ctx: &CoercingContext) -> Result<Value> {
        Self::epoch_seconds(value).map(Value::Long)
    }

    fn parse_value(&self, input: &Value, _ctx: &CoercingContext) -> Result<Value> {
        let kind = ErrorKind::ParseValue;
        let seconds = match input {
            Value::String(text) => Self::only_digits(text, kind)?,
            other if other.is_number() => Self::truncated(other).ok_or_else(|| {
                kind.error(format!(
                    "Unable to parse value to seconds since epoch because of : 'Value out of range: {other}'."
                ))
            })?,
            other => {
                return Err(kind.error(format!(
                    "Expected a 'Number' or 'String' but was '{}'.",
                    other.type_name()
                )));
            }
        };
        Self::to_date_time(seconds, kind)
    }

    fn parse_literal(
        &self,
        input: &Literal,
        _variables: &Variables,
        _ctx: &CoercingContext,
    ) -> Result<Value> {
        let kind = ErrorKind::ParseLiteral;
        let seconds = match input {
            Literal::String(text) => Self::only_digits(text, kind)?,
            Literal::Int(i) => i.to_i64().ok_or_else(|| {
                kind.error(format!(
                    "Unable to parse literal to seconds since epoch because of : 'Value out of range: {i}'."
                ))
            })?,
            other => {
                return Err(kind.error(format!(
                    "Expected AST type 'StringValue' or 'IntValue' but was '{}'.",
                    other.kind_name()
                )));
            }
        };
        Self::to_date_time(seconds, kind)
    }

    fn value_to_literal(&self, value: &Value, _ctx: &CoercingContext) -> Result<Literal> {
        Self::epoch_seconds(value).map(Literal::int)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;
    use std::str::FromStr;
    use time::macros::{date, datetime};

    fn ctx() -> CoercingContext {
        CoercingContext::new()
    }

    #[test]
    fn test_serialize() {
        let valid = vec![
            (Value::Long(1_700_000_000), 1_700_000_000),
            (Value::Float(12.9), 12),
            (Value::BigDecimal(BigDecimal::from_str("-3.7").unwrap()), -3),
            (Value::from("-86400"), -86_400),
            (Value::from(datetime!(1970-01-02 00:00 +01:00)), 82_800),
            (Value::from(datetime!(1970-01-01 00:01)), 60),
        ];
        for (input, expected) in valid {
            assert_eq!(
                SecondsSinceEpochCoercing.serialize(&input, &ctx()).unwrap(),
                Value::Long(expected),
                "{input}"
            );
        }
        assert!(matches!(
            SecondsSinceEpochCoercing.serialize(&Value::from(date!(2024 - 01 - 01)), &ctx()),
            Err(CoercingError::Serialize(msg)) if msg.contains("InstantSeconds")
        ));
        assert_eq!(
            SecondsSinceEpochCoercing
                .serialize(&Value::Boolean(true), &ctx())
                .unwrap_err()
                .message(),
            "Expected a 'Number', 'String' or 'DateTime' but was 'Boolean'."
        );
    }

    #[test]
    fn test_parse_value_returns_utc_date_time() {
        let expected = Value::DateTime(datetime!(2023-11-14 22:13:20 UTC));
        for input in [Value::Long(1_700_000_000), Value::from("1700000000")] {
            assert_eq!(
                SecondsSinceEpochCoercing.parse_value(&input, &ctx()).unwrap(),
                expected
            );
        }
        for invalid in ["-1", "12a", "", " 1"] {
            assert_eq!(
                SecondsSinceEpochCoercing
                    .parse_value(&Value::from(invalid), &ctx())
                    .unwrap_err(),
                CoercingError::ParseValue(format!(
                    "Invalid seconds since epoch value : '{invalid}'. Expected a string containing only digits."
                ))
            );
        }
        assert!(matches!(
            SecondsSinceEpochCoercing.parse_value(&Value::Boolean(false), &ctx()),
            Err(CoercingError::ParseValue(_))
        ));
    }

    #[test]
    fn test_parse_literal() {
        let vars = Variables::new();
        assert_eq!(
            SecondsSinceEpochCoercing
                .parse_literal(&Literal::int(0), &vars, &ctx())
                .unwrap(),
            Value::DateTime(OffsetDateTime::UNIX_EPOCH)
        );
        assert_eq!(
            SecondsSinceEpochCoercing
                .parse_literal(&Literal::string("60"), &vars, &ctx())
                .unwrap(),
            Value::DateTime(datetime!(1970-01-01 00:01 UTC))
        );
        assert!(matches!(
            SecondsSinceEpochCoercing.parse_literal(&Literal::string("-60"), &vars, &ctx()),
            Err(CoercingError::ParseLiteral(_))
        ));
        assert!(matches!(
            SecondsSinceEpochCoercing.parse_literal(&Literal::int(i64::MAX), &vars, &ctx()),
            Err(CoercingError::ParseLiteral(_))
        ));
        assert_eq!(
            SecondsSinceEpochCoercing
                .parse_literal(&Literal::Float(BigDecimal::from(1)), &vars, &ctx())
                .unwrap_err()
                .message(),
            "Expected AST type 'StringValue' or 'IntValue' but was 'FloatValue'."
        );
    }

    #[test]
    fn test_round_trip_and_literal() {
        let dt = Value::from(datetime!(2001-09-09 01:46:40 UTC));
        let wire = SecondsSinceEpochCoercing.serialize(&dt, &ctx()).unwrap();
        assert_eq!(wire, Value::Long(1_000_000_000));
        assert_eq!(
            SecondsSinceEpochCoercing.parse_value(&wire, &ctx()).unwrap(),
            dt
        );
        assert_eq!(
            SecondsSinceEpochCoercing
                .value_to_literal(&dt, &ctx())
                .unwrap(),
            Literal::int(1_000_000_000)
        );
    }
}
