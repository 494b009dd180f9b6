//! The standard GraphQL `Int` and `Float` coercions.
//!
//! The range-constrained scalars delegate to these before applying their own
//! predicate, so an out-of-range literal fails exactly as it would for `Int`.

use std::sync::LazyLock;

use bigdecimal::BigDecimal;
use num_traits::ToPrimitive;

use super::decimal::{number, number_ish, to_exact_integer};
use crate::Result;
use crate::coercing::{Coercing, ScalarDefinition};
use crate::context::CoercingContext;
use crate::error::{CoercingError, ErrorKind};
use crate::literal::{Literal, Variables};
use crate::value::Value;

pub static INT: LazyLock<ScalarDefinition> =
    LazyLock::new(|| ScalarDefinition::new("Int", IntCoercing).with_description("Built-in Int"));

pub static FLOAT: LazyLock<ScalarDefinition> = LazyLock::new(|| {
    ScalarDefinition::new("Float", FloatCoercing).with_description("Built-in Float")
});

/// Coercion of the built-in 32-bit `Int` scalar.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntCoercing;

impl IntCoercing {
    fn convert(decimal: Option<BigDecimal>) -> Option<i32> {
        to_exact_integer(&decimal?)?.to_i32()
    }

    fn mismatch(kind: ErrorKind, value: &Value) -> CoercingError {
        kind.error(format!(
            "Expected a value that can be converted to type 'Int' but it was a '{}'",
            value.type_name()
        ))
    }
}

impl Coercing for IntCoercing {
    fn serialize(&self, value: &Value, _ctx: &CoercingContext) -> Result<Value> {
        Self::convert(number_ish(value))
            .map(Value::Int)
            .ok_or_else(|| Self::mismatch(ErrorKind::Serialize, value))
    }

    fn parse_value(&self, input: &Value, _ctx: &CoercingContext) -> Result<Value> {
        Self::convert(number(input))
            .map(Value::Int)
            .ok_or_else(|| Self::mismatch(ErrorKind::ParseValue, input))
    }

    fn parse_literal(
        &self,
        input: &Literal,
        _variables: &Variables,
        _ctx: &CoercingContext,
    ) -> Result<Value> {
        match input {
            Literal::Int(i) => i.to_i32().map(Value::Int).ok_or_else(|| {
                CoercingError::parse_literal(format!(
                    "Expected value to be in the Integer range but it was '{i}'"
                ))
            }),
            other => Err(CoercingError::parse_literal(format!(
                "Expected AST type 'IntValue' but was '{}'.",
                other.kind_name()
            ))),
        }
    }

    fn value_to_literal(&self, value: &Value, _ctx: &CoercingContext) -> Result<Literal> {
        Self::convert(number_ish(value))
            .map(Literal::int)
            .ok_or_else(|| Self::mismatch(ErrorKind::Serialize, value))
    }
}

/// Coercion of the built-in double precision `Float` scalar.
#[derive(Debug, Clone, Copy, Default)]
pub struct FloatCoercing;

impl FloatCoercing {
    fn convert(decimal: Option<BigDecimal>) -> Option<f64> {
        decimal?.to_f64().filter(|f| f.is_finite())
    }

    fn mismatch(kind: ErrorKind, value: &Value) -> CoercingError {
        kind.error(format!(
            "Expected a value that can be converted to type 'Float' but it was a '{}'",
            value.type_name()
        ))
    }
}

impl Coercing for FloatCoercing {
    fn serialize(&self, value: &Value, _ctx: &CoercingContext) -> Result<Value> {
        Self::convert(number_ish(value))
            .map(Value::Float)
            .ok_or_else(|| Self::mismatch(ErrorKind::Serialize, value))
    }

    fn parse_value(&self, input: &Value, _ctx: &CoercingContext) -> Result<Value> {
        Self::convert(number(input))
            .map(Value::Float)
            .ok_or_else(|| Self::mismatch(ErrorKind::ParseValue, input))
    }

    fn parse_literal(
        &self,
        input: &Literal,
        _variables: &Variables,
        _ctx: &CoercingContext,
    ) -> Result<Value> {
        let converted = match input {
            Literal::Int(i) => i.to_f64(),
            Literal::Float(d) => d.to_f64(),
            other => {
                return Err(CoercingError::parse_literal(format!(
                    "Expected AST type 'IntValue' or 'FloatValue' but was '{}'.",
                    other.kind_name()
                )));
            }
        };
        converted
            .filter(|f| f.is_finite())
            .map(Value::Float)
            .ok_or_else(|| {
                CoercingError::parse_literal(format!(
                    "Expected value to be in the Float range but it was '{input}'"
                ))
            })
    }

    fn value_to_literal(&self, value: &Value, _ctx: &CoercingContext) -> Result<Literal> {
        let converted = Self::convert(number_ish(value))
            .ok_or_else(|| Self::mismatch(ErrorKind::Serialize, value))?;
        Value::Float(converted)
            .to_big_decimal()
            .map(Literal::Float)
            .ok_or_else(|| Self::mismatch(ErrorKind::Serialize, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;
    use std::str::FromStr;

    fn ctx() -> CoercingContext {
        CoercingContext::new()
    }

    #[test]
    fn test_int_serialize_accepts_numbers_and_numeric_strings() {
        let valid = vec![
            (Value::Int(5), 5),
            (Value::Long(-7), -7),
            (Value::Float(3.0), 3),
            (Value::from("42"), 42),
            (Value::from("1e2"), 100),
        ];
        for (input, expected) in valid {
            assert_eq!(
                IntCoercing.serialize(&input, &ctx()).unwrap(),
                Value::Int(expected),
                "{input}"
            );
        }
        let invalid = vec![
            Value::Float(3.5),
            Value::Long(i64::from(i32::MAX) + 1),
            Value::from("abc"),
            Value::Boolean(true),
        ];
        for input in invalid {
            assert!(matches!(
                IntCoercing.serialize(&input, &ctx()),
                Err(CoercingError::Serialize(_))
            ));
        }
    }

    #[test]
    fn test_int_parse_value_rejects_strings() {
        assert_eq!(
            IntCoercing.parse_value(&Value::Long(9), &ctx()).unwrap(),
            Value::Int(9)
        );
        let err = IntCoercing.parse_value(&Value::from("9"), &ctx()).unwrap_err();
        assert_eq!(
            err,
            CoercingError::ParseValue(
                "Expected a value that can be converted to type 'Int' but it was a 'String'"
                    .into()
            )
        );
    }

    #[test]
    fn test_int_parse_literal() {
        let vars = Variables::new();
        assert_eq!(
            IntCoercing
                .parse_literal(&Literal::int(12), &vars, &ctx())
                .unwrap(),
            Value::Int(12)
        );
        let too_big = Literal::Int(BigInt::from(i64::from(i32::MAX) + 1));
        let err = IntCoercing
            .parse_literal(&too_big, &vars, &ctx())
            .unwrap_err();
        assert_eq!(
            err.message(),
            "Expected value to be in the Integer range but it was '2147483648'"
        );
        assert!(
            IntCoercing
                .parse_literal(&Literal::string("1"), &vars, &ctx())
                .is_err()
        );
    }

    #[test]
    fn test_float_coercion() {
        let vars = Variables::new();
        assert_eq!(
            FloatCoercing.serialize(&Value::from("1.5"), &ctx()).unwrap(),
            Value::Float(1.5)
        );
        assert_eq!(
            FloatCoercing.parse_value(&Value::Int(2), &ctx()).unwrap(),
            Value::Float(2.0)
        );
        assert!(
            FloatCoercing
                .parse_value(&Value::Float(f64::INFINITY), &ctx())
                .is_err()
        );
        assert_eq!(
            FloatCoercing
                .parse_literal(&Literal::int(3), &vars, &ctx())
                .unwrap(),
            Value::Float(3.0)
        );
        assert_eq!(
            FloatCoercing
                .parse_literal(
                    &Literal::Float(BigDecimal::from_str("0.25").unwrap()),
                    &vars,
                    &ctx()
                )
                .unwrap(),
            Value::Float(0.25)
        );
        assert!(matches!(
            FloatCoercing.parse_literal(&Literal::string("1.0"), &vars, &ctx()),
            Err(CoercingError::ParseLiteral(_))
        ));
    }

    #[test]
    fn test_value_to_literal_keeps_numeric_kind() {
        assert_eq!(
            IntCoercing.value_to_literal(&Value::Int(4), &ctx()).unwrap(),
            Literal::int(4)
        );
        assert_eq!(
            FloatCoercing
                .value_to_literal(&Value::Float(0.5), &ctx())
                .unwrap(),
            Literal::Float(BigDecimal::from_str("0.5").unwrap())
        );
    }
}
