//! Primitive-family scalars: `Long`, `Short`, `Byte`, `BigInteger`,
//! `BigDecimal` and `Char`.
//!
//! Numeric inputs are converted through an exact decimal and narrowed without
//! loss: `2.5` is never a `Long` and `200` is never a `Byte`.

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::ToPrimitive;

use super::decimal::{number_ish, parse_decimal, to_exact_integer};
use crate::Result;
use crate::coercing::Coercing;
use crate::context::CoercingContext;
use crate::error::{CoercingError, ErrorKind};
use crate::literal::{Literal, Variables};
use crate::value::Value;

// =============================================================================
// Long / Short / Byte
// =============================================================================

/// Fixed-width signed integer targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegerWidth {
    /// 8-bit
    Byte,
    /// 16-bit
    Short,
    /// 64-bit
    Long,
}

impl IntegerWidth {
    fn name(self) -> &'static str {
        match self {
            Self::Byte => "Byte",
            Self::Short => "Short",
            Self::Long => "Long",
        }
    }

    fn narrow(self, value: &BigInt) -> Option<Value> {
        match self {
            Self::Byte => value.to_i8().map(Value::Byte),
            Self::Short => value.to_i16().map(Value::Short),
            Self::Long => value.to_i64().map(Value::Long),
        }
    }

    fn is_native(self, value: &Value) -> bool {
        matches!(
            (self, value),
            (Self::Byte, Value::Byte(_)) | (Self::Short, Value::Short(_)) | (Self::Long, Value::Long(_))
        )
    }
}

/// Exact narrowing into a fixed-width signed integer.
#[derive(Debug, Clone, Copy)]
pub struct IntegerCoercing {
    width: IntegerWidth,
}

impl IntegerCoercing {
    pub const fn new(width: IntegerWidth) -> Self {
        Self { width }
    }

    fn convert(&self, input: &Value, kind: ErrorKind) -> Result<Value> {
        if self.width.is_native(input) {
            return Ok(input.clone());
        }
        number_ish(input)
            .and_then(|d| to_exact_integer(&d))
            .and_then(|i| self.width.narrow(&i))
            .ok_or_else(|| {
                kind.error(format!(
                    "Expected type '{}' but was '{}'.",
                    self.width.name(),
                    input.type_name()
                ))
            })
    }
}

impl Coercing for IntegerCoercing {
    fn serialize(&self, value: &Value, _ctx: &CoercingContext) -> Result<Value> {
        self.convert(value, ErrorKind::Serialize)
    }

    fn parse_value(&self, input: &Value, _ctx: &CoercingContext) -> Result<Value> {
        self.convert(input, ErrorKind::ParseValue)
    }

    fn parse_literal(
        &self,
        input: &Literal,
        _variables: &Variables,
        _ctx: &CoercingContext,
    ) -> Result<Value> {
        let name = self.width.name();
        let integer = match input {
            Literal::Int(i) => i.clone(),
            Literal::String(s) => parse_decimal(s)
                .and_then(|d| to_exact_integer(&d))
                .ok_or_else(|| {
                    CoercingError::parse_literal(format!(
                        "Expected value to be a {name} but it was '{s}'"
                    ))
                })?,
            other => {
                return Err(CoercingError::parse_literal(format!(
                    "Expected AST type 'IntValue' or 'StringValue' but was '{}'.",
                    other.kind_name()
                )));
            }
        };
        self.width.narrow(&integer).ok_or_else(|| {
            CoercingError::parse_literal(format!(
                "Expected value to be in the {name} range but it was '{integer}'"
            ))
        })
    }

    fn value_to_literal(&self, value: &Value, ctx: &CoercingContext) -> Result<Literal> {
        match self.serialize(value, ctx)? {
            Value::Byte(v) => Ok(Literal::int(v)),
            Value::Short(v) => Ok(Literal::int(v)),
            Value::Long(v) => Ok(Literal::int(v)),
            other => Err(CoercingError::serialize(format!(
                "Expected type '{}' but was '{}'.",
                self.width.name(),
                other.type_name()
            ))),
        }
    }
}

// =============================================================================
// BigInteger
// =============================================================================

/// Arbitrary precision integers.
#[derive(Debug, Clone, Copy, Default)]
pub struct BigIntegerCoercing;

impl BigIntegerCoercing {
    fn convert(input: &Value, kind: ErrorKind) -> Result<BigInt> {
        if let Value::BigInteger(i) = input {
            return Ok(i.clone());
        }
        number_ish(input)
            .and_then(|d| to_exact_integer(&d))
            .ok_or_else(|| {
                kind.error(format!(
                    "Expected type 'BigInteger' but was '{}'.",
                    input.type_name()
                ))
            })
    }

    fn unparseable(input: &Literal) -> CoercingError {
        CoercingError::parse_literal(format!(
            "Unable to turn AST input into a 'BigInteger' : '{input}'"
        ))
    }
}

impl Coercing for BigIntegerCoercing {
    fn serialize(&self, value: &Value, _ctx: &CoercingContext) -> Result<Value> {
        Self::convert(value, ErrorKind::Serialize).map(Value::BigInteger)
    }

    fn parse_value(&self, input: &Value, _ctx: &CoercingContext) -> Result<Value> {
        Self::convert(input, ErrorKind::ParseValue).map(Value::BigInteger)
    }

    fn parse_literal(
        &self,
        input: &Literal,
        _variables: &Variables,
        _ctx: &CoercingContext,
    ) -> Result<Value> {
        let integer = match input {
            Literal::Int(i) => i.clone(),
            Literal::String(s) => parse_decimal(s)
                .and_then(|d| to_exact_integer(&d))
                .ok_or_else(|| Self::unparseable(input))?,
            Literal::Float(d) => to_exact_integer(d).ok_or_else(|| Self::unparseable(input))?,
            other => {
                return Err(CoercingError::parse_literal(format!(
                    "Expected AST type 'IntValue', 'StringValue' or 'FloatValue' but was '{}'.",
                    other.kind_name()
                )));
            }
        };
        Ok(Value::BigInteger(integer))
    }

    fn value_to_literal(&self, value: &Value, _ctx: &CoercingContext) -> Result<Literal> {
        Self::convert(value, ErrorKind::Serialize).map(Literal::Int)
    }
}

// =============================================================================
// BigDecimal
// =============================================================================

/// Arbitrary precision decimals.
#[derive(Debug, Clone, Copy, Default)]
pub struct BigDecimalCoercing;

impl BigDecimalCoercing {
    fn convert(input: &Value, kind: ErrorKind) -> Result<BigDecimal> {
        number_ish(input).ok_or_else(|| {
            kind.error(format!(
                "Expected type 'BigDecimal' but was '{}'.",
                input.type_name()
            ))
        })
    }
}

impl Coercing for BigDecimalCoercing {
    fn serialize(&self, value: &Value, _ctx: &CoercingContext) -> Result<Value> {
        Self::convert(value, ErrorKind::Serialize).map(Value::BigDecimal)
    }

    fn parse_value(&self, input: &Value, _ctx: &CoercingContext) -> Result<Value> {
        Self::convert(input, ErrorKind::ParseValue).map(Value::BigDecimal)
    }

    fn parse_literal(
        &self,
        input: &Literal,
        _variables: &Variables,
        _ctx: &CoercingContext,
    ) -> Result<Value> {
        let decimal = match input {
            Literal::Int(i) => BigDecimal::from(i.clone()),
            Literal::Float(d) => d.clone(),
            Literal::String(s) => parse_decimal(s).ok_or_else(|| {
                CoercingError::parse_literal(format!(
                    "Unable to turn AST input into a 'BigDecimal' : '{input}'"
                ))
            })?,
            other => {
                return Err(CoercingError::parse_literal(format!(
                    "Expected AST type 'IntValue', 'StringValue' or 'FloatValue' but was '{}'.",
                    other.kind_name()
                )));
            }
        };
        Ok(Value::BigDecimal(decimal))
    }

    fn value_to_literal(&self, value: &Value, _ctx: &CoercingContext) -> Result<Literal> {
        Self::convert(value, ErrorKind::Serialize).map(Literal::Float)
    }
}

// =============================================================================
// Char
// =============================================================================

/// A single character.
#[derive(Debug, Clone, Copy, Default)]
pub struct CharCoercing;

impl CharCoercing {
    fn single_char(s: &str) -> Option<char> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    }

    fn convert(input: &Value, kind: ErrorKind) -> Result<char> {
        let converted = match input {
            Value::Char(c) => Some(*c),
            Value::String(s) => Self::single_char(s),
            _ => None,
        };
        converted.ok_or_else(|| {
            kind.error(format!(
                "Expected type 'Char' but was '{}'.",
                input.type_name()
            ))
        })
    }
}

impl Coercing for CharCoercing {
    fn serialize(&self, value: &Value, _ctx: &CoercingContext) -> Result<Value> {
        Self::convert(value, ErrorKind::Serialize).map(Value::Char)
    }

    fn parse_value(&self, input: &Value, _ctx: &CoercingContext) -> Result<Value> {
        Self::convert(input, ErrorKind::ParseValue).map(Value::Char)
    }

    fn parse_literal(
        &self,
        input: &Literal,
        _variables: &Variables,
        _ctx: &CoercingContext,
    ) -> Result<Value> {
        match input {
            Literal::String(s) => Self::single_char(s).map(Value::Char).ok_or_else(|| {
                CoercingError::parse_literal(format!(
                    "Expected a 'StringValue' of length 1 but was '{s}'."
                ))
            }),
            other => Err(CoercingError::parse_literal(format!(
                "Expected AST type 'StringValue' but was '{}'.",
                other.kind_name()
            ))),
        }
    }

    fn value_to_literal(&self, value: &Value, _ctx: &CoercingContext) -> Result<Literal> {
        Self::convert(value, ErrorKind::Serialize).map(|c| Literal::String(c.to_string()))
    }
}
