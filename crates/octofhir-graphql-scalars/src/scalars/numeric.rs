//! Sign-constrained `Int` and `Float` scalars.
//!
//! Every operation first runs the built-in coercion, whose own failures pass
//! through untouched, then checks the sign of the result. A failed check is
//! reported with the error kind of the calling operation.

use super::builtin::{FloatCoercing, IntCoercing};
use crate::Result;
use crate::coercing::Coercing;
use crate::context::CoercingContext;
use crate::error::ErrorKind;
use crate::literal::{Literal, Variables};
use crate::value::Value;

/// Which side of zero a value must fall on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignConstraint {
    /// `> 0`
    Positive,
    /// `< 0`
    Negative,
    /// `>= 0`
    NonNegative,
    /// `<= 0`
    NonPositive,
}

impl SignConstraint {
    fn accepts(self, value: f64) -> bool {
        match self {
            Self::Positive => value > 0.0,
            Self::Negative => value < 0.0,
            Self::NonNegative => value >= 0.0,
            Self::NonPositive => value <= 0.0,
        }
    }
}

/// The built-in scalar a constrained scalar narrows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericBase {
    Int,
    Float,
}

impl NumericBase {
    fn coercing(self) -> &'static dyn Coercing {
        match self {
            Self::Int => &IntCoercing,
            Self::Float => &FloatCoercing,
        }
    }
}

/// `Int` or `Float` coercion followed by a sign check.
#[derive(Debug, Clone, Copy)]
pub struct SignedNumberCoercing {
    base: NumericBase,
    constraint: SignConstraint,
}

impl SignedNumberCoercing {
    pub const fn new(base: NumericBase, constraint: SignConstraint) -> Self {
        Self { base, constraint }
    }

    pub fn base(&self) -> NumericBase {
        self.base
    }

    pub fn constraint(&self) -> SignConstraint {
        self.constraint
    }

    fn message(&self) -> &'static str {
        match (self.constraint, self.base) {
            (SignConstraint::Positive, NumericBase::Int) => "The value must be a positive integer",
            (SignConstraint::Negative, NumericBase::Int) => "The value must be a negative integer",
            (SignConstraint::Positive, NumericBase::Float) => "The value must be a positive value",
            (SignConstraint::Negative, NumericBase::Float) => "The value must be a negative value",
            (SignConstraint::NonNegative, _) => "The value must be greater than or equal to zero",
            (SignConstraint::NonPositive, _) => "The value must be less than or equal to zero",
        }
    }

    fn check(&self, value: Value, kind: ErrorKind) -> Result<Value> {
        let magnitude = match &value {
            Value::Int(i) => f64::from(*i),
            Value::Float(f) => *f,
            _ => return Err(kind.error(self.message())),
        };
        if self.constraint.accepts(magnitude) {
            Ok(value)
        } else {
            Err(kind.error(self.message()))
        }
    }
}

impl Coercing for SignedNumberCoercing {
    fn serialize(&self, value: &Value, ctx: &CoercingContext) -> Result<Value> {
        let converted = self.base.coercing().serialize(value, ctx)?;
        self.check(converted, ErrorKind::Serialize)
    }

    fn parse_value(&self, input: &Value, ctx: &CoercingContext) -> Result<Value> {
        let converted = self.base.coercing().parse_value(input, ctx)?;
        self.check(converted, ErrorKind::ParseValue)
    }

    fn parse_literal(
        &self,
        input: &Literal,
        variables: &Variables,
        ctx: &CoercingContext,
    ) -> Result<Value> {
        let converted = self.base.coercing().parse_literal(input, variables, ctx)?;
        self.check(converted, ErrorKind::ParseLiteral)
    }

    fn value_to_literal(&self, value: &Value, ctx: &CoercingContext) -> Result<Literal> {
        self.base.coercing().value_to_literal(value, ctx)
    }
}
