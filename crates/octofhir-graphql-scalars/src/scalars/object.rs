//! Schema-less `Object` scalar, also registered as `JSON`.

use crate::Result;
use crate::coercing::Coercing;
use crate::context::CoercingContext;
use crate::error::CoercingError;
use crate::literal::{Literal, Variables};
use crate::value::Value;

/// Passes runtime values through untouched and maps literals structurally.
///
/// Integer literals become [`Value::BigInteger`] and float literals
/// [`Value::BigDecimal`], so nothing is lost to a narrower representation.
/// A variable reference with no binding resolves to `null`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ObjectCoercing;

impl ObjectCoercing {
    fn literal_to_value(input: &Literal, variables: &Variables) -> Value {
        match input {
            Literal::Null => Value::Null,
            Literal::Boolean(b) => Value::Boolean(*b),
            Literal::Int(i) => Value::BigInteger(i.clone()),
            Literal::Float(f) => Value::BigDecimal(f.clone()),
            Literal::String(s) | Literal::Enum(s) => Value::String(s.clone()),
            Literal::Variable(name) => variables.get(name).cloned().unwrap_or(Value::Null),
            Literal::List(items) => Value::List(
                items
                    .iter()
                    .map(|item| Self::literal_to_value(item, variables))
                    .collect(),
            ),
            Literal::Object(fields) => Value::Object(
                fields
                    .iter()
                    .map(|(name, field)| (name.clone(), Self::literal_to_value(field, variables)))
                    .collect(),
            ),
        }
    }

    fn to_literal(value: &Value) -> Result<Literal> {
        let literal = match value {
            Value::Null => Literal::Null,
            Value::Boolean(b) => Literal::Boolean(*b),
            Value::Byte(v) => Literal::int(*v),
            Value::Short(v) => Literal::int(*v),
            Value::Int(v) => Literal::int(*v),
            Value::Long(v) => Literal::int(*v),
            Value::BigInteger(v) => Literal::Int(v.clone()),
            Value::Float(_) | Value::BigDecimal(_) => match value.to_big_decimal() {
                Some(decimal) => Literal::Float(decimal),
                None => return Err(Self::unsupported(value)),
            },
            Value::Char(c) => Literal::String(c.to_string()),
            Value::String(s) => Literal::String(s.clone()),
            Value::List(items) => Literal::List(
                items
                    .iter()
                    .map(Self::to_literal)
                    .collect::<Result<_>>()?,
            ),
            Value::Object(fields) => Literal::Object(
                fields
                    .iter()
                    .map(|(name, field)| {
                        Self::to_literal(field).map(|literal| (name.clone(), literal))
                    })
                    .collect::<Result<_>>()?,
            ),
            other => return Err(Self::unsupported(other)),
        };
        Ok(literal)
    }

    fn unsupported(value: &Value) -> CoercingError {
        CoercingError::unsupported_value(format!(
            "The ObjectScalar cant handle values of type : '{}'",
            value.type_name()
        ))
    }
}

impl Coercing for ObjectCoercing {
    fn serialize(&self, value: &Value, _ctx: &CoercingContext) -> Result<Value> {
        Ok(value.clone())
    }

    fn parse_value(&self, input: &Value, _ctx: &CoercingContext) -> Result<Value> {
        Ok(input.clone())
    }

    fn parse_literal(
        &self,
        input: &Literal,
        variables: &Variables,
        _ctx: &CoercingContext,
    ) -> Result<Value> {
        Ok(Self::literal_to_value(input, variables))
    }

    fn value_to_literal(&self, value: &Value, _ctx: &CoercingContext) -> Result<Literal> {
        Self::to_literal(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;
    use indexmap::IndexMap;
    use num_bigint::BigInt;
    use std::str::FromStr;
    use time::macros::date;

    fn ctx() -> CoercingContext {
        CoercingContext::new()
    }

    fn object<const N: usize, T: Clone>(fields: [(&str, T); N]) -> IndexMap<String, T> {
        fields
            .into_iter()
            .map(|(name, value)| (name.to_string(), value))
            .collect()
    }

    #[test]
    fn test_serialize_and_parse_value_are_identity() {
        let inputs = vec![
            Value::Null,
            Value::from("text"),
            Value::Long(42),
            Value::from(date!(2024 - 01 - 01)),
            Value::List(vec![Value::Boolean(true), Value::Null]),
            Value::Object(object([("a", Value::Int(1))])),
        ];
        for input in inputs {
            assert_eq!(ObjectCoercing.serialize(&input, &ctx()).unwrap(), input);
            assert_eq!(ObjectCoercing.parse_value(&input, &ctx()).unwrap(), input);
        }
    }

    #[test]
    fn test_parse_literal_keeps_order_and_nulls() {
        let literal = Literal::Object(object([
            ("a", Literal::Null),
            (
                "b",
                Literal::List(vec![Literal::int(1), Literal::string("x")]),
            ),
            ("c", Literal::Enum("RED".into())),
            ("d", Literal::Float(BigDecimal::from_str("1.50").unwrap())),
        ]));
        let parsed = ObjectCoercing
            .parse_literal(&literal, &Variables::new(), &ctx())
            .unwrap();
        let Value::Object(fields) = parsed else {
            panic!("expected an object, got {parsed:?}");
        };
        assert_eq!(fields.keys().collect::<Vec<_>>(), ["a", "b", "c", "d"]);
        assert_eq!(fields["a"], Value::Null);
        assert_eq!(
            fields["b"],
            Value::List(vec![Value::BigInteger(BigInt::from(1)), Value::from("x")])
        );
        assert_eq!(fields["c"], Value::from("RED"));
        assert_eq!(
            fields["d"],
            Value::BigDecimal(BigDecimal::from_str("1.50").unwrap())
        );
    }

    #[test]
    fn test_parse_literal_resolves_variables() {
        let variables: Variables = [("id", Value::from("abc"))].into_iter().collect();
        let literal = Literal::List(vec![
            Literal::Variable("id".into()),
            Literal::Variable("missing".into()),
        ]);
        assert_eq!(
            ObjectCoercing
                .parse_literal(&literal, &variables, &ctx())
                .unwrap(),
            Value::List(vec![Value::from("abc"), Value::Null])
        );
    }

    #[test]
    fn test_value_to_literal() {
        let value = Value::Object(object([
            ("n", Value::Null),
            ("i", Value::Short(7)),
            ("f", Value::Float(0.5)),
            ("s", Value::List(vec![Value::Char('z'), Value::Boolean(false)])),
        ]));
        assert_eq!(
            ObjectCoercing.value_to_literal(&value, &ctx()).unwrap(),
            Literal::Object(object([
                ("n", Literal::Null),
                ("i", Literal::int(7)),
                ("f", Literal::Float(BigDecimal::from_str("0.5").unwrap())),
                (
                    "s",
                    Literal::List(vec![Literal::string("z"), Literal::Boolean(false)])
                ),
            ]))
        );
    }

    #[test]
    fn test_value_to_literal_unsupported_is_fatal() {
        let nested = Value::List(vec![Value::Int(1), Value::from(date!(2024 - 01 - 01))]);
        let err = ObjectCoercing.value_to_literal(&nested, &ctx()).unwrap_err();
        assert!(err.is_fatal());
        assert_eq!(
            err,
            CoercingError::UnsupportedValue(
                "The ObjectScalar cant handle values of type : 'Date'".into()
            )
        );
        assert!(ObjectCoercing
            .value_to_literal(&Value::Float(f64::NAN), &ctx())
            .unwrap_err()
            .is_fatal());
    }
}
