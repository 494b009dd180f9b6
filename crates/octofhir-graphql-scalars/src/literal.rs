//! GraphQL AST literals and variable bindings.
//!
//! [`Literal`] mirrors the value nodes of the query syntax tree. Unlike the
//! host engine's value type it keeps integer and float literals apart and at
//! full precision, which the numeric scalars need for exact range checks.

use std::fmt;
use std::str::FromStr;

use async_graphql_value::Value as AstValue;
use bigdecimal::BigDecimal;
use indexmap::IndexMap;
use num_bigint::BigInt;

use crate::value::Value;

/// A literal value node from query text.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Null,
    Boolean(bool),
    Int(BigInt),
    Float(BigDecimal),
    String(String),
    Enum(String),
    Variable(String),
    List(Vec<Literal>),
    Object(IndexMap<String, Literal>),
}

impl Literal {
    /// Name of the AST node kind, used in error messages.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Literal::Null => "NullValue",
            Literal::Boolean(_) => "BooleanValue",
            Literal::Int(_) => "IntValue",
            Literal::Float(_) => "FloatValue",
            Literal::String(_) => "StringValue",
            Literal::Enum(_) => "EnumValue",
            Literal::Variable(_) => "VariableReference",
            Literal::List(_) => "ArrayValue",
            Literal::Object(_) => "ObjectValue",
        }
    }

    pub fn string(value: impl Into<String>) -> Self {
        Literal::String(value.into())
    }

    pub fn int(value: impl Into<BigInt>) -> Self {
        Literal::Int(value.into())
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Null => f.write_str("null"),
            Literal::Boolean(b) => write!(f, "{b}"),
            Literal::Int(i) => write!(f, "{i}"),
            Literal::Float(d) => {
                let text = d.to_string();
                // A float literal needs a fraction or exponent to stay a float.
                if text.contains(['.', 'e', 'E']) {
                    f.write_str(&text)
                } else {
                    write!(f, "{text}.0")
                }
            }
            Literal::String(s) => write_quoted(f, s),
            Literal::Enum(name) => f.write_str(name),
            Literal::Variable(name) => write!(f, "${name}"),
            Literal::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Literal::Object(fields) => {
                f.write_str("{")?;
                for (i, (name, value)) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{name}: {value}")?;
                }
                f.write_str("}")
            }
        }
    }
}

fn write_quoted(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    f.write_str("\"")?;
    for c in s.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            '\u{8}' => f.write_str("\\b")?,
            '\u{c}' => f.write_str("\\f")?,
            c if c.is_control() => write!(f, "\\u{:04X}", c as u32)?,
            c => write!(f, "{c}")?,
        }
    }
    f.write_str("\"")
}

/// Converts a parsed query value.
///
/// Numbers that fit a 64-bit integer become [`Literal::Int`], everything else
/// becomes [`Literal::Float`] from its exact text. Text that is not a decimal
/// is kept as a [`Literal::String`] so scalars can report it.
impl From<AstValue> for Literal {
    fn from(value: AstValue) -> Self {
        match value {
            AstValue::Variable(name) => Literal::Variable(name.to_string()),
            AstValue::Null => Literal::Null,
            AstValue::Boolean(b) => Literal::Boolean(b),
            AstValue::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Literal::Int(BigInt::from(i))
                } else if let Some(u) = n.as_u64() {
                    Literal::Int(BigInt::from(u))
                } else {
                    float_literal(n.to_string())
                }
            }
            AstValue::String(s) => Literal::String(s),
            AstValue::Enum(name) => Literal::Enum(name.to_string()),
            AstValue::Binary(bytes) => {
                Literal::String(String::from_utf8_lossy(&bytes).into_owned())
            }
            AstValue::List(items) => Literal::List(items.into_iter().map(Literal::from).collect()),
            AstValue::Object(fields) => Literal::Object(
                fields
                    .into_iter()
                    .map(|(k, v)| (k.to_string(), Literal::from(v)))
                    .collect(),
            ),
        }
    }
}

fn float_literal(text: String) -> Literal {
    match BigDecimal::from_str(&text) {
        Ok(d) => Literal::Float(d),
        Err(_) => Literal::String(text),
    }
}

/// Variable values bound for the operation being parsed, already coerced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Variables(IndexMap<String, Value>);

impl Variables {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Variables {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl From<async_graphql::Variables> for Variables {
    fn from(variables: async_graphql::Variables) -> Self {
        variables
            .iter()
            .map(|(name, value)| (name.to_string(), Value::from(value.clone())))
            .collect()
    }
}
