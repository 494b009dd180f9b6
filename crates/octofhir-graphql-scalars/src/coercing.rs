//! The coercion contract and the scalar definition record.
//!
//! A scalar is an immutable [`ScalarDefinition`]: a name, documentation and
//! one shared [`Coercing`] implementation. Definitions are cheap to clone and
//! safe to use from any number of concurrent executions.

use std::fmt;
use std::sync::{Arc, LazyLock};

use crate::Result;
use crate::context::CoercingContext;
use crate::error::BuildError;
use crate::literal::{Literal, Variables};
use crate::value::Value;

/// GraphQL name grammar: `/[_A-Za-z][_0-9A-Za-z]*/`.
static NAME_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^[_A-Za-z][_0-9A-Za-z]*$").expect("Invalid GraphQL name regex")
});

/// Bidirectional conversion between runtime values, wire values and literals.
///
/// Implementations must be stateless: every method is a pure function of its
/// arguments and constants fixed at construction.
///
/// Each method reports failures with the [`crate::CoercingError`] variant
/// matching the operation: `serialize` raises `Serialize`, `parse_value`
/// raises `ParseValue`, `parse_literal` raises `ParseLiteral`.
pub trait Coercing: Send + Sync + fmt::Debug {
    /// Runtime value produced by a resolver to its wire representation.
    fn serialize(&self, value: &Value, ctx: &CoercingContext) -> Result<Value>;

    /// Variable value decoded from the request to its runtime representation.
    fn parse_value(&self, input: &Value, ctx: &CoercingContext) -> Result<Value>;

    /// Literal from query text to its runtime representation.
    fn parse_literal(
        &self,
        input: &Literal,
        variables: &Variables,
        ctx: &CoercingContext,
    ) -> Result<Value>;

    /// Runtime value back to a literal.
    ///
    /// The default serializes the value and wraps the result in a string
    /// literal. Numeric and structural scalars override it to keep their
    /// literal kind.
    fn value_to_literal(&self, value: &Value, ctx: &CoercingContext) -> Result<Literal> {
        let serialized = self.serialize(value, ctx)?;
        Ok(Literal::String(serialized.to_string()))
    }
}

/// A named scalar type: identity, documentation and its coercion.
#[derive(Clone)]
pub struct ScalarDefinition {
    name: String,
    description: Option<String>,
    specified_by_url: Option<String>,
    coercing: Arc<dyn Coercing>,
}

impl ScalarDefinition {
    pub fn new(name: impl Into<String>, coercing: impl Coercing + 'static) -> Self {
        Self::from_shared(name, Arc::new(coercing))
    }

    /// Creates a definition around an already shared coercion.
    pub fn from_shared(name: impl Into<String>, coercing: Arc<dyn Coercing>) -> Self {
        Self {
            name: name.into(),
            description: None,
            specified_by_url: None,
            coercing,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_specified_by_url(mut self, url: impl Into<String>) -> Self {
        self.specified_by_url = Some(url.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn specified_by_url(&self) -> Option<&str> {
        self.specified_by_url.as_deref()
    }

    pub fn coercing(&self) -> &Arc<dyn Coercing> {
        &self.coercing
    }

    pub fn serialize(&self, value: &Value, ctx: &CoercingContext) -> Result<Value> {
        self.coercing.serialize(value, ctx)
    }

    pub fn parse_value(&self, input: &Value, ctx: &CoercingContext) -> Result<Value> {
        self.coercing.parse_value(input, ctx)
    }

    pub fn parse_literal(
        &self,
        input: &Literal,
        variables: &Variables,
        ctx: &CoercingContext,
    ) -> Result<Value> {
        self.coercing.parse_literal(input, variables, ctx)
    }

    pub fn value_to_literal(&self, value: &Value, ctx: &CoercingContext) -> Result<Literal> {
        self.coercing.value_to_literal(value, ctx)
    }
}

impl fmt::Debug for ScalarDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScalarDefinition")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("specified_by_url", &self.specified_by_url)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for ScalarDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Checks a scalar name against the GraphQL name grammar.
///
/// Names starting with `__` are reserved for introspection.
pub fn validate_name(name: &str) -> std::result::Result<(), BuildError> {
    if NAME_REGEX.is_match(name) && !name.starts_with("__") {
        Ok(())
    } else {
        Err(BuildError::InvalidName(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CoercingError;

    /// Accepts strings only, upper-casing them on the way in.
    #[derive(Debug)]
    struct Shout;

    impl Coercing for Shout {
        fn serialize(&self, value: &Value, _ctx: &CoercingContext) -> Result<Value> {
            match value {
                Value::String(s) => Ok(Value::String(s.to_uppercase())),
                other => Err(CoercingError::serialize(format!(
                    "Expected a 'String' but was '{}'.",
                    other.type_name()
                ))),
            }
        }

        fn parse_value(&self, input: &Value, ctx: &CoercingContext) -> Result<Value> {
            self.serialize(input, ctx)
                .map_err(|e| e.with_kind(crate::ErrorKind::ParseValue))
        }

        fn parse_literal(
            &self,
            input: &Literal,
            _variables: &Variables,
            _ctx: &CoercingContext,
        ) -> Result<Value> {
            match input {
                Literal::String(s) => Ok(Value::String(s.to_uppercase())),
                other => Err(CoercingError::parse_literal(other.kind_name())),
            }
        }
    }

    #[test]
    fn test_definition_forwards_to_coercing() {
        let def = ScalarDefinition::new("Shout", Shout).with_description("Loud strings");
        let ctx = CoercingContext::new();
        assert_eq!(def.name(), "Shout");
        assert_eq!(def.description(), Some("Loud strings"));
        assert_eq!(def.specified_by_url(), None);
        assert_eq!(
            def.serialize(&Value::from("hi"), &ctx).unwrap(),
            Value::from("HI")
        );
        assert!(matches!(
            def.parse_value(&Value::Int(1), &ctx),
            Err(CoercingError::ParseValue(_))
        ));
        assert!(matches!(
            def.parse_literal(&Literal::int(1), &Variables::new(), &ctx),
            Err(CoercingError::ParseLiteral(_))
        ));
    }

    #[test]
    fn test_default_value_to_literal_wraps_string() {
        let def = ScalarDefinition::new("Shout", Shout);
        let ctx = CoercingContext::new();
        assert_eq!(
            def.value_to_literal(&Value::from("abc"), &ctx).unwrap(),
            Literal::string("ABC")
        );
        assert!(matches!(
            def.value_to_literal(&Value::Null, &ctx),
            Err(CoercingError::Serialize(_))
        ));
    }

    #[test]
    fn test_clone_shares_coercing() {
        let def = ScalarDefinition::new("Shout", Shout);
        let copy = def.clone();
        assert!(Arc::ptr_eq(def.coercing(), copy.coercing()));
    }

    #[test]
    fn test_validate_name() {
        for valid in ["Long", "_private", "Hex_Color2"] {
            assert!(validate_name(valid).is_ok(), "{valid}");
        }
        for invalid in ["", "1abc", "has space", "kebab-case", "__Reserved"] {
            assert!(validate_name(invalid).is_err(), "{invalid}");
        }
    }
}
