//! Factory for string scalars validated by regular expressions.

use regex::Regex;
use tracing::trace;

use crate::Result;
use crate::coercing::{Coercing, ScalarDefinition, validate_name};
use crate::context::CoercingContext;
use crate::error::{BuildError, ErrorKind};
use crate::literal::{Literal, Variables};
use crate::value::Value;

/// Builder for a scalar accepting strings that fully match one of its patterns.
///
/// ```
/// use octofhir_graphql_scalars::{CoercingContext, Value, scalars};
///
/// let code = scalars::new_regex_scalar("IsoCode")
///     .description("Three upper-case letters")
///     .add_pattern("[A-Z]{3}")
///     .build()
///     .unwrap();
/// let ctx = CoercingContext::new();
/// assert!(code.parse_value(&Value::from("ABC"), &ctx).is_ok());
/// assert!(code.parse_value(&Value::from("ABCD"), &ctx).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct RegexScalarBuilder {
    name: String,
    description: Option<String>,
    patterns: Vec<String>,
}

impl RegexScalarBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            patterns: Vec::new(),
        }
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Adds a pattern. Matching is always anchored at both ends.
    #[must_use]
    pub fn add_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.patterns.push(pattern.into());
        self
    }

    #[must_use]
    pub fn add_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.patterns.extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Compiles the patterns and builds the scalar.
    ///
    /// # Errors
    ///
    /// Fails on an invalid name, an empty pattern list or a pattern that
    /// does not compile.
    pub fn build(self) -> std::result::Result<ScalarDefinition, BuildError> {
        validate_name(&self.name)?;
        if self.patterns.is_empty() {
            return Err(BuildError::MissingPatterns(self.name));
        }
        let patterns = self
            .patterns
            .iter()
            .map(|pattern| Regex::new(&format!(r"\A(?:{pattern})\z")))
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|source| BuildError::InvalidPattern {
                name: self.name.clone(),
                source,
            })?;

        let coercing = RegexCoercing {
            name: self.name.clone(),
            patterns,
        };
        let definition = ScalarDefinition::new(self.name, coercing);
        Ok(match self.description {
            Some(description) => definition.with_description(description),
            None => definition,
        })
    }
}

#[derive(Debug)]
struct RegexCoercing {
    name: String,
    patterns: Vec<Regex>,
}

impl RegexCoercing {
    fn matches(&self, text: &str, kind: ErrorKind) -> Result<Value> {
        if self.patterns.iter().any(|pattern| pattern.is_match(text)) {
            return Ok(Value::String(text.to_string()));
        }
        trace!(scalar = %self.name, input = text, "value rejected by regex scalar");
        Err(kind.error(format!(
            "Unable to accept a value into the '{}' scalar.  It does not match the regular expressions.",
            self.name
        )))
    }

    fn stringify(value: &Value) -> String {
        match value {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        }
    }
}

impl Coercing for RegexCoercing {
    fn serialize(&self, value: &Value, _ctx: &CoercingContext) -> Result<Value> {
        self.matches(&Self::stringify(value), ErrorKind::Serialize)
    }

    fn parse_value(&self, input: &Value, _ctx: &CoercingContext) -> Result<Value> {
        self.matches(&Self::stringify(input), ErrorKind::ParseValue)
    }

    fn parse_literal(
        &self,
        input: &Literal,
        _variables: &Variables,
        _ctx: &CoercingContext,
    ) -> Result<Value> {
        let text = super::string_literal(input)?;
        self.matches(text, ErrorKind::ParseLiteral)
    }
}
