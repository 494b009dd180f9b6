//! Factory for scalars that reuse another scalar's coercion under a new name.

use std::sync::Arc;

use tracing::trace;

use crate::Result;
use crate::coercing::{Coercing, ScalarDefinition, validate_name};
use crate::context::CoercingContext;
use crate::error::BuildError;
use crate::literal::{Literal, Variables};
use crate::value::Value;

/// Builder for a scalar that delegates every operation to an existing one.
#[derive(Debug, Clone)]
pub struct AliasedScalarBuilder {
    name: String,
    description: Option<String>,
    aliased: Option<ScalarDefinition>,
}

impl AliasedScalarBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            aliased: None,
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

    #[must_use]
    pub fn aliased_scalar(mut self, scalar: &ScalarDefinition) -> Self {
        self.aliased = Some(scalar.clone());
        self
    }

    /// # Errors
    ///
    /// Fails on an invalid name or when no scalar was given to alias.
    pub fn build(self) -> std::result::Result<ScalarDefinition, BuildError> {
        validate_name(&self.name)?;
        let aliased = self
            .aliased
            .ok_or_else(|| BuildError::MissingAliasedScalar(self.name.clone()))?;

        let coercing = AliasCoercing {
            alias: self.name.clone(),
            target: aliased.name().to_string(),
            inner: Arc::clone(aliased.coercing()),
        };
        let definition = ScalarDefinition::new(self.name, coercing);
        Ok(match self.description {
            Some(description) => definition.with_description(description),
            None => definition,
        })
    }
}

#[derive(Debug)]
struct AliasCoercing {
    alias: String,
    target: String,
    inner: Arc<dyn Coercing>,
}

impl AliasCoercing {
    fn delegate(&self, operation: &'static str) -> &dyn Coercing {
        trace!(alias = %self.alias, target = %self.target, operation, "delegating to aliased scalar");
        self.inner.as_ref()
    }
}

impl Coercing for AliasCoercing {
    fn serialize(&self, value: &Value, ctx: &CoercingContext) -> Result<Value> {
        self.delegate("serialize").serialize(value, ctx)
    }

    fn parse_value(&self, input: &Value, ctx: &CoercingContext) -> Result<Value> {
        self.delegate("parse_value").parse_value(input, ctx)
    }

    fn parse_literal(
        &self,
        input: &Literal,
        variables: &Variables,
        ctx: &CoercingContext,
    ) -> Result<Value> {
        self.delegate("parse_literal")
            .parse_literal(input, variables, ctx)
    }

    fn value_to_literal(&self, value: &Value, ctx: &CoercingContext) -> Result<Literal> {
        self.delegate("value_to_literal").value_to_literal(value, ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalars;

    fn ctx() -> CoercingContext {
        CoercingContext::new()
    }

    #[test]
    fn test_alias_behaves_like_target() {
        let external_id = AliasedScalarBuilder::new("ExternalId")
            .description("An identifier issued by a partner system")
            .aliased_scalar(&scalars::UUID)
            .build()
            .unwrap();
        assert_eq!(external_id.name(), "ExternalId");
        assert_eq!(
            external_id.description(),
            Some("An identifier issued by a partner system")
        );

        let inputs = vec![
            Value::from("6ba7b810-9dad-11d1-80b4-00c04fd430c8"),
            Value::from("not-a-uuid"),
            Value::Int(3),
        ];
        for input in inputs {
            assert_eq!(
                external_id.parse_value(&input, &ctx()),
                scalars::UUID.parse_value(&input, &ctx())
            );
            assert_eq!(
                external_id.serialize(&input, &ctx()),
                scalars::UUID.serialize(&input, &ctx())
            );
        }
        let literal = Literal::string("6BA7B810-9DAD-11D1-80B4-00C04FD430C8");
        assert_eq!(
            external_id.parse_literal(&literal, &Variables::new(), &ctx()),
            scalars::UUID.parse_literal(&literal, &Variables::new(), &ctx())
        );
    }

    #[test]
    fn test_alias_keeps_target_literal_kind() {
        let count = AliasedScalarBuilder::new("Count")
            .aliased_scalar(&scalars::LONG)
            .build()
            .unwrap();
        assert_eq!(
            count.value_to_literal(&Value::Long(5), &ctx()).unwrap(),
            Literal::int(5)
        );
    }

    #[test]
    fn test_build_requires_target() {
        assert!(matches!(
            AliasedScalarBuilder::new("Orphan").build(),
            Err(BuildError::MissingAliasedScalar(name)) if name == "Orphan"
        ));
        assert!(matches!(
            AliasedScalarBuilder::new("__Reserved")
                .aliased_scalar(&scalars::UUID)
                .build(),
            Err(BuildError::InvalidName(_))
        ));
    }
}
