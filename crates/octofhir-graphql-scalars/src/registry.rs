//! Scalar registry and host schema registration.
//!
//! A [`ScalarRegistry`] is an ordered, name-keyed set of scalar definitions.
//! It is assembled once (from the built-in catalog, a [`ScalarsConfig`] or by
//! hand) and then registered into an `async-graphql` dynamic schema, where
//! each definition becomes a [`Scalar`] whose input validator runs the
//! definition's `parse_value`.

use async_graphql::dynamic::{Scalar, SchemaBuilder};
use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::coercing::ScalarDefinition;
use crate::config::ScalarsConfig;
use crate::context::CoercingContext;
use crate::error::BuildError;
use crate::scalars::{self, AliasedScalarBuilder, RegexScalarBuilder};
use crate::value::Value;

/// Ordered collection of scalar definitions keyed by GraphQL name.
#[derive(Debug, Clone, Default)]
pub struct ScalarRegistry {
    scalars: IndexMap<String, ScalarDefinition>,
}

impl ScalarRegistry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every built-in extended scalar, in catalog order.
    #[must_use]
    pub fn extended() -> Self {
        let scalars = scalars::all()
            .into_iter()
            .map(|def| (def.name().to_string(), def.clone()))
            .collect();
        Self { scalars }
    }

    /// Builds a registry from configuration.
    ///
    /// Selected built-ins come first, then regex scalars, then aliases, each
    /// in declaration order. Aliases may target any scalar registered before
    /// them.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::Configuration`] when the configuration does not
    /// validate, or the error of the first scalar that fails to build.
    pub fn from_config(config: &ScalarsConfig) -> Result<Self, BuildError> {
        config.validate().map_err(BuildError::configuration)?;

        let mut registry = Self::new();
        for def in scalars::all() {
            if config.selects(def.name()) {
                registry.register(def.clone())?;
            }
        }

        for regex in &config.regex {
            let mut builder = RegexScalarBuilder::new(&regex.name).add_patterns(&regex.patterns);
            if let Some(description) = &regex.description {
                builder = builder.description(description);
            }
            registry.register(builder.build()?)?;
        }

        for alias in &config.aliases {
            let target = registry
                .get(&alias.target)
                .ok_or_else(|| BuildError::UnknownScalar(alias.target.clone()))?;
            let mut builder = AliasedScalarBuilder::new(&alias.name).aliased_scalar(target);
            if let Some(description) = &alias.description {
                builder = builder.description(description);
            }
            registry.register(builder.build()?)?;
        }

        debug!(
            scalar_count = registry.len(),
            regex_count = config.regex.len(),
            alias_count = config.aliases.len(),
            "Scalar registry assembled from configuration"
        );
        Ok(registry)
    }

    /// Adds a definition.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::DuplicateScalar`] if the name is taken.
    pub fn register(&mut self, scalar: ScalarDefinition) -> Result<(), BuildError> {
        if self.scalars.contains_key(scalar.name()) {
            return Err(BuildError::DuplicateScalar(scalar.name().to_string()));
        }
        self.scalars.insert(scalar.name().to_string(), scalar);
        Ok(())
    }

    /// Adds a definition, chaining.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::DuplicateScalar`] if the name is taken.
    pub fn with(mut self, scalar: ScalarDefinition) -> Result<Self, BuildError> {
        self.register(scalar)?;
        Ok(self)
    }

    pub fn get(&self, name: &str) -> Option<&ScalarDefinition> {
        self.scalars.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.scalars.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.scalars.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScalarDefinition> {
        self.scalars.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.scalars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scalars.is_empty()
    }

    /// Registers every scalar into a dynamic schema.
    pub fn register_scalars(&self, builder: SchemaBuilder) -> SchemaBuilder {
        let mut builder = builder;
        for def in self.iter() {
            builder = builder.register(to_dynamic_scalar(def));
        }
        debug!(scalar_count = self.len(), "Registered extended scalars");
        builder
    }
}

impl<'a> IntoIterator for &'a ScalarRegistry {
    type Item = &'a ScalarDefinition;
    type IntoIter = indexmap::map::Values<'a, String, ScalarDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.scalars.values()
    }
}

/// Converts a definition into an `async-graphql` dynamic scalar.
///
/// The host engine only asks dynamic scalars whether an input is valid, so
/// the validator runs `parse_value` with an empty context and keeps the
/// verdict. Resolvers call [`ScalarDefinition::serialize`] themselves.
pub fn to_dynamic_scalar(def: &ScalarDefinition) -> Scalar {
    let mut scalar = Scalar::new(def.name());
    if let Some(description) = def.description() {
        scalar = scalar.description(description);
    }
    if let Some(url) = def.specified_by_url() {
        scalar = scalar.specified_by_url(url);
    }

    let validating = def.clone();
    scalar.validator(move |input| {
        let ctx = CoercingContext::new();
        match validating.parse_value(&Value::from(input.clone()), &ctx) {
            Ok(_) => true,
            Err(err) => {
                trace!(scalar = %validating.name(), error = %err, "input rejected");
                false
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AliasedScalarConfig, RegexScalarConfig};

    #[test]
    fn test_extended_registry() {
        let registry = ScalarRegistry::extended();
        assert_eq!(registry.len(), scalars::all().len());
        assert_eq!(registry.names().next(), Some("Long"));
        assert!(registry.contains("HexColorCode"));
        assert!(registry.get("Int").is_none());
    }

    #[test]
    fn test_register_rejects_duplicates() {
        let mut registry = ScalarRegistry::new();
        registry.register(scalars::UUID.clone()).unwrap();
        assert!(matches!(
            registry.register(scalars::UUID.clone()),
            Err(BuildError::DuplicateScalar(name)) if name == "UUID"
        ));
        let registry = ScalarRegistry::new()
            .with(scalars::DATE.clone())
            .and_then(|r| r.with(scalars::TIME.clone()))
            .unwrap();
        assert_eq!(registry.names().collect::<Vec<_>>(), ["Date", "Time"]);
    }

    #[test]
    fn test_from_config() {
        let config = ScalarsConfig {
            include: vec!["UUID".into(), "Date".into()],
            regex: vec![RegexScalarConfig {
                name: "Sku".into(),
                description: Some("Stock keeping unit".into()),
                patterns: vec!["[A-Z]{3}-[0-9]{4}".into()],
            }],
            aliases: vec![AliasedScalarConfig {
                name: "ProductCode".into(),
                description: None,
                target: "Sku".into(),
            }],
            ..Default::default()
        };
        let registry = ScalarRegistry::from_config(&config).unwrap();
        assert_eq!(
            registry.names().collect::<Vec<_>>(),
            ["Date", "UUID", "Sku", "ProductCode"]
        );
        assert_eq!(registry.get("Sku").unwrap().description(), Some("Stock keeping unit"));

        let ctx = CoercingContext::new();
        let code = registry.get("ProductCode").unwrap();
        assert!(code.parse_value(&Value::from("ABC-1234"), &ctx).is_ok());
        assert!(code.parse_value(&Value::from("abc-1234"), &ctx).is_err());
    }

    #[test]
    fn test_from_config_errors() {
        let invalid = ScalarsConfig {
            exclude: vec!["Nope".into()],
            ..Default::default()
        };
        assert!(matches!(
            ScalarRegistry::from_config(&invalid),
            Err(BuildError::Configuration(_))
        ));

        let bad_pattern = ScalarsConfig {
            regex: vec![RegexScalarConfig {
                name: "Broken".into(),
                description: None,
                patterns: vec!["(".into()],
            }],
            ..Default::default()
        };
        assert!(matches!(
            ScalarRegistry::from_config(&bad_pattern),
            Err(BuildError::InvalidPattern { .. })
        ));
    }
}
