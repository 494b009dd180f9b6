//! Scalar catalog configuration.
//!
//! Selects which built-in scalars a schema exposes and declares
//! application-defined regex and aliased scalars. Typically embedded in a
//! host configuration file under a `[scalars]` section.
//!
//! # Example Configuration
//!
//! ```toml
//! [scalars]
//! exclude = ["Char", "JSON"]
//!
//! [[scalars.regex]]
//! name = "PhoneNumber"
//! description = "E.164 phone number"
//! patterns = ['\+[1-9][0-9]{1,14}']
//!
//! [[scalars.aliases]]
//! name = "ExternalId"
//! target = "UUID"
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::coercing::validate_name;
use crate::scalars;

/// Scalar catalog configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScalarsConfig {
    /// Built-in scalars to expose, by GraphQL name.
    /// Default: empty, meaning every built-in.
    #[serde(default)]
    pub include: Vec<String>,

    /// Built-in scalars to leave out. Applied after `include`.
    /// Default: empty
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Regex-validated string scalars.
    #[serde(default)]
    pub regex: Vec<RegexScalarConfig>,

    /// Scalars that reuse another scalar's coercion under a new name.
    /// Targets may be built-ins or regex scalars declared above.
    #[serde(default)]
    pub aliases: Vec<AliasedScalarConfig>,
}

/// A regex scalar declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegexScalarConfig {
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Accepted forms; a value must fully match at least one.
    pub patterns: Vec<String>,
}

/// An aliased scalar declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasedScalarConfig {
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Name of the scalar to delegate to.
    pub target: String,
}

impl ScalarsConfig {
    /// Whether a built-in scalar is selected by `include` and `exclude`.
    #[must_use]
    pub fn selects(&self, name: &str) -> bool {
        (self.include.is_empty() || self.include.iter().any(|n| n == name))
            && !self.exclude.iter().any(|n| n == name)
    }

    /// Validates the configuration.
    ///
    /// Pattern syntax is checked when the scalars are built, not here.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration values are invalid.
    pub fn validate(&self) -> Result<(), String> {
        for name in self.include.iter().chain(&self.exclude) {
            if scalars::by_name(name).is_none() {
                return Err(format!("scalars: unknown built-in scalar '{name}'"));
            }
        }

        let mut declared: HashSet<&str> = scalars::all()
            .into_iter()
            .map(|s| s.name())
            .filter(|name| self.selects(name))
            .collect();

        for regex in &self.regex {
            validate_name(&regex.name).map_err(|e| format!("scalars.regex: {e}"))?;
            if regex.patterns.is_empty() {
                return Err(format!(
                    "scalars.regex: '{}' must have at least one pattern",
                    regex.name
                ));
            }
            if !declared.insert(regex.name.as_str()) {
                return Err(format!("scalars.regex: duplicate scalar '{}'", regex.name));
            }
        }

        for alias in &self.aliases {
            validate_name(&alias.name).map_err(|e| format!("scalars.aliases: {e}"))?;
            if !declared.contains(alias.target.as_str()) {
                return Err(format!(
                    "scalars.aliases: '{}' targets unknown scalar '{}'",
                    alias.name, alias.target
                ));
            }
            if !declared.insert(alias.name.as_str()) {
                return Err(format!("scalars.aliases: duplicate scalar '{}'", alias.name));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn regex(name: &str, patterns: &[&str]) -> RegexScalarConfig {
        RegexScalarConfig {
            name: name.to_string(),
            description: None,
            patterns: patterns.iter().map(ToString::to_string).collect(),
        }
    }

    fn alias(name: &str, target: &str) -> AliasedScalarConfig {
        AliasedScalarConfig {
            name: name.to_string(),
            description: None,
            target: target.to_string(),
        }
    }

    #[test]
    fn test_default_config() {
        let config = ScalarsConfig::default();
        assert!(config.include.is_empty());
        assert!(config.exclude.is_empty());
        assert!(config.regex.is_empty());
        assert!(config.aliases.is_empty());
        assert!(config.selects("DateTime"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_include_and_exclude() {
        let config = ScalarsConfig {
            include: vec!["Long".into(), "Date".into()],
            exclude: vec!["Date".into()],
            ..Default::default()
        };
        assert!(config.selects("Long"));
        assert!(!config.selects("Date"));
        assert!(!config.selects("UUID"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unknown_built_in() {
        let config = ScalarsConfig {
            exclude: vec!["Money".into()],
            ..Default::default()
        };
        assert!(config.validate().unwrap_err().contains("'Money'"));
    }

    #[test]
    fn test_invalid_regex_entries() {
        let mut config = ScalarsConfig::default();
        config.regex = vec![regex("Empty", &[])];
        assert!(config.validate().is_err());

        config.regex = vec![regex("bad-name", &[".*"])];
        assert!(config.validate().is_err());

        config.regex = vec![regex("Date", &[".*"])];
        assert!(config.validate().unwrap_err().contains("duplicate"));
    }

    #[test]
    fn test_alias_targets() {
        let mut config = ScalarsConfig {
            regex: vec![regex("Sku", &["[A-Z]{3}-[0-9]{4}"])],
            aliases: vec![alias("ExternalId", "UUID"), alias("ProductCode", "Sku")],
            ..Default::default()
        };
        assert!(config.validate().is_ok());

        config.exclude = vec!["UUID".into()];
        assert!(config.validate().unwrap_err().contains("unknown scalar 'UUID'"));

        config.exclude.clear();
        config.aliases.push(alias("Sku", "UUID"));
        assert!(config.validate().unwrap_err().contains("duplicate"));
    }

    #[test]
    fn test_deserialize_from_toml() {
        let toml = r#"
            exclude = ["Char"]

            [[regex]]
            name = "PhoneNumber"
            description = "E.164 phone number"
            patterns = ['\+[1-9][0-9]{1,14}']

            [[aliases]]
            name = "ExternalId"
            target = "UUID"
        "#;

        let config: ScalarsConfig = toml::from_str(toml).unwrap();
        assert!(config.include.is_empty());
        assert_eq!(config.exclude, vec!["Char".to_string()]);
        assert_eq!(config.regex.len(), 1);
        assert_eq!(config.regex[0].name, "PhoneNumber");
        assert_eq!(config.regex[0].description.as_deref(), Some("E.164 phone number"));
        assert_eq!(config.regex[0].patterns, vec![r"\+[1-9][0-9]{1,14}".to_string()]);
        assert_eq!(config.aliases, vec![alias("ExternalId", "UUID")]);
        assert!(config.validate().is_ok());
    }
}
