//! Per-call coercion context.
//!
//! The host engine hands every coercion call a [`CoercingContext`] carrying the
//! request locale and an opaque key/value execution context. Scalars read it
//! at most; none of the built-in scalars change behavior based on it.
//!
//! # Example
//!
//! ```
//! use octofhir_graphql_scalars::{CoercingContext, types::Locale};
//!
//! let ctx = CoercingContext::builder()
//!     .with_locale(Locale::parse("de-CH").unwrap())
//!     .with_value("request_id", "req-123")
//!     .build();
//! assert_eq!(ctx.locale().map(|l| l.to_string()), Some("de-CH".to_string()));
//! ```

use indexmap::IndexMap;

use crate::types::Locale;
use crate::value::Value;

/// Ambient parameters threaded through every coercion call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoercingContext {
    locale: Option<Locale>,
    values: IndexMap<String, Value>,
}

impl CoercingContext {
    /// An empty context: no locale, no values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn builder() -> CoercingContextBuilder {
        CoercingContextBuilder::default()
    }

    /// The request locale, if the host supplied one.
    pub fn locale(&self) -> Option<&Locale> {
        self.locale.as_ref()
    }

    /// Looks up an execution context entry.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn values(&self) -> &IndexMap<String, Value> {
        &self.values
    }
}

/// Builder for constructing a [`CoercingContext`].
#[derive(Debug, Default)]
pub struct CoercingContextBuilder {
    locale: Option<Locale>,
    values: IndexMap<String, Value>,
}

impl CoercingContextBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the request locale.
    #[must_use]
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = Some(locale);
        self
    }

    /// Adds an execution context entry, replacing an earlier one with the same key.
    #[must_use]
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn build(self) -> CoercingContext {
        CoercingContext {
            locale: self.locale,
            values: self.values,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_context_is_empty() {
        let ctx = CoercingContext::new();
        assert!(ctx.locale().is_none());
        assert!(ctx.values().is_empty());
    }

    #[test]
    fn test_builder() {
        let ctx = CoercingContext::builder()
            .with_locale(Locale::parse("en-GB").unwrap())
            .with_value("tenant", "acme")
            .with_value("tenant", "globex")
            .with_value("depth", 3i32)
            .build();
        assert_eq!(ctx.locale().unwrap().region(), Some("GB"));
        assert_eq!(ctx.get("tenant"), Some(&Value::from("globex")));
        assert_eq!(ctx.get("depth"), Some(&Value::Int(3)));
        assert_eq!(ctx.values().len(), 2);
    }
}
