//! # octofhir-graphql-scalars
//!
//! Extended GraphQL scalar types with bidirectional value coercion.
//!
//! Every scalar is an immutable [`ScalarDefinition`]: a name, documentation
//! and a [`Coercing`] implementation with four operations:
//!
//! - `serialize` - runtime value to wire value
//! - `parse_value` - variable value to runtime value
//! - `parse_literal` - query literal to runtime value
//! - `value_to_literal` - runtime value back to a literal
//!
//! Each operation fails with its own [`CoercingError`] kind, so the host
//! engine can tell server-side failures from client input errors.
//!
//! ## Catalog
//!
//! - Primitives: `Long`, `Short`, `Byte`, `BigInteger`, `BigDecimal`, `Char`
//! - Sign-constrained numbers: `PositiveInt` ... `NonPositiveFloat`
//! - Temporal: `DateTime`, `Date`, `Time`, `LocalTime`, `LocalDateTime`,
//!   `Year`, `YearMonth`, `AccurateDuration`, `NominalDuration`,
//!   `SecondsSinceEpoch`
//! - Domain values: `UUID`, `Url`, `Uri`, `Locale`, `Currency`,
//!   `CountryCode`, `HexColorCode`
//! - Structural: `Object`, `JSON`
//!
//! Application-defined scalars come from [`scalars::new_regex_scalar`] and
//! [`scalars::new_aliased_scalar`].
//!
//! ## Example
//!
//! ```
//! use octofhir_graphql_scalars::{CoercingContext, Value, scalars};
//!
//! let ctx = CoercingContext::new();
//! let date = scalars::DATE.parse_value(&Value::from("2024-02-29"), &ctx).unwrap();
//! assert_eq!(
//!     scalars::DATE.serialize(&date, &ctx).unwrap(),
//!     Value::from("2024-02-29")
//! );
//! assert!(scalars::DATE.parse_value(&Value::from("2023-02-29"), &ctx).is_err());
//! ```
//!
//! ## Configuration
//!
//! Add to `octofhir.toml`:
//!
//! ```toml
//! [scalars]
//! exclude = ["Char"]
//!
//! [[scalars.aliases]]
//! name = "ExternalId"
//! target = "UUID"
//! ```
//!
//! ## Modules
//!
//! - [`coercing`] - The coercion contract and scalar definition record
//! - [`scalars`] - The built-in catalog and scalar factories
//! - [`registry`] - Name-keyed registry and dynamic schema registration
//! - [`config`] - Configuration options
//! - [`value`] / [`literal`] - Runtime values and query literals
//! - [`types`] - Domain types backing the scalars
//! - [`error`] - Error types for coercion and construction

pub mod coercing;
pub mod config;
pub mod context;
pub mod error;
pub mod literal;
pub mod registry;
pub mod scalars;
pub mod types;
pub mod value;

// Re-export main types
pub use coercing::{Coercing, ScalarDefinition, validate_name};
pub use config::{AliasedScalarConfig, RegexScalarConfig, ScalarsConfig};
pub use context::{CoercingContext, CoercingContextBuilder};
pub use error::{BuildError, CoercingError, ErrorKind};
pub use literal::{Literal, Variables};
pub use registry::{ScalarRegistry, to_dynamic_scalar};
pub use value::Value;

/// Result type for coercion operations.
pub type Result<T> = std::result::Result<T, CoercingError>;
