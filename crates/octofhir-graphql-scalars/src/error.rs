//! Error types for scalar coercion.
//!
//! Every coercion operation reports failure through [`CoercingError`]. The
//! variant tells the host engine *which* operation failed:
//!
//! - [`CoercingError::Serialize`] - a resolver produced a value that cannot be
//!   turned into the wire representation (server-side failure of one field).
//! - [`CoercingError::ParseValue`] - a client-supplied variable is invalid.
//! - [`CoercingError::ParseLiteral`] - an inline literal in the query text is
//!   invalid or has the wrong AST kind.
//!
//! [`CoercingError::UnsupportedValue`] is reserved for `value_to_literal`
//! being handed a runtime value the scalar has no literal form for. It marks
//! a programming error rather than bad input.

use async_graphql::ErrorExtensions;
use thiserror::Error;

/// Which coercion operation is being performed.
///
/// Shared conversion routines receive the kind of the calling operation so
/// that the error they raise matches it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Runtime value to wire representation.
    Serialize,
    /// Variable value to runtime value.
    ParseValue,
    /// AST literal to runtime value.
    ParseLiteral,
}

impl ErrorKind {
    /// Builds the error variant that corresponds to this kind.
    pub fn error(self, message: impl Into<String>) -> CoercingError {
        let message = message.into();
        match self {
            Self::Serialize => CoercingError::Serialize(message),
            Self::ParseValue => CoercingError::ParseValue(message),
            Self::ParseLiteral => CoercingError::ParseLiteral(message),
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Serialize => write!(f, "serialize"),
            Self::ParseValue => write!(f, "parse_value"),
            Self::ParseLiteral => write!(f, "parse_literal"),
        }
    }
}

/// Errors raised by scalar coercion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoercingError {
    #[error("{0}")]
    Serialize(String),

    #[error("{0}")]
    ParseValue(String),

    #[error("{0}")]
    ParseLiteral(String),

    #[error("{0}")]
    UnsupportedValue(String),
}

impl CoercingError {
    /// Create a new Serialize error
    pub fn serialize(message: impl Into<String>) -> Self {
        Self::Serialize(message.into())
    }

    /// Create a new ParseValue error
    pub fn parse_value(message: impl Into<String>) -> Self {
        Self::ParseValue(message.into())
    }

    /// Create a new ParseLiteral error
    pub fn parse_literal(message: impl Into<String>) -> Self {
        Self::ParseLiteral(message.into())
    }

    /// Create a new UnsupportedValue error
    pub fn unsupported_value(message: impl Into<String>) -> Self {
        Self::UnsupportedValue(message.into())
    }

    /// Returns the operation kind, or `None` for [`CoercingError::UnsupportedValue`].
    #[must_use]
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Serialize(_) => Some(ErrorKind::Serialize),
            Self::ParseValue(_) => Some(ErrorKind::ParseValue),
            Self::ParseLiteral(_) => Some(ErrorKind::ParseLiteral),
            Self::UnsupportedValue(_) => None,
        }
    }

    /// The human readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Serialize(msg)
            | Self::ParseValue(msg)
            | Self::ParseLiteral(msg)
            | Self::UnsupportedValue(msg) => msg,
        }
    }

    /// Returns the error code for GraphQL error extensions.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Serialize(_) => "SERIALIZATION_ERROR",
            Self::ParseValue(_) => "VALUE_PARSE_ERROR",
            Self::ParseLiteral(_) => "LITERAL_PARSE_ERROR",
            Self::UnsupportedValue(_) => "UNSUPPORTED_VALUE",
        }
    }

    /// Client input errors (variables and literals).
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::ParseValue(_) | Self::ParseLiteral(_))
    }

    /// Programming errors that callers are not expected to recover from.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::UnsupportedValue(_))
    }

    /// Re-labels the error for a different operation, keeping the message.
    ///
    /// Unsupported-value errors keep their variant.
    #[must_use]
    pub fn with_kind(self, kind: ErrorKind) -> Self {
        match self {
            Self::UnsupportedValue(msg) => Self::UnsupportedValue(msg),
            Self::Serialize(msg) | Self::ParseValue(msg) | Self::ParseLiteral(msg) => {
                kind.error(msg)
            }
        }
    }
}

impl ErrorExtensions for CoercingError {
    fn extend(&self) -> async_graphql::Error {
        let code = self.error_code();
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| e.set("code", code))
    }
}

/// Errors raised while assembling scalar definitions or a registry.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Invalid GraphQL scalar name: '{0}'")]
    InvalidName(String),

    #[error("Regex scalar '{0}' needs at least one pattern")]
    MissingPatterns(String),

    #[error("Regex scalar '{name}' has an invalid pattern: {source}")]
    InvalidPattern {
        name: String,
        #[source]
        source: regex::Error,
    },

    #[error("Aliased scalar '{0}' has no scalar to alias")]
    MissingAliasedScalar(String),

    #[error("Scalar '{0}' is already registered")]
    DuplicateScalar(String),

    #[error("Unknown scalar: '{0}'")]
    UnknownScalar(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl BuildError {
    /// Create a new Configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }
}
