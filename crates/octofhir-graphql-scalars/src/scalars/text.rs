//! Scalars whose wire form is one canonical string.
//!
//! Temporal and domain-value scalars all follow the same algorithm: a native
//! runtime value is narrowed to the scalar's runtime type, a string is parsed,
//! anything else is rejected. Output is the canonical text; the only accepted
//! literal is a `StringValue`. What differs between scalars (the text format,
//! which native values qualify, the error wording) lives in a [`TextFormat`].

use std::fmt;
use std::marker::PhantomData;

use super::string_literal;
use crate::Result;
use crate::coercing::Coercing;
use crate::context::CoercingContext;
use crate::error::ErrorKind;
use crate::literal::{Literal, Variables};
use crate::value::Value;

/// A canonical text format bound to one runtime representation.
pub trait TextFormat: fmt::Debug + Send + Sync + 'static {
    /// Runtime representation produced by the parse operations.
    type Native: Into<Value>;

    /// Name of the native type, used in mismatch messages.
    const NATIVE: &'static str;

    /// Narrows a non-string runtime value.
    ///
    /// Returns `None` for shapes this format does not understand and
    /// `Some(Err(message))` for values of a related type that lack a needed
    /// field, such as a time of day handed to a date scalar.
    fn extract(value: &Value) -> Option<std::result::Result<Self::Native, String>>;

    /// Parses the wire text. The error is the complete message.
    fn parse(text: &str) -> std::result::Result<Self::Native, String>;

    /// Formats the runtime value as canonical wire text.
    fn format(native: &Self::Native) -> String;

    /// Message for input of an unrecognized shape.
    fn mismatch(_kind: ErrorKind, value: &Value) -> String {
        format!(
            "Expected a 'String' or '{}' but was '{}'.",
            Self::NATIVE,
            value.type_name()
        )
    }
}

/// Coercion shared by every [`TextFormat`].
pub struct TextCoercing<F>(PhantomData<F>);

impl<F: TextFormat> TextCoercing<F> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }

    fn convert(&self, input: &Value, kind: ErrorKind) -> Result<F::Native> {
        match input {
            Value::String(text) => F::parse(text).map_err(|msg| kind.error(msg)),
            other => match F::extract(other) {
                Some(Ok(native)) => Ok(native),
                Some(Err(msg)) => Err(kind.error(msg)),
                None => Err(kind.error(F::mismatch(kind, other))),
            },
        }
    }
}

impl<F: TextFormat> Default for TextCoercing<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: TextFormat> Clone for TextCoercing<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: TextFormat> Copy for TextCoercing<F> {}

impl<F: TextFormat> fmt::Debug for TextCoercing<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TextCoercing").field(&F::NATIVE).finish()
    }
}

impl<F: TextFormat> Coercing for TextCoercing<F> {
    fn serialize(&self, value: &Value, _ctx: &CoercingContext) -> Result<Value> {
        let native = self.convert(value, ErrorKind::Serialize)?;
        Ok(Value::String(F::format(&native)))
    }

    fn parse_value(&self, input: &Value, _ctx: &CoercingContext) -> Result<Value> {
        self.convert(input, ErrorKind::ParseValue).map(Into::into)
    }

    fn parse_literal(
        &self,
        input: &Literal,
        _variables: &Variables,
        _ctx: &CoercingContext,
    ) -> Result<Value> {
        let text = string_literal(input)?;
        F::parse(text)
            .map(Into::into)
            .map_err(|msg| ErrorKind::ParseLiteral.error(msg))
    }
}
