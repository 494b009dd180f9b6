//! `UUID` scalar.

use uuid::Uuid;

use super::text::TextFormat;
use crate::error::ErrorKind;
use crate::value::Value;

/// Canonical 8-4-4-4-12 hexadecimal form; output is lower case.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidFormat;

impl UuidFormat {
    const HYPHENS: [usize; 4] = [8, 13, 18, 23];

    fn is_hyphenated(text: &str) -> bool {
        text.len() == 36
            && text.bytes().enumerate().all(|(i, b)| {
                if Self::HYPHENS.contains(&i) {
                    b == b'-'
                } else {
                    b.is_ascii_hexdigit()
                }
            })
    }
}

impl TextFormat for UuidFormat {
    type Native = Uuid;

    const NATIVE: &'static str = "UUID";

    fn extract(value: &Value) -> Option<Result<Uuid, String>> {
        match value {
            Value::Uuid(id) => Some(Ok(*id)),
            _ => None,
        }
    }

    fn parse(text: &str) -> Result<Uuid, String> {
        let invalid = || format!("Invalid UUID value : '{text}'.");
        if !Self::is_hyphenated(text) {
            return Err(invalid());
        }
        Uuid::try_parse(text).map_err(|_| invalid())
    }

    fn format(native: &Uuid) -> String {
        native.hyphenated().to_string()
    }

    fn mismatch(_kind: ErrorKind, value: &Value) -> String {
        format!("Expected type 'UUID' but was '{}'.", value.type_name())
    }
}
