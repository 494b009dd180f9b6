//! `HexColorCode` scalar.

use super::text::TextFormat;
use crate::types::Color;
use crate::value::Value;

#[derive(Debug, Clone, Copy, Default)]
pub struct HexColorCodeFormat;

impl TextFormat for HexColorCodeFormat {
    type Native = Color;

    const NATIVE: &'static str = "Color";

    fn extract(value: &Value) -> Option<Result<Color, String>> {
        match value {
            Value::Color(color) => Some(Ok(*color)),
            _ => None,
        }
    }

    fn parse(text: &str) -> Result<Color, String> {
        Color::parse_hex(text).map_err(|e| e.to_string())
    }

    fn format(native: &Color) -> String {
        native.to_hex()
    }
}
