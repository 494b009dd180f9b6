//! `Currency` scalar: ISO-4217 alphabetic codes.

use super::text::TextFormat;
use crate::types::Currency;
use crate::value::Value;

#[derive(Debug, Clone, Copy, Default)]
pub struct CurrencyFormat;

impl TextFormat for CurrencyFormat {
    type Native = Currency;

    const NATIVE: &'static str = "Currency";

    fn extract(value: &Value) -> Option<Result<Currency, String>> {
        match value {
            Value::Currency(currency) => Some(Ok(*currency)),
            _ => None,
        }
    }

    fn parse(text: &str) -> Result<Currency, String> {
        Currency::parse(text).map_err(|cause| {
            format!("Invalid ISO 4217 value : '{text}'. because of : '{cause}'")
        })
    }

    fn format(native: &Currency) -> String {
        native.code().to_string()
    }
}
