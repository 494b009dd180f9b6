//! `CountryCode` scalar: ISO-3166-1 alpha-2 codes.

use super::text::TextFormat;
use crate::types::CountryCode;
use crate::value::Value;

#[derive(Debug, Clone, Copy, Default)]
pub struct CountryCodeFormat;

impl TextFormat for CountryCodeFormat {
    type Native = CountryCode;

    const NATIVE: &'static str = "CountryCode";

    fn extract(value: &Value) -> Option<Result<CountryCode, String>> {
        match value {
            Value::CountryCode(code) => Some(Ok(*code)),
            _ => None,
        }
    }

    fn parse(text: &str) -> Result<CountryCode, String> {
        CountryCode::parse(text).map_err(|cause| {
            format!("Invalid ISO 3166-1 alpha-2 value : '{text}'. because of : '{cause}'")
        })
    }

    fn format(native: &CountryCode) -> String {
        native.alpha2().to_string()
    }
}
