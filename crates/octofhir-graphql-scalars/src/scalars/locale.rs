//! `Locale` scalar: IETF BCP-47 language tags.

use super::text::TextFormat;
use crate::types::Locale;
use crate::value::Value;

#[derive(Debug, Clone, Copy, Default)]
pub struct LocaleFormat;

impl TextFormat for LocaleFormat {
    type Native = Locale;

    const NATIVE: &'static str = "Locale";

    fn extract(value: &Value) -> Option<Result<Locale, String>> {
        match value {
            Value::Locale(locale) => Some(Ok(locale.clone())),
            _ => None,
        }
    }

    fn parse(text: &str) -> Result<Locale, String> {
        Locale::parse(text)
            .map_err(|cause| format!("Unable to parse value to 'Locale' because of: {cause}"))
    }

    fn format(native: &Locale) -> String {
        native.to_language_tag()
    }
}
