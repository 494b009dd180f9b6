//! `Url` and `Uri` scalars.
//!
//! Both normalize through the WHATWG parser of the `url` crate, so output is
//! the serialized form (`https://example.com` becomes `https://example.com/`).
//! `Url` additionally requires a host, or the `file` scheme.

use std::path::Path;

use url::Url;

use super::text::TextFormat;
use crate::error::ErrorKind;
use crate::value::Value;

fn from_path(path: &Path, label: &str) -> Result<Url, String> {
    Url::from_file_path(path)
        .map_err(|()| format!("Invalid {label} value : '{}'.", path.display()))
}

fn like_object_mismatch(value: &Value, label: &str) -> String {
    format!(
        "Expected a '{label}' like object but was '{}'.",
        value.type_name()
    )
}

/// A locator: an absolute URL with a host, or a `file:` URL.
#[derive(Debug, Clone, Copy, Default)]
pub struct UrlFormat;

impl UrlFormat {
    fn is_locator(url: &Url) -> bool {
        url.has_host() || url.scheme() == "file"
    }
}

impl TextFormat for UrlFormat {
    type Native = Url;

    const NATIVE: &'static str = "URL";

    fn extract(value: &Value) -> Option<Result<Url, String>> {
        match value {
            Value::Url(url) if Self::is_locator(url) => Some(Ok(url.clone())),
            Value::Url(url) => Some(Err(format!("Invalid URL value : '{url}'."))),
            Value::Path(path) => Some(from_path(path, "URL")),
            _ => None,
        }
    }

    fn parse(text: &str) -> Result<Url, String> {
        Url::parse(text)
            .ok()
            .filter(Self::is_locator)
            .ok_or_else(|| format!("Invalid URL value : '{text}'."))
    }

    fn format(native: &Url) -> String {
        native.as_str().to_string()
    }

    fn mismatch(_kind: ErrorKind, value: &Value) -> String {
        like_object_mismatch(value, Self::NATIVE)
    }
}

/// Any absolute URI, including `urn:` and `mailto:` forms.
#[derive(Debug, Clone, Copy, Default)]
pub struct UriFormat;

impl TextFormat for UriFormat {
    type Native = Url;

    const NATIVE: &'static str = "URI";

    fn extract(value: &Value) -> Option<Result<Url, String>> {
        match value {
            Value::Url(url) => Some(Ok(url.clone())),
            Value::Path(path) => Some(from_path(path, "URI")),
            _ => None,
        }
    }

    fn parse(text: &str) -> Result<Url, String> {
        Url::parse(text).map_err(|cause| {
            format!("Invalid URI value : '{text}'. because of : '{cause}'")
        })
    }

    fn format(native: &Url) -> String {
        native.as_str().to_string()
    }

    fn mismatch(_kind: ErrorKind, value: &Value) -> String {
        like_object_mismatch(value, Self::NATIVE)
    }
}
