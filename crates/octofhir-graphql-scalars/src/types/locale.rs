//! IETF BCP-47 language tags.
//!
//! Parsing checks well-formedness against the RFC 5646 `langtag` and
//! `privateuse` productions (subtags are not checked against the IANA
//! registry). Output uses canonical casing: lowercase language, titlecase
//! script, uppercase region, lowercase everything else.

use std::fmt;
use std::str::FromStr;

/// A well-formed BCP-47 language tag, e.g. `en-US` or `zh-Hant-TW`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale {
    language: Option<String>,
    extlangs: Vec<String>,
    script: Option<String>,
    region: Option<String>,
    variants: Vec<String>,
    extensions: Vec<Extension>,
    private_use: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Extension {
    singleton: char,
    subtags: Vec<String>,
}

/// Error returned for ill-formed language tags.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Ill-formed language tag '{tag}': {reason}")]
pub struct ParseLocaleError {
    pub tag: String,
    pub reason: &'static str,
}

impl Locale {
    /// Language plus optional region, e.g. `Locale::new("en", Some("GB"))`.
    pub fn new(language: &str, region: Option<&str>) -> Result<Self, ParseLocaleError> {
        match region {
            Some(region) => Self::parse(&format!("{language}-{region}")),
            None => Self::parse(language),
        }
    }

    /// The undetermined locale, `und`. Equal to `Locale::parse("und")`.
    #[must_use]
    pub fn root() -> Self {
        Self {
            language: Some("und".to_string()),
            ..Self::empty()
        }
    }

    fn empty() -> Self {
        Self {
            language: None,
            extlangs: Vec::new(),
            script: None,
            region: None,
            variants: Vec::new(),
            extensions: Vec::new(),
            private_use: Vec::new(),
        }
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn script(&self) -> Option<&str> {
        self.script.as_deref()
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    pub fn variants(&self) -> &[String] {
        &self.variants
    }

    /// Parses a language tag. Subtags are separated by `-` and compared
    /// case-insensitively.
    pub fn parse(tag: &str) -> Result<Self, ParseLocaleError> {
        let fail = |reason: &'static str| ParseLocaleError {
            tag: tag.to_string(),
            reason,
        };
        if tag.is_empty() {
            return Err(fail("empty tag"));
        }

        let subtags: Vec<&str> = tag.split('-').collect();
        let well_formed =
            |s: &&str| !s.is_empty() && s.len() <= 8 && s.bytes().all(|b| b.is_ascii_alphanumeric());
        if !subtags.iter().all(well_formed) {
            return Err(fail("subtags must be 1 to 8 ASCII letters or digits"));
        }

        let mut locale = Locale::empty();
        let mut idx = 0;

        if is_private_singleton(subtags[0]) {
            locale.private_use =
                parse_private_use(&subtags[1..]).ok_or_else(|| fail("empty private use"))?;
            return Ok(locale);
        }

        let language = subtags[0];
        if !(is_alpha(language) && (2..=8).contains(&language.len())) {
            return Err(fail("invalid language subtag"));
        }
        locale.language = Some(language.to_ascii_lowercase());
        idx += 1;

        if language.len() <= 3 {
            while idx < subtags.len()
                && locale.extlangs.len() < 3
                && subtags[idx].len() == 3
                && is_alpha(subtags[idx])
            {
                locale.extlangs.push(subtags[idx].to_ascii_lowercase());
                idx += 1;
            }
        }

        if idx < subtags.len() && subtags[idx].len() == 4 && is_alpha(subtags[idx]) {
            locale.script = Some(titlecase(subtags[idx]));
            idx += 1;
        }

        if idx < subtags.len() && is_region(subtags[idx]) {
            locale.region = Some(subtags[idx].to_ascii_uppercase());
            idx += 1;
        }

        while idx < subtags.len() && is_variant(subtags[idx]) {
            let variant = subtags[idx].to_ascii_lowercase();
            if locale.variants.contains(&variant) {
                return Err(fail("duplicate variant"));
            }
            locale.variants.push(variant);
            idx += 1;
        }

        while idx < subtags.len()
            && subtags[idx].len() == 1
            && !is_private_singleton(subtags[idx])
        {
            let singleton = subtags[idx]
                .chars()
                .next()
                .map(|c| c.to_ascii_lowercase())
                .ok_or_else(|| fail("empty singleton"))?;
            if locale.extensions.iter().any(|e| e.singleton == singleton) {
                return Err(fail("duplicate extension singleton"));
            }
            idx += 1;
            let start = idx;
            while idx < subtags.len() && subtags[idx].len() >= 2 {
                idx += 1;
            }
            if idx == start {
                return Err(fail("extension without subtags"));
            }
            locale.extensions.push(Extension {
                singleton,
                subtags: subtags[start..idx]
                    .iter()
                    .map(|s| s.to_ascii_lowercase())
                    .collect(),
            });
        }

        if idx < subtags.len() && is_private_singleton(subtags[idx]) {
            locale.private_use = parse_private_use(&subtags[idx + 1..])
                .ok_or_else(|| fail("empty private use"))?;
            idx = subtags.len();
        }

        if idx != subtags.len() {
            return Err(fail("unexpected subtag"));
        }
        Ok(locale)
    }

    /// Canonical tag text, `und` for the root locale.
    #[must_use]
    pub fn to_language_tag(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        match &self.language {
            Some(language) => parts.push(language.clone()),
            None if self.private_use.is_empty() => parts.push("und".to_string()),
            None => {}
        }
        parts.extend(self.extlangs.iter().cloned());
        parts.extend(self.script.iter().cloned());
        parts.extend(self.region.iter().cloned());
        parts.extend(self.variants.iter().cloned());
        for extension in &self.extensions {
            parts.push(extension.singleton.to_string());
            parts.extend(extension.subtags.iter().cloned());
        }
        if !self.private_use.is_empty() {
            parts.push("x".to_string());
            parts.extend(self.private_use.iter().cloned());
        }
        parts.join("-")
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::root()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_language_tag())
    }
}

impl FromStr for Locale {
    type Err = ParseLocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn parse_private_use(subtags: &[&str]) -> Option<Vec<String>> {
    if subtags.is_empty() {
        return None;
    }
    Some(subtags.iter().map(|s| s.to_ascii_lowercase()).collect())
}

fn is_private_singleton(subtag: &str) -> bool {
    subtag.eq_ignore_ascii_case("x")
}

fn is_alpha(subtag: &str) -> bool {
    subtag.bytes().all(|b| b.is_ascii_alphabetic())
}

fn is_region(subtag: &str) -> bool {
    (subtag.len() == 2 && is_alpha(subtag))
        || (subtag.len() == 3 && subtag.bytes().all(|b| b.is_ascii_digit()))
}

fn is_variant(subtag: &str) -> bool {
    match subtag.len() {
        5..=8 => true,
        4 => subtag.as_bytes()[0].is_ascii_digit(),
        _ => false,
    }
}

fn titlecase(subtag: &str) -> String {
    let lower = subtag.to_ascii_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}
