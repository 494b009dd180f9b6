//! The scalar catalog.
//!
//! Every built-in scalar is a process-wide [`ScalarDefinition`] constant,
//! created on first use and shared read-only afterwards. [`all`] lists them
//! in registration order. [`new_regex_scalar`] and [`new_aliased_scalar`]
//! start builders for application-defined scalars.

mod alias;
pub mod builtin;
mod color;
mod country;
mod currency;
pub mod datetime;
pub(crate) mod decimal;
mod id;
mod locale;
mod numeric;
mod object;
mod pattern;
mod primitives;
pub mod text;
mod uri;

use std::sync::LazyLock;

use crate::Result;
use crate::coercing::ScalarDefinition;
use crate::error::CoercingError;
use crate::literal::Literal;

pub use alias::AliasedScalarBuilder;
pub use color::HexColorCodeFormat;
pub use country::CountryCodeFormat;
pub use currency::CurrencyFormat;
pub use id::UuidFormat;
pub use locale::LocaleFormat;
pub use numeric::{NumericBase, SignConstraint, SignedNumberCoercing};
pub use object::ObjectCoercing;
pub use pattern::RegexScalarBuilder;
pub use primitives::{
    BigDecimalCoercing, BigIntegerCoercing, CharCoercing, IntegerCoercing, IntegerWidth,
};
pub use text::{TextCoercing, TextFormat};
pub use uri::{UriFormat, UrlFormat};

use datetime::{
    AccurateDurationCoercing, DateCoercing, DateTimeCoercing, LocalDateTimeCoercing,
    LocalTimeCoercing, NominalDurationCoercing, SecondsSinceEpochCoercing, TimeCoercing,
    YearCoercing, YearMonthCoercing,
};

/// Extracts the text of a `StringValue`, the only literal kind accepted by
/// string-formatted scalars.
pub(crate) fn string_literal(input: &Literal) -> Result<&str> {
    match input {
        Literal::String(text) => Ok(text),
        other => Err(CoercingError::parse_literal(format!(
            "Expected AST type 'StringValue' but was '{}'.",
            other.kind_name()
        ))),
    }
}

macro_rules! scalar {
    ($(#[$meta:meta])* $ident:ident, $name:literal, $coercing:expr, $description:literal $(, $url:literal)?) => {
        $(#[$meta])*
        pub static $ident: LazyLock<ScalarDefinition> = LazyLock::new(|| {
            ScalarDefinition::new($name, $coercing)
                .with_description($description)
                $(.with_specified_by_url($url))?
        });
    };
}

// =============================================================================
// Primitives
// =============================================================================

scalar!(LONG, "Long", IntegerCoercing::new(IntegerWidth::Long), "A 64-bit signed integer");
scalar!(SHORT, "Short", IntegerCoercing::new(IntegerWidth::Short), "A 16-bit signed integer");
scalar!(BYTE, "Byte", IntegerCoercing::new(IntegerWidth::Byte), "An 8-bit signed integer");
scalar!(BIG_INTEGER, "BigInteger", BigIntegerCoercing, "An arbitrary precision signed integer");
scalar!(BIG_DECIMAL, "BigDecimal", BigDecimalCoercing, "An arbitrary precision signed decimal");
scalar!(
    CHAR,
    "Char",
    CharCoercing,
    "A UTF-16 code unit; a character on Unicode's BMP"
);

// =============================================================================
// Range-constrained numbers
// =============================================================================

const fn signed(base: NumericBase, constraint: SignConstraint) -> SignedNumberCoercing {
    SignedNumberCoercing::new(base, constraint)
}

scalar!(
    POSITIVE_INT,
    "PositiveInt",
    signed(NumericBase::Int, SignConstraint::Positive),
    "An Int scalar that must be a positive value"
);
scalar!(
    NEGATIVE_INT,
    "NegativeInt",
    signed(NumericBase::Int, SignConstraint::Negative),
    "An Int scalar that must be a negative value"
);
scalar!(
    NON_NEGATIVE_INT,
    "NonNegativeInt",
    signed(NumericBase::Int, SignConstraint::NonNegative),
    "An Int scalar that must be greater than or equal to zero"
);
scalar!(
    NON_POSITIVE_INT,
    "NonPositiveInt",
    signed(NumericBase::Int, SignConstraint::NonPositive),
    "An Int scalar that must be less than or equal to zero"
);
scalar!(
    POSITIVE_FLOAT,
    "PositiveFloat",
    signed(NumericBase::Float, SignConstraint::Positive),
    "An Float scalar that must be a positive value"
);
scalar!(
    NEGATIVE_FLOAT,
    "NegativeFloat",
    signed(NumericBase::Float, SignConstraint::Negative),
    "An Float scalar that must be a negative value"
);
scalar!(
    NON_NEGATIVE_FLOAT,
    "NonNegativeFloat",
    signed(NumericBase::Float, SignConstraint::NonNegative),
    "An Float scalar that must be greater than or equal to zero"
);
scalar!(
    NON_POSITIVE_FLOAT,
    "NonPositiveFloat",
    signed(NumericBase::Float, SignConstraint::NonPositive),
    "An Float scalar that must be less than or equal to zero"
);

// =============================================================================
// Temporal
// =============================================================================

scalar!(
    DATE_TIME,
    "DateTime",
    DateTimeCoercing::new(),
    "An RFC-3339 compliant DateTime Scalar",
    "https://scalars.graphql.org/andimarek/date-time"
);
scalar!(DATE, "Date", DateCoercing::new(), "An RFC-3339 compliant Full Date Scalar");
scalar!(TIME, "Time", TimeCoercing::new(), "An RFC-3339 compliant Full Time Scalar");
scalar!(
    LOCAL_TIME,
    "LocalTime",
    LocalTimeCoercing::new(),
    "24-hour clock time value string in the format `hh:mm:ss` or `hh:mm:ss.sss`."
);
scalar!(
    LOCAL_DATE_TIME,
    "LocalDateTime",
    LocalDateTimeCoercing::new(),
    "A date-time without a time-zone in the ISO-8601 calendar system, formatted as 2007-12-03 10:15:30",
    "https://scalars.graphql.org/andimarek/local-date-time"
);
scalar!(YEAR, "Year", YearCoercing::new(), "An RFC-3339 compliant Full Year Scalar");
scalar!(
    YEAR_MONTH,
    "YearMonth",
    YearMonthCoercing::new(),
    "An RFC-3339 compliant Full YearMonth Scalar"
);
scalar!(
    ACCURATE_DURATION,
    "AccurateDuration",
    AccurateDurationCoercing::new(),
    "A ISO 8601 duration scalar with only day, hour, minute, second components.",
    "https://scalars.graphql.org/AlexandreCarlton/accurate-duration"
);
scalar!(
    NOMINAL_DURATION,
    "NominalDuration",
    NominalDurationCoercing::new(),
    "A ISO 8601 duration with only year, month, week and day components.",
    "https://scalars.graphql.org/AlexandreCarlton/nominal-duration"
);
scalar!(
    SECONDS_SINCE_EPOCH,
    "SecondsSinceEpoch",
    SecondsSinceEpochCoercing,
    "Scalar that represents a point in time as seconds since the Unix epoch (Unix timestamp). Accepts integers or strings containing integers as input values. Returns a Long representing the number of seconds since epoch (January 1, 1970, 00:00:00 UTC)."
);

// =============================================================================
// Domain values
// =============================================================================

scalar!(
    UUID,
    "UUID",
    TextCoercing::<UuidFormat>::new(),
    "A universally unique identifier compliant UUID Scalar"
);
scalar!(URL, "Url", TextCoercing::<UrlFormat>::new(), "A Url scalar");
scalar!(
    URI,
    "Uri",
    TextCoercing::<UriFormat>::new(),
    "An absolute RFC-3986 URI scalar"
);
scalar!(
    LOCALE,
    "Locale",
    TextCoercing::<LocaleFormat>::new(),
    "A IETF BCP 47 language tag"
);
scalar!(
    CURRENCY,
    "Currency",
    TextCoercing::<CurrencyFormat>::new(),
    "An ISO-4217 compliant Currency Scalar"
);
scalar!(
    COUNTRY_CODE,
    "CountryCode",
    TextCoercing::<CountryCodeFormat>::new(),
    "The CountryCode scalar type as defined by ISO 3166-1 alpha-2."
);
scalar!(
    HEX_COLOR_CODE,
    "HexColorCode",
    TextCoercing::<HexColorCodeFormat>::new(),
    "A field whose value is a hexadecimal color code: https://en.wikipedia.org/wiki/Web_colors."
);

// =============================================================================
// Structural
// =============================================================================

scalar!(OBJECT, "Object", ObjectCoercing, "An object scalar");
scalar!(
    /// Same coercion as [`OBJECT`] under another name.
    JSON,
    "JSON",
    ObjectCoercing,
    "A JSON scalar"
);

/// Every built-in extended scalar, in registration order.
///
/// The standard `Int` and `Float` in [`builtin`] are not included; the host
/// engine already provides them.
pub fn all() -> Vec<&'static ScalarDefinition> {
    vec![
        &*LONG,
        &*SHORT,
        &*BYTE,
        &*BIG_INTEGER,
        &*BIG_DECIMAL,
        &*CHAR,
        &*POSITIVE_INT,
        &*NEGATIVE_INT,
        &*NON_NEGATIVE_INT,
        &*NON_POSITIVE_INT,
        &*POSITIVE_FLOAT,
        &*NEGATIVE_FLOAT,
        &*NON_NEGATIVE_FLOAT,
        &*NON_POSITIVE_FLOAT,
        &*DATE_TIME,
        &*DATE,
        &*TIME,
        &*LOCAL_TIME,
        &*LOCAL_DATE_TIME,
        &*YEAR,
        &*YEAR_MONTH,
        &*ACCURATE_DURATION,
        &*NOMINAL_DURATION,
        &*SECONDS_SINCE_EPOCH,
        &*UUID,
        &*URL,
        &*URI,
        &*LOCALE,
        &*CURRENCY,
        &*COUNTRY_CODE,
        &*HEX_COLOR_CODE,
        &*OBJECT,
        &*JSON,
    ]
}

/// Looks up a built-in by its GraphQL name.
pub fn by_name(name: &str) -> Option<&'static ScalarDefinition> {
    all().into_iter().find(|scalar| scalar.name() == name)
}

/// Starts a regex-validated string scalar named `name`.
pub fn new_regex_scalar(name: impl Into<String>) -> RegexScalarBuilder {
    RegexScalarBuilder::new(name)
}

/// Starts a scalar named `name` that delegates to an existing scalar.
pub fn new_aliased_scalar(name: impl Into<String>) -> AliasedScalarBuilder {
    AliasedScalarBuilder::new(name)
}
