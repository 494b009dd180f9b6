//! Runtime values exchanged with scalar coercions.
//!
//! [`Value`] is the closed set of shapes a coercion can be handed: resolver
//! output on `serialize`, decoded variables on `parse_value`, and the results
//! of every parse operation. Each scalar matches on the variants it accepts
//! and rejects the rest with a message naming [`Value::type_name`].

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use async_graphql::{Name, Number, Value as ConstValue};
use bigdecimal::BigDecimal;
use indexmap::IndexMap;
use num_bigint::BigInt;
use num_traits::ToPrimitive;
use time::{Date, OffsetDateTime, PrimitiveDateTime};
use url::Url;
use uuid::Uuid;

use crate::scalars::decimal;
use crate::types::{
    Color, CountryCode, Currency, Locale, OffsetTime, Period, Year, YearMonth, format_duration,
    format_local_time, format_offset,
};

/// A runtime value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Boolean(bool),
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f64),
    BigInteger(BigInt),
    BigDecimal(BigDecimal),
    Char(char),
    String(String),
    DateTime(OffsetDateTime),
    LocalDateTime(PrimitiveDateTime),
    Date(Date),
    Time(OffsetTime),
    LocalTime(time::Time),
    Year(Year),
    YearMonth(YearMonth),
    Duration(time::Duration),
    Period(Period),
    Uuid(Uuid),
    Url(Url),
    Path(PathBuf),
    Locale(Locale),
    Currency(Currency),
    CountryCode(CountryCode),
    Color(Color),
    List(Vec<Value>),
    Object(IndexMap<String, Value>),
}

impl Value {
    /// Short name of the variant, used in error messages.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Boolean(_) => "Boolean",
            Value::Byte(_) => "Byte",
            Value::Short(_) => "Short",
            Value::Int(_) => "Int",
            Value::Long(_) => "Long",
            Value::Float(_) => "Float",
            Value::BigInteger(_) => "BigInteger",
            Value::BigDecimal(_) => "BigDecimal",
            Value::Char(_) => "Char",
            Value::String(_) => "String",
            Value::DateTime(_) => "DateTime",
            Value::LocalDateTime(_) => "LocalDateTime",
            Value::Date(_) => "Date",
            Value::Time(_) => "Time",
            Value::LocalTime(_) => "LocalTime",
            Value::Year(_) => "Year",
            Value::YearMonth(_) => "YearMonth",
            Value::Duration(_) => "Duration",
            Value::Period(_) => "Period",
            Value::Uuid(_) => "UUID",
            Value::Url(_) => "Url",
            Value::Path(_) => "Path",
            Value::Locale(_) => "Locale",
            Value::Currency(_) => "Currency",
            Value::CountryCode(_) => "CountryCode",
            Value::Color(_) => "Color",
            Value::List(_) => "List",
            Value::Object(_) => "Object",
        }
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// True for every integral and floating point variant.
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(
            self,
            Value::Byte(_)
                | Value::Short(_)
                | Value::Int(_)
                | Value::Long(_)
                | Value::Float(_)
                | Value::BigInteger(_)
                | Value::BigDecimal(_)
        )
    }

    /// Exact decimal form of a numeric variant.
    ///
    /// Floats go through their shortest round-trip text, so `0.1` becomes
    /// `0.1` rather than its binary expansion. Non-finite floats and
    /// non-numeric variants yield `None`.
    pub fn to_big_decimal(&self) -> Option<BigDecimal> {
        match self {
            Value::Byte(v) => Some(BigDecimal::from(*v)),
            Value::Short(v) => Some(BigDecimal::from(*v)),
            Value::Int(v) => Some(BigDecimal::from(*v)),
            Value::Long(v) => Some(BigDecimal::from(*v)),
            Value::BigInteger(v) => Some(BigDecimal::from(v.clone())),
            Value::BigDecimal(v) => Some(v.clone()),
            Value::Float(f) if f.is_finite() => BigDecimal::from_str(&f.to_string()).ok(),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Boolean(v) => write!(f, "{v}"),
            Value::Byte(v) => write!(f, "{v}"),
            Value::Short(v) => write!(f, "{v}"),
            Value::Int(v) => write!(f, "{v}"),
            Value::Long(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::BigInteger(v) => write!(f, "{v}"),
            Value::BigDecimal(v) => write!(f, "{v}"),
            Value::Char(v) => write!(f, "{v}"),
            Value::String(v) => f.write_str(v),
            Value::DateTime(v) => write!(
                f,
                "{}T{}{}",
                format_date(&v.date()),
                format_local_time(&v.time()),
                format_offset(&v.offset())
            ),
            Value::LocalDateTime(v) => write!(
                f,
                "{}T{}",
                format_date(&v.date()),
                format_local_time(&v.time())
            ),
            Value::Date(v) => f.write_str(&format_date(v)),
            Value::Time(v) => write!(f, "{v}"),
            Value::LocalTime(v) => f.write_str(&format_local_time(v)),
            Value::Year(v) => write!(f, "{v}"),
            Value::YearMonth(v) => write!(f, "{v}"),
            Value::Duration(v) => f.write_str(&format_duration(v)),
            Value::Period(v) => write!(f, "{v}"),
            Value::Uuid(v) => write!(f, "{v}"),
            Value::Url(v) => f.write_str(v.as_str()),
            Value::Path(v) => write!(f, "{}", v.display()),
            Value::Locale(v) => write!(f, "{v}"),
            Value::Currency(v) => write!(f, "{v}"),
            Value::CountryCode(v) => write!(f, "{v}"),
            Value::Color(v) => write!(f, "{v}"),
            Value::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Value::Object(fields) => {
                f.write_str("{")?;
                for (i, (key, value)) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}={value}")?;
                }
                f.write_str("}")
            }
        }
    }
}

/// `yyyy-MM-dd`, with a sign and at least four year digits outside `0..=9999`.
pub(crate) fn format_date(date: &Date) -> String {
    let year = date.year();
    let month = u8::from(date.month());
    let day = date.day();
    if (0..=9999).contains(&year) {
        format!("{year:04}-{month:02}-{day:02}")
    } else {
        format!("{year:+05}-{month:02}-{day:02}")
    }
}

macro_rules! impl_from {
    ($( $ty:ty => $variant:ident ),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::$variant(value)
                }
            }
        )*
    };
}

impl_from! {
    bool => Boolean,
    i8 => Byte,
    i16 => Short,
    i32 => Int,
    i64 => Long,
    f64 => Float,
    BigInt => BigInteger,
    BigDecimal => BigDecimal,
    char => Char,
    String => String,
    OffsetDateTime => DateTime,
    PrimitiveDateTime => LocalDateTime,
    Date => Date,
    OffsetTime => Time,
    time::Time => LocalTime,
    Year => Year,
    YearMonth => YearMonth,
    time::Duration => Duration,
    Period => Period,
    Uuid => Uuid,
    Url => Url,
    PathBuf => Path,
    Locale => Locale,
    Currency => Currency,
    CountryCode => CountryCode,
    Color => Color,
    Vec<Value> => List,
    IndexMap<String, Value> => Object,
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

// =============================================================================
// Host engine values
// =============================================================================

impl From<ConstValue> for Value {
    fn from(value: ConstValue) -> Self {
        match value {
            ConstValue::Null => Value::Null,
            ConstValue::Boolean(b) => Value::Boolean(b),
            ConstValue::Number(n) => number_to_value(&n),
            ConstValue::String(s) => Value::String(s),
            ConstValue::Enum(name) => Value::String(name.to_string()),
            ConstValue::Binary(bytes) => {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            }
            ConstValue::List(items) => Value::List(items.into_iter().map(Value::from).collect()),
            ConstValue::Object(fields) => Value::Object(
                fields
                    .into_iter()
                    .map(|(k, v)| (k.to_string(), Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<Value> for ConstValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => ConstValue::Null,
            Value::Boolean(b) => ConstValue::Boolean(b),
            Value::Byte(v) => ConstValue::Number(v.into()),
            Value::Short(v) => ConstValue::Number(v.into()),
            Value::Int(v) => ConstValue::Number(v.into()),
            Value::Long(v) => ConstValue::Number(v.into()),
            Value::Float(f) => Number::from_f64(f).map_or(ConstValue::Null, ConstValue::Number),
            Value::BigInteger(v) => big_integer_to_const(&v),
            Value::BigDecimal(v) => big_decimal_to_const(&v),
            Value::List(items) => {
                ConstValue::List(items.into_iter().map(ConstValue::from).collect())
            }
            Value::Object(fields) => ConstValue::Object(
                fields
                    .into_iter()
                    .map(|(k, v)| (Name::new(k), ConstValue::from(v)))
                    .collect(),
            ),
            other => ConstValue::String(other.to_string()),
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Boolean(b),
            serde_json::Value::Number(n) => number_to_value(&n),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(fields) => Value::Object(
                fields
                    .into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect(),
            ),
        }
    }
}

fn number_to_value(n: &Number) -> Value {
    if let Some(i) = n.as_i64() {
        Value::Long(i)
    } else if let Some(u) = n.as_u64() {
        Value::BigInteger(BigInt::from(u))
    } else {
        Value::Float(n.as_f64().unwrap_or(f64::NAN))
    }
}

fn big_integer_to_const(v: &BigInt) -> ConstValue {
    if let Ok(i) = i64::try_from(v) {
        ConstValue::Number(i.into())
    } else if let Ok(u) = u64::try_from(v) {
        ConstValue::Number(u.into())
    } else {
        ConstValue::String(v.to_string())
    }
}

/// Numbers that survive an `f64` round trip are sent as JSON numbers, the rest
/// as decimal strings. Magnitudes are checked before any rescaling.
fn big_decimal_to_const(v: &BigDecimal) -> ConstValue {
    if !(-F64_MIN_MAGNITUDE..=F64_MAX_MAGNITUDE).contains(&decimal::magnitude(v)) {
        return ConstValue::String(decimal::to_bounded_string(v));
    }
    if let Some(i) = decimal::to_exact_integer(v).and_then(|i| i64::try_from(&i).ok()) {
        return ConstValue::Number(i.into());
    }
    let exact_float = v
        .to_f64()
        .filter(|f| f.is_finite())
        .filter(|f| BigDecimal::from_str(&f.to_string()).is_ok_and(|back| &back == v));
    match exact_float.and_then(Number::from_f64) {
        Some(n) => ConstValue::Number(n),
        None => ConstValue::String(v.to_string()),
    }
}

/// Powers of ten an `f64` can reach, subnormals included.
const F64_MIN_MAGNITUDE: i64 = 324;
const F64_MAX_MAGNITUDE: i64 = 308;

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{date, datetime, offset, time};

    #[test]
    fn test_type_names() {
        assert_eq!(Value::Null.type_name(), "null");
        assert_eq!(Value::from(true).type_name(), "Boolean");
        assert_eq!(Value::from(3i64).type_name(), "Long");
        assert_eq!(Value::from("x").type_name(), "String");
        assert_eq!(Value::from(Uuid::nil()).type_name(), "UUID");
    }

    #[test]
    fn test_to_big_decimal() {
        assert_eq!(
            Value::Float(0.1).to_big_decimal(),
            Some(BigDecimal::from_str("0.1").unwrap())
        );
        assert_eq!(Value::Byte(-3).to_big_decimal(), Some(BigDecimal::from(-3)));
        assert_eq!(Value::Float(f64::NAN).to_big_decimal(), None);
        assert_eq!(Value::from("1").to_big_decimal(), None);
    }

    #[test]
    fn test_display_temporal() {
        let dt = datetime!(2024-01-15 10:30:00.5 +01:00);
        assert_eq!(Value::from(dt).to_string(), "2024-01-15T10:30:00.5+01:00");
        assert_eq!(Value::from(date!(2024 - 02 - 29)).to_string(), "2024-02-29");
        assert_eq!(
            Value::from(OffsetTime::new(time!(10:00), offset!(UTC))).to_string(),
            "10:00:00Z"
        );
        assert_eq!(Value::from(time::Duration::hours(2)).to_string(), "PT2H");
    }

    #[test]
    fn test_display_structures() {
        let mut fields = IndexMap::new();
        fields.insert("a".to_string(), Value::Null);
        fields.insert(
            "b".to_string(),
            Value::List(vec![Value::Int(1), Value::from("x")]),
        );
        assert_eq!(Value::Object(fields).to_string(), "{a=null, b=[1, x]}");
    }

    #[test]
    fn test_from_const_value() {
        let value = ConstValue::from_json(serde_json::json!({
            "id": 1,
            "big": 18446744073709551615u64,
            "ratio": 0.5,
            "tags": ["a", null]
        }))
        .unwrap();
        let Value::Object(fields) = Value::from(value) else {
            panic!("expected object");
        };
        assert_eq!(fields["id"], Value::Long(1));
        assert_eq!(
            fields["big"],
            Value::BigInteger(BigInt::from(u64::MAX))
        );
        assert_eq!(fields["ratio"], Value::Float(0.5));
        assert_eq!(
            fields["tags"],
            Value::List(vec![Value::from("a"), Value::Null])
        );
    }

    #[test]
    fn test_into_const_value() {
        assert_eq!(
            ConstValue::from(Value::Short(7)),
            ConstValue::Number(7.into())
        );
        assert_eq!(
            ConstValue::from(Value::BigInteger(BigInt::from(i64::MAX) * 4)),
            ConstValue::String("36893488147419103228".into())
        );
        assert_eq!(
            ConstValue::from(Value::BigDecimal(BigDecimal::from_str("1.5").unwrap())),
            ConstValue::Number(Number::from_f64(1.5).unwrap())
        );
        assert_eq!(
            ConstValue::from(Value::BigDecimal(
                BigDecimal::from_str("0.10000000000000000000001").unwrap()
            )),
            ConstValue::String("0.10000000000000000000001".into())
        );
        assert_eq!(
            ConstValue::from(Value::from(date!(2024 - 01 - 01))),
            ConstValue::String("2024-01-01".into())
        );
    }

    #[test]
    fn test_huge_exponents_stay_symbolic() {
        let huge = BigDecimal::from_str("15e10000000").unwrap();
        assert_eq!(
            ConstValue::from(Value::BigDecimal(huge)),
            ConstValue::String("15E10000000".into())
        );
        let tiny = BigDecimal::from_str("-7e-10000000").unwrap();
        assert_eq!(
            ConstValue::from(Value::BigDecimal(tiny)),
            ConstValue::String("-7E-10000000".into())
        );
        assert_eq!(
            ConstValue::from(Value::BigDecimal(BigDecimal::from_str("2e3").unwrap())),
            ConstValue::Number(2000.into())
        );
    }

    #[test]
    fn test_from_json_value() {
        let value = Value::from(serde_json::json!({"n": -2, "s": "x"}));
        let Value::Object(fields) = value else {
            panic!("expected object");
        };
        assert_eq!(fields["n"], Value::Long(-2));
        assert_eq!(fields["s"], Value::from("x"));
    }
}
