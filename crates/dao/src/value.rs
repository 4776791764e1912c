use crate::ConvertError;
use chrono::{
    DateTime,
    NaiveDateTime,
    TimeZone,
    Utc,
};
use serde::{
    Deserialize,
    Serialize,
};
use std::fmt;

/// Generic value storage for catalog cells.
///
/// Privilege flags are stored as `Text("Y")` / `Text("N")`, identities as text
/// and grant timestamps as `Timestamp`. Platforms that have no native timestamp
/// hand them back as text, which `FromValue` accepts.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum Value {
    Nil, // no value
    Bool(bool),

    Int(i32),
    Bigint(i64),

    Char(char),
    Text(String),

    Timestamp(DateTime<Utc>),
}

impl Value {
    pub fn is_nil(&self) -> bool { *self == Value::Nil }

    /// the textual content of this value, if it has one
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Nil => write!(f, ""),
            Value::Bool(v) => write!(f, "{}", v),
            Value::Int(v) => write!(f, "{}", v),
            Value::Bigint(v) => write!(f, "{}", v),
            Value::Char(v) => write!(f, "{}", v),
            Value::Text(v) => write!(f, "{}", v),
            Value::Timestamp(v) => write!(f, "{}", v.to_rfc3339()),
        }
    }
}

/// A trait to allow passing of parameters ergonomically
/// when composing filters and assignments
pub trait ToValue {
    fn to_value(&self) -> Value;
}

macro_rules! impl_to_value {
    ($ty:ty, $variant:ident) => {
        impl ToValue for $ty {
            fn to_value(&self) -> Value { Value::$variant(self.to_owned()) }
        }
    };
}

impl_to_value!(bool, Bool);
impl_to_value!(i32, Int);
impl_to_value!(i64, Bigint);
impl_to_value!(char, Char);
impl_to_value!(String, Text);
impl_to_value!(DateTime<Utc>, Timestamp);

impl ToValue for &str {
    fn to_value(&self) -> Value { Value::Text(self.to_string()) }
}

impl<T> ToValue for Option<T>
where
    T: ToValue,
{
    fn to_value(&self) -> Value {
        match self {
            Some(v) => v.to_value(),
            None => Value::Nil,
        }
    }
}

impl<T> ToValue for &T
where
    T: ToValue,
{
    fn to_value(&self) -> Value { (*self).to_value() }
}

impl<T> From<T> for Value
where
    T: ToValue,
{
    fn from(v: T) -> Value { v.to_value() }
}

pub trait FromValue: Sized {
    fn from_value(v: &Value) -> Result<Self, ConvertError>;
}

fn not_supported(v: &Value, target: &str) -> ConvertError {
    ConvertError::NotSupported(format!("{:?}", v), target.to_string())
}

impl FromValue for String {
    fn from_value(v: &Value) -> Result<Self, ConvertError> {
        match *v {
            Value::Text(ref v) => Ok(v.to_owned()),
            Value::Char(ref v) => Ok(v.to_string()),
            _ => Err(not_supported(v, "String")),
        }
    }
}

impl FromValue for bool {
    fn from_value(v: &Value) -> Result<Self, ConvertError> {
        match *v {
            Value::Bool(v) => Ok(v),
            Value::Int(v) => Ok(v == 1),
            Value::Bigint(v) => Ok(v == 1),
            _ => Err(not_supported(v, "bool")),
        }
    }
}

impl FromValue for i32 {
    fn from_value(v: &Value) -> Result<Self, ConvertError> {
        match *v {
            Value::Int(v) => Ok(v),
            Value::Bigint(v) if v >= i64::from(i32::min_value()) && v <= i64::from(i32::max_value()) => Ok(v as i32),
            _ => Err(not_supported(v, "i32")),
        }
    }
}

impl FromValue for i64 {
    fn from_value(v: &Value) -> Result<Self, ConvertError> {
        match *v {
            Value::Int(v) => Ok(i64::from(v)),
            Value::Bigint(v) => Ok(v),
            _ => Err(not_supported(v, "i64")),
        }
    }
}

impl FromValue for DateTime<Utc> {
    fn from_value(v: &Value) -> Result<Self, ConvertError> {
        match *v {
            Value::Text(ref text) => parse_date_time(text).ok_or_else(|| not_supported(v, "DateTime")),
            Value::Timestamp(v) => Ok(v),
            _ => Err(not_supported(v, "DateTime")),
        }
    }
}

impl<T> FromValue for Option<T>
where
    T: FromValue,
{
    fn from_value(v: &Value) -> Result<Self, ConvertError> {
        match *v {
            Value::Nil => Ok(None),
            _ => FromValue::from_value(v).map(Some),
        }
    }
}

fn parse_date_time(v: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(v) {
        return Some(ts.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(v, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(v, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .map(|naive| Utc.from_utc_datetime(&naive))
}
