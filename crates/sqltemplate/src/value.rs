//! Bound parameter values.
//!
//! Template parameters are heterogeneous: one builder can bind a string to
//! `status`, an integer to `id` and a timestamp to `created_at`. [`ParamValue`]
//! is the closed set of value kinds a template can carry, with
//! [`ParamValue::Json`] as the catch-all for anything else.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use uuid::Uuid;

/// A value bound to a named placeholder.
///
/// Serializes untagged, so a params map renders as a plain JSON object:
/// `{"C1eq":1,"C2set":"abc"}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// Text value
    Text(String),
    /// Integer value
    Int(i64),
    /// Floating point value
    Float(f64),
    /// Boolean value
    Bool(bool),
    /// Calendar date
    Date(NaiveDate),
    /// Date and time without time zone
    DateTime(NaiveDateTime),
    /// UTC timestamp
    Timestamp(DateTime<Utc>),
    /// UUID value
    Uuid(Uuid),
    /// Any other JSON-representable value
    Json(serde_json::Value),
}

impl ParamValue {
    /// Short name of the value kind, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ParamValue::Text(_) => "text",
            ParamValue::Int(_) => "int",
            ParamValue::Float(_) => "float",
            ParamValue::Bool(_) => "bool",
            ParamValue::Date(_) => "date",
            ParamValue::DateTime(_) => "datetime",
            ParamValue::Timestamp(_) => "timestamp",
            ParamValue::Uuid(_) => "uuid",
            ParamValue::Json(_) => "json",
        }
    }

    /// Get the integer payload, if this is an integer value.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ParamValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Total order used to number `IN` list values.
    ///
    /// Values of one kind compare naturally (floats via `f64::total_cmp`);
    /// values of different kinds order by kind.
    pub(crate) fn total_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (ParamValue::Text(a), ParamValue::Text(b)) => a.cmp(b),
            (ParamValue::Int(a), ParamValue::Int(b)) => a.cmp(b),
            (ParamValue::Float(a), ParamValue::Float(b)) => a.total_cmp(b),
            (ParamValue::Bool(a), ParamValue::Bool(b)) => a.cmp(b),
            (ParamValue::Date(a), ParamValue::Date(b)) => a.cmp(b),
            (ParamValue::DateTime(a), ParamValue::DateTime(b)) => a.cmp(b),
            (ParamValue::Timestamp(a), ParamValue::Timestamp(b)) => a.cmp(b),
            (ParamValue::Uuid(a), ParamValue::Uuid(b)) => a.cmp(b),
            (ParamValue::Json(a), ParamValue::Json(b)) => match (a.as_u64(), b.as_u64()) {
                (Some(x), Some(y)) => x.cmp(&y),
                _ => a.to_string().cmp(&b.to_string()),
            },
            _ => self.rank().cmp(&other.rank()),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            ParamValue::Text(_) => 0,
            ParamValue::Int(_) => 1,
            ParamValue::Float(_) => 2,
            ParamValue::Bool(_) => 3,
            ParamValue::Date(_) => 4,
            ParamValue::DateTime(_) => 5,
            ParamValue::Timestamp(_) => 6,
            ParamValue::Uuid(_) => 7,
            ParamValue::Json(_) => 8,
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Text(s) => write!(f, "{}", s),
            ParamValue::Int(n) => write!(f, "{}", n),
            ParamValue::Float(n) => write!(f, "{}", n),
            ParamValue::Bool(b) => write!(f, "{}", b),
            ParamValue::Date(d) => write!(f, "{}", d),
            ParamValue::DateTime(dt) => write!(f, "{}", dt),
            ParamValue::Timestamp(ts) => write!(f, "{}", ts.to_rfc3339()),
            ParamValue::Uuid(u) => write!(f, "{}", u),
            ParamValue::Json(v) => write!(f, "{}", v),
        }
    }
}

/// Conversion into an optional bound value.
///
/// Scalars always produce a value. `Option<T>` produces nothing for `None`,
/// which is what makes every builder call a no-op on an absent value.
pub trait IntoParam {
    /// Convert into a bound value, or `None` if the value is absent.
    fn into_param(self) -> Option<ParamValue>;
}

impl IntoParam for ParamValue {
    fn into_param(self) -> Option<ParamValue> {
        Some(self)
    }
}

impl<T: IntoParam> IntoParam for Option<T> {
    fn into_param(self) -> Option<ParamValue> {
        self.and_then(IntoParam::into_param)
    }
}

macro_rules! impl_into_param {
    ($variant:ident: $($ty:ty),+ $(,)?) => {
        $(
            impl IntoParam for $ty {
                fn into_param(self) -> Option<ParamValue> {
                    Some(ParamValue::$variant(self.into()))
                }
            }

            impl From<$ty> for ParamValue {
                fn from(value: $ty) -> Self {
                    ParamValue::$variant(value.into())
                }
            }
        )+
    };
}

impl_into_param!(Text: String, &str, &String, char);
impl_into_param!(Int: i8, i16, i32, i64, u8, u16, u32);
impl_into_param!(Float: f32, f64);
impl_into_param!(Bool: bool);
impl_into_param!(Date: NaiveDate);
impl_into_param!(DateTime: NaiveDateTime);
impl_into_param!(Timestamp: DateTime<Utc>);
impl_into_param!(Uuid: Uuid);
impl_into_param!(Json: serde_json::Value);

// Integers wider than i64: `Int` when in range, else a JSON number, else text.
macro_rules! impl_into_param_wide {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl IntoParam for $ty {
                fn into_param(self) -> Option<ParamValue> {
                    Some(ParamValue::from(self))
                }
            }

            impl From<$ty> for ParamValue {
                fn from(value: $ty) -> Self {
                    if let Ok(n) = i64::try_from(value) {
                        ParamValue::Int(n)
                    } else if let Ok(n) = u64::try_from(value) {
                        ParamValue::Json(n.into())
                    } else {
                        ParamValue::Text(value.to_string())
                    }
                }
            }
        )+
    };
}

impl_into_param_wide!(u64, usize, isize, i128, u128);
