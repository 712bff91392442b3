//! Values that a key-value store holds natively.
//!
//! [`SettingValue`] is the closed set of types a store keeps without going
//! through JSON text. [`NativeSetting`] maps a Rust type onto exactly one of
//! its variants, so a single pair of generic accessors serves every native
//! type.

use crate::float::{same_f32, same_f64};
use crate::geometry::{Point, Rect, Size};
use chrono::{DateTime, FixedOffset};
use core::fmt;
use core::time::Duration;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A value stored natively in a [`KeyValueStore`](crate::KeyValueStore).
///
/// Serialized adjacently tagged (`{"type": "F64", "value": 0.75}`) so a
/// persisted value keeps its exact variant across a reload. Non-finite
/// floats are written as text (`{"type": "F64", "value": "NaN"}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum SettingValue {
    /// `i16`
    I16(i16),
    /// `u16`
    U16(u16),
    /// `i32`
    I32(i32),
    /// `u32`
    U32(u32),
    /// `i64`
    I64(i64),
    /// `u64`
    U64(u64),
    /// `f32`
    F32(#[serde(with = "crate::float::lenient_f32")] f32),
    /// `f64`
    F64(#[serde(with = "crate::float::lenient_f64")] f64),
    /// `bool`
    Bool(bool),
    /// `char`
    Char(char),
    /// `String`, also the carrier for JSON text.
    String(String),
    /// A date and time with a UTC offset.
    DateTime(DateTime<FixedOffset>),
    /// A span of time.
    Duration(Duration),
    /// A GUID.
    Uuid(Uuid),
    /// A [`Point`].
    Point(Point),
    /// A [`Size`].
    Size(Size),
    /// A [`Rect`].
    Rect(Rect),
}

impl SettingValue {
    /// Returns the name of the variant, for logging.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::I16(_) => "i16",
            Self::U16(_) => "u16",
            Self::I32(_) => "i32",
            Self::U32(_) => "u32",
            Self::I64(_) => "i64",
            Self::U64(_) => "u64",
            Self::F32(_) => "f32",
            Self::F64(_) => "f64",
            Self::Bool(_) => "bool",
            Self::Char(_) => "char",
            Self::String(_) => "String",
            Self::DateTime(_) => "DateTime<FixedOffset>",
            Self::Duration(_) => "Duration",
            Self::Uuid(_) => "Uuid",
            Self::Point(_) => "Point",
            Self::Size(_) => "Size",
            Self::Rect(_) => "Rect",
        }
    }

    /// Compares two values as settings: like `==`, except that NaN equals
    /// NaN, also inside [`Point`], [`Size`] and [`Rect`].
    #[must_use]
    pub fn same_as(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::F32(a), Self::F32(b)) => same_f32(*a, *b),
            (Self::F64(a), Self::F64(b)) => same_f64(*a, *b),
            (Self::Point(a), Self::Point(b)) => a.same_as(b),
            (Self::Size(a), Self::Size(b)) => a.same_as(b),
            (Self::Rect(a), Self::Rect(b)) => a.same_as(b),
            _ => self == other,
        }
    }

    /// Returns the contained text if this is a [`SettingValue::String`].
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(text) => Some(text),
            _ => None,
        }
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::I16(v) => write!(f, "{v}"),
            Self::U16(v) => write!(f, "{v}"),
            Self::I32(v) => write!(f, "{v}"),
            Self::U32(v) => write!(f, "{v}"),
            Self::I64(v) => write!(f, "{v}"),
            Self::U64(v) => write!(f, "{v}"),
            Self::F32(v) => write!(f, "{v}"),
            Self::F64(v) => write!(f, "{v}"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Char(v) => write!(f, "{v:?}"),
            Self::String(v) => write!(f, "{v:?}"),
            Self::DateTime(v) => write!(f, "{}", v.to_rfc3339()),
            Self::Duration(v) => write!(f, "{v:?}"),
            Self::Uuid(v) => write!(f, "{v}"),
            Self::Point(v) => write!(f, "({}, {})", v.x, v.y),
            Self::Size(v) => write!(f, "{}x{}", v.width, v.height),
            Self::Rect(v) => write!(f, "({}, {}, {}x{})", v.x, v.y, v.width, v.height),
        }
    }
}

/// A type the key-value store can hold without JSON text.
///
/// Each implementor owns exactly one [`SettingValue`] variant.
/// [`from_setting_value`](Self::from_setting_value) accepts only that
/// variant: an `I32` is never read back as an `i64`.
pub trait NativeSetting: Clone + PartialEq + 'static {
    /// Wraps the value in its variant.
    fn to_setting_value(&self) -> SettingValue;

    /// Returns the value if `value` holds this type's variant.
    fn from_setting_value(value: &SettingValue) -> Option<Self>;

    /// Returns whether assigning `other` over `self` leaves the setting
    /// unchanged. Float-based types treat NaN as equal to NaN.
    fn same_setting(&self, other: &Self) -> bool {
        self == other
    }
}

macro_rules! native_settings {
    ($($ty:ty => $variant:ident $(by $same:expr)?),* $(,)?) => {
        $(
            impl NativeSetting for $ty {
                fn to_setting_value(&self) -> SettingValue {
                    SettingValue::$variant(self.clone())
                }

                fn from_setting_value(value: &SettingValue) -> Option<Self> {
                    match value {
                        SettingValue::$variant(inner) => Some(inner.clone()),
                        _ => None,
                    }
                }

                $(
                    fn same_setting(&self, other: &Self) -> bool {
                        ($same)(self, other)
                    }
                )?
            }

            impl From<$ty> for SettingValue {
                fn from(value: $ty) -> Self {
                    SettingValue::$variant(value)
                }
            }
        )*
    };
}

native_settings! {
    i16 => I16,
    u16 => U16,
    i32 => I32,
    u32 => U32,
    i64 => I64,
    u64 => U64,
    f32 => F32 by |a: &f32, b: &f32| same_f32(*a, *b),
    f64 => F64 by |a: &f64, b: &f64| same_f64(*a, *b),
    bool => Bool,
    char => Char,
    String => String,
    DateTime<FixedOffset> => DateTime,
    Duration => Duration,
    Uuid => Uuid,
    Point => Point by Point::same_as,
    Size => Size by Size::same_as,
    Rect => Rect by Rect::same_as,
}

impl From<&str> for SettingValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}
