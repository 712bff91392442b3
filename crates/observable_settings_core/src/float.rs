//! Serde helpers for floats that may be non-finite.
//!
//! JSON has no NaN or infinity; `serde_json` writes them as `null`, which
//! cannot be read back as a number. Finite values stay numbers and
//! non-finite values are written as `"NaN"`, `"inf"` or `"-inf"`.
//!
//! ```ignore
//! #[derive(Serialize, Deserialize)]
//! struct Gain(#[serde(with = "crate::float::lenient_f64")] f64);
//! ```

macro_rules! non_finite_as_text {
    ($module:ident, $float:ty, $serialize:ident) => {
        #[doc = concat!("`serde(with)` module for `", stringify!($float), "`.")]
        pub(crate) mod $module {
            use core::fmt;
            use serde::de::{self, Unexpected, Visitor};
            use serde::{Deserializer, Serializer};

            pub(crate) fn serialize<S: Serializer>(
                value: &$float,
                serializer: S,
            ) -> Result<S::Ok, S::Error> {
                if value.is_finite() {
                    serializer.$serialize(*value)
                } else {
                    serializer.collect_str(value)
                }
            }

            pub(crate) fn deserialize<'de, D: Deserializer<'de>>(
                deserializer: D,
            ) -> Result<$float, D::Error> {
                deserializer.deserialize_any(FloatVisitor)
            }

            struct FloatVisitor;

            impl Visitor<'_> for FloatVisitor {
                type Value = $float;

                fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                    formatter.write_str("a number, \"NaN\", \"inf\" or \"-inf\"")
                }

                fn visit_f64<E: de::Error>(self, value: f64) -> Result<$float, E> {
                    Ok(value as $float)
                }

                fn visit_i64<E: de::Error>(self, value: i64) -> Result<$float, E> {
                    Ok(value as $float)
                }

                fn visit_u64<E: de::Error>(self, value: u64) -> Result<$float, E> {
                    Ok(value as $float)
                }

                fn visit_str<E: de::Error>(self, value: &str) -> Result<$float, E> {
                    value
                        .parse::<$float>()
                        .map_err(|_| E::invalid_value(Unexpected::Str(value), &self))
                }
            }
        }
    };
}

non_finite_as_text!(lenient_f32, f32, serialize_f32);
non_finite_as_text!(lenient_f64, f64, serialize_f64);

/// NaN-aware equality: NaN equals NaN, otherwise `==`.
pub(crate) fn same_f32(a: f32, b: f32) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

/// NaN-aware equality: NaN equals NaN, otherwise `==`.
pub(crate) fn same_f64(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}
