//! Text ↔ scalar conversion.
//!
//! Decoding goes `&str → Value` ([`parse`]) and then `Value → field`
//! ([`FieldValue::from_value`] via [`assign`]). Encoding goes
//! `field → Value` ([`FieldValue::to_value`]) and `Value → String` (`Display`).

use std::borrow::Cow;

use crate::error::MapError;
use crate::schema::{FieldDescriptor, RecordSchema, ScalarKind};
use crate::value::Value;

/// A Rust type usable as a decodable record field.
///
/// Supported: `String`, `bool`, `i8`..`i64`, `isize`, `u8`..`u64`, `usize`, `f32`, `f64`.
pub trait FieldValue: Sized {
    const KIND: ScalarKind;

    fn to_value(&self) -> Value<'_>;

    /// `None` when the variant does not match or the value does not fit.
    fn from_value(value: Value<'_>) -> Option<Self>;
}

impl FieldValue for String {
    const KIND: ScalarKind = ScalarKind::String;

    fn to_value(&self) -> Value<'_> {
        Value::String(Cow::Borrowed(self))
    }

    fn from_value(value: Value<'_>) -> Option<Self> {
        match value {
            Value::String(s) => Some(s.into_owned()),
            _ => None,
        }
    }
}

impl FieldValue for bool {
    const KIND: ScalarKind = ScalarKind::Bool;

    fn to_value(&self) -> Value<'_> {
        Value::Bool(*self)
    }

    fn from_value(value: Value<'_>) -> Option<Self> {
        match value {
            Value::Bool(v) => Some(v),
            _ => None,
        }
    }
}

macro_rules! int_field {
    ($variant:ident, $wide:ty, $kind:ident: $($t:ty),*) => {
        $(
            impl FieldValue for $t {
                const KIND: ScalarKind = ScalarKind::$kind { bits: <$t>::BITS };

                fn to_value(&self) -> Value<'_> {
                    Value::$variant(*self as $wide)
                }

                fn from_value(value: Value<'_>) -> Option<Self> {
                    match value {
                        Value::$variant(v) => <$t>::try_from(v).ok(),
                        _ => None,
                    }
                }
            }
        )*
    };
}

int_field!(Int64, i64, Int: i8, i16, i32, i64, isize);
int_field!(UInt64, u64, UInt: u8, u16, u32, u64, usize);

impl FieldValue for f32 {
    const KIND: ScalarKind = ScalarKind::Float { bits: 32 };

    fn to_value(&self) -> Value<'_> {
        Value::Float32(*self)
    }

    fn from_value(value: Value<'_>) -> Option<Self> {
        match value {
            Value::Float32(v) => Some(v),
            _ => None,
        }
    }
}

impl FieldValue for f64 {
    const KIND: ScalarKind = ScalarKind::Float { bits: 64 };

    fn to_value(&self) -> Value<'_> {
        Value::Float64(*self)
    }

    fn from_value(value: Value<'_>) -> Option<Self> {
        match value {
            Value::Float64(v) => Some(v),
            Value::Float32(v) => Some(f64::from(v)),
            _ => None,
        }
    }
}

/// Coerce `text` to the kind of `field`.
///
/// - String: identity (borrowed).
/// - Integers: base-10, rejected when malformed or outside the declared width.
/// - Floats: decimal, parsed at the declared width.
/// - Bool: `true` iff `text` equals `"true"` ignoring case; anything else is `false`.
/// - Unsupported kinds: `UnsupportedType`.
pub fn parse<'a>(
    text: &'a str,
    field: &FieldDescriptor,
    schema: &RecordSchema,
) -> Result<Value<'a>, MapError> {
    let fail = |reason: String| MapError::conversion(schema, field.index, text, reason);

    match field.kind {
        ScalarKind::String => Ok(Value::String(Cow::Borrowed(text))),
        ScalarKind::Int { bits } => {
            let v: i64 = text.parse().map_err(|e| fail(format!("{e}")))?;
            if bits < 64 {
                let max = (1i64 << (bits - 1)) - 1;
                let min = -max - 1;
                if !(min..=max).contains(&v) {
                    return Err(fail(format!("out of range for i{bits}")));
                }
            }
            Ok(Value::Int64(v))
        }
        ScalarKind::UInt { bits } => {
            let v: u64 = text.parse().map_err(|e| fail(format!("{e}")))?;
            if bits < 64 && v >> bits != 0 {
                return Err(fail(format!("out of range for u{bits}")));
            }
            Ok(Value::UInt64(v))
        }
        ScalarKind::Float { bits: 32 } => text
            .parse::<f32>()
            .map(Value::Float32)
            .map_err(|e| fail(format!("{e}"))),
        ScalarKind::Float { .. } => text
            .parse::<f64>()
            .map(Value::Float64)
            .map_err(|e| fail(format!("{e}"))),
        ScalarKind::Bool => Ok(Value::Bool(text.eq_ignore_ascii_case("true"))),
        ScalarKind::Unsupported { type_name } => Err(MapError::unsupported(schema, field.index, type_name)),
    }
}

/// Store `value` into `slot`, the field at `index` of `schema`.
pub fn assign<T: FieldValue>(
    slot: &mut T,
    value: Value<'_>,
    schema: &RecordSchema,
    index: usize,
) -> Result<(), MapError> {
    let text = value.to_string();
    let found = value.type_name();
    *slot = T::from_value(value)
        .ok_or_else(|| MapError::conversion(schema, index, text, format!("{found} does not fit {}", T::KIND)))?;
    Ok(())
}

/// Setter for a field whose type has no coercion rule.
pub fn unsupported(schema: &RecordSchema, index: usize) -> Result<(), MapError> {
    let type_name = match schema.field(index).map(|f| f.kind) {
        Some(ScalarKind::Unsupported { type_name }) => type_name,
        _ => "unknown",
    };
    Err(MapError::unsupported(schema, index, type_name))
}
