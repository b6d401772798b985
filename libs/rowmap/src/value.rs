use std::borrow::Cow;
use std::fmt;

/// One row of text fields. Used for both header and data rows.
pub type Row = Vec<String>;

/// Scalar value of a single record field.
///
/// Strategy by type:
/// - Integers: widened to 64 bits, the declared width lives in `ScalarKind`
/// - Floats: keep their width so `Display` prints the shortest form of the declared type
/// - String: `Cow` (borrowed from the source row when decoding)
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    Int64(i64),
    UInt64(u64),
    Float32(f32),
    Float64(f64),
    Bool(bool),
    String(Cow<'a, str>),
}

impl Value<'_> {
    /// Short name of the variant, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int64(_) => "int64",
            Value::UInt64(_) => "uint64",
            Value::Float32(_) => "float32",
            Value::Float64(_) => "float64",
            Value::Bool(_) => "bool",
            Value::String(_) => "string",
        }
    }

    pub fn into_owned(self) -> Value<'static> {
        match self {
            Value::Int64(v) => Value::Int64(v),
            Value::UInt64(v) => Value::UInt64(v),
            Value::Float32(v) => Value::Float32(v),
            Value::Float64(v) => Value::Float64(v),
            Value::Bool(v) => Value::Bool(v),
            Value::String(s) => Value::String(Cow::Owned(s.into_owned())),
        }
    }
}

/// Natural textual form: base-10 integers, shortest round-trip floats,
/// `true` / `false`, strings verbatim.
impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int64(v) => write!(f, "{v}"),
            Value::UInt64(v) => write!(f, "{v}"),
            Value::Float32(v) => write!(f, "{v}"),
            Value::Float64(v) => write!(f, "{v}"),
            Value::Bool(v) => write!(f, "{v}"),
            Value::String(s) => f.write_str(s),
        }
    }
}

impl From<String> for Value<'static> {
    fn from(s: String) -> Self {
        Value::String(Cow::Owned(s))
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(s: &'a str) -> Self {
        Value::String(Cow::Borrowed(s))
    }
}
