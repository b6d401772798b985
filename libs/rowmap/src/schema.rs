use std::fmt;

use crate::transform::Transform;
use crate::value::Row;

/// Scalar class of a record field, with the declared width where it matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    String,
    Int { bits: u32 },
    UInt { bits: u32 },
    Float { bits: u32 },
    Bool,
    /// Encodable through `Display`, never decodable.
    Unsupported { type_name: &'static str },
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarKind::String => f.write_str("string"),
            ScalarKind::Int { bits } => write!(f, "i{bits}"),
            ScalarKind::UInt { bits } => write!(f, "u{bits}"),
            ScalarKind::Float { bits } => write!(f, "f{bits}"),
            ScalarKind::Bool => f.write_str("bool"),
            ScalarKind::Unsupported { type_name } => f.write_str(type_name),
        }
    }
}

/// One record field as seen by the mapping engine.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    /// Declared field name. Name-based decoding matches against this.
    pub name: &'static str,
    /// Position in declaration order.
    pub index: usize,
    /// Header label: first tag segment, or `name` without a tag.
    pub column: String,
    pub transform: Option<Transform>,
    pub kind: ScalarKind,
}

impl FieldDescriptor {
    /// Build a descriptor from the field's tag `"<column>[,<transform>]"`.
    ///
    /// - No tag (or an empty one): column = `name`, no transform.
    /// - Segment 0 is the column verbatim, even when empty (`",phone_desensitization"`).
    /// - Segment 1 selects a transform; unknown names are ignored.
    pub fn from_tag(name: &'static str, index: usize, tag: Option<&str>, kind: ScalarKind) -> Self {
        let Some(tag) = tag.filter(|t| !t.is_empty()) else {
            return Self {
                name,
                index,
                column: name.to_string(),
                transform: None,
                kind,
            };
        };

        let mut segments = tag.split(',');
        let column = segments.next().unwrap_or_default().to_string();
        let transform = segments.next().and_then(|t| {
            let transform = Transform::from_name(t);
            if transform.is_none() {
                tracing::warn!(field = name, transform = t, "unknown transform in tag, ignored");
            }
            transform
        });

        Self {
            name,
            index,
            column,
            transform,
            kind,
        }
    }
}

/// Ordered field descriptors of one record type.
///
/// One instance per type, held in a `'static` cell. The address of that
/// instance is the type identity used for homogeneity checks.
#[derive(Debug)]
pub struct RecordSchema {
    type_name: &'static str,
    fields: Vec<FieldDescriptor>,
}

impl RecordSchema {
    pub fn new(type_name: &'static str, fields: Vec<FieldDescriptor>) -> Self {
        Self { type_name, fields }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn field(&self, index: usize) -> Option<&FieldDescriptor> {
        self.fields.get(index)
    }

    /// Exact, case-sensitive match on the declared name (not the column).
    pub fn field_by_name(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Header row.
    pub fn columns(&self) -> Row {
        self.fields.iter().map(|f| f.column.clone()).collect()
    }

    /// Same record type: same schema instance.
    pub fn same_type(&self, other: &RecordSchema) -> bool {
        std::ptr::eq(self, other)
    }
}
