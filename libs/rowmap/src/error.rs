use crate::schema::RecordSchema;

/// Error kind for mapping errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Record type does not have the shape its schema declares.
    Type,
    /// Target record rejected a field assignment.
    Target,
    /// Records of different types in one batch.
    TypeMismatch,
    /// Name list and row length disagree.
    Arity,
    /// A required collection is empty.
    EmptyInput,
    /// Text cannot be coerced to the field type.
    Conversion,
    /// Field type has no coercion rule.
    UnsupportedType,
}

/// Mapping error, returned by every encode / decode operation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MapError {
    #[error("{record}: field #{index} is declared but not readable")]
    Type { record: &'static str, index: usize },

    #[error("{record}: field #{index} cannot be assigned")]
    Target { record: &'static str, index: usize },

    #[error("all records must be of type {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("names and row must be non-empty and of equal length ({names} names, {columns} columns)")]
    Arity { names: usize, columns: usize },

    #[error("{what} must not be empty")]
    EmptyInput { what: &'static str },

    #[error("{record}.{field}: cannot convert {text:?}: {reason}")]
    Conversion {
        record: &'static str,
        field: &'static str,
        text: String,
        reason: String,
    },

    #[error("{record}.{field}: unsupported type {type_name}")]
    UnsupportedType {
        record: &'static str,
        field: &'static str,
        type_name: &'static str,
    },
}

impl MapError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            MapError::Type { .. } => ErrorKind::Type,
            MapError::Target { .. } => ErrorKind::Target,
            MapError::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            MapError::Arity { .. } => ErrorKind::Arity,
            MapError::EmptyInput { .. } => ErrorKind::EmptyInput,
            MapError::Conversion { .. } => ErrorKind::Conversion,
            MapError::UnsupportedType { .. } => ErrorKind::UnsupportedType,
        }
    }

    pub fn unreadable(schema: &RecordSchema, index: usize) -> Self {
        Self::Type { record: schema.type_name(), index }
    }

    pub fn target(schema: &RecordSchema, index: usize) -> Self {
        Self::Target { record: schema.type_name(), index }
    }

    /// Conversion failure for field `index` of `schema`.
    pub fn conversion(
        schema: &RecordSchema,
        index: usize,
        text: impl Into<String>,
        reason: impl ToString,
    ) -> Self {
        Self::Conversion {
            record: schema.type_name(),
            field: field_name(schema, index),
            text: text.into(),
            reason: reason.to_string(),
        }
    }

    pub fn unsupported(schema: &RecordSchema, index: usize, type_name: &'static str) -> Self {
        Self::UnsupportedType {
            record: schema.type_name(),
            field: field_name(schema, index),
            type_name,
        }
    }
}

fn field_name(schema: &RecordSchema, index: usize) -> &'static str {
    schema.field(index).map_or("?", |f| f.name)
}

/// Client-level error: mapping failures plus the row collaborator's own failures.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Map(#[from] MapError),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("row source/sink: {0}")]
    Source(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("end of input")]
    EndOfInput,
}

impl Error {
    /// Wrap a collaborator error.
    pub fn collaborator(e: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Source(Box::new(e))
    }

    pub fn is_end_of_input(&self) -> bool {
        matches!(self, Error::EndOfInput)
    }
}
