use crate::error::MapError;
use crate::record::Record;
use crate::schema::RecordSchema;
use crate::value::Row;

/// Encode one record: `[data]`, or `[header, data]` when `include_header` is set.
pub fn encode_one<R: Record + ?Sized>(record: &R, include_header: bool) -> Result<Vec<Row>, MapError> {
    let schema = record.schema();
    let data = encode_row(record, schema)?;

    tracing::debug!(record = schema.type_name(), header = include_header, "encoded record");

    Ok(if include_header {
        vec![schema.columns(), data]
    } else {
        vec![data]
    })
}

/// Encode a homogeneous sequence of records, one row each.
///
/// The header, if requested, comes from the first record. Every record must
/// share the first record's type, otherwise `TypeMismatch`. An empty sequence
/// (or `None`) yields no rows.
pub fn encode_many<I>(records: I, include_header: bool) -> Result<Vec<Row>, MapError>
where
    I: IntoIterator,
    I::Item: Record,
{
    let mut rows = Vec::new();
    let mut first: Option<&'static RecordSchema> = None;

    for record in records {
        let schema = record.schema();
        match first {
            None => {
                if include_header {
                    rows.push(schema.columns());
                }
                first = Some(schema);
            }
            Some(expected) if !expected.same_type(schema) => {
                return Err(MapError::TypeMismatch {
                    expected: expected.type_name(),
                    found: schema.type_name(),
                });
            }
            Some(_) => {}
        }
        rows.push(encode_row(&record, schema)?);
    }

    if let Some(schema) = first {
        tracing::debug!(record = schema.type_name(), rows = rows.len(), "encoded records");
    }
    Ok(rows)
}

/// Stringify every field in declaration order, then apply its transform.
fn encode_row<R: Record + ?Sized>(record: &R, schema: &RecordSchema) -> Result<Row, MapError> {
    schema
        .fields()
        .iter()
        .map(|field| {
            let text = record
                .value(field.index)
                .ok_or_else(|| MapError::unreadable(schema, field.index))?
                .to_string();

            Ok(match field.transform {
                Some(transform) => {
                    tracing::trace!(field = field.name, transform = transform.name(), "masking");
                    transform.apply(text)
                }
                None => text,
            })
        })
        .collect()
}

/// Encoder with the header choice fixed up front.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordEncoder {
    include_header: bool,
}

impl RecordEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_header(mut self, include_header: bool) -> Self {
        self.include_header = include_header;
        self
    }

    pub fn include_header(&self) -> bool {
        self.include_header
    }

    pub fn encode_one<R: Record + ?Sized>(&self, record: &R) -> Result<Vec<Row>, MapError> {
        encode_one(record, self.include_header)
    }

    pub fn encode_many<I>(&self, records: I) -> Result<Vec<Row>, MapError>
    where
        I: IntoIterator,
        I::Item: Record,
    {
        encode_many(records, self.include_header)
    }
}
