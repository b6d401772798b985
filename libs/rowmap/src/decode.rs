use crate::coerce;
use crate::error::MapError;
use crate::record::{RecordMut, RecordType};

/// Positional decode: `row[i]` goes to the i-th declared field.
///
/// Columns past the last field are ignored; fields past the end of the row
/// keep their current value. Not transactional: fields before a failing
/// column stay assigned.
pub fn decode_row<R, S>(row: &[S], target: &mut R) -> Result<(), MapError>
where
    R: RecordMut + ?Sized,
    S: AsRef<str>,
{
    let schema = target.schema();
    for (field, text) in schema.fields().iter().zip(row) {
        let value = coerce::parse(text.as_ref(), field, schema)?;
        target.set_value(field.index, value)?;
    }
    Ok(())
}

/// Positional decode of every row into fresh records.
///
/// `target` is replaced only after all rows decoded; on error it is left untouched.
pub fn decode_rows<T, W, S>(rows: &[W], target: &mut Vec<T>) -> Result<(), MapError>
where
    T: RecordType + Default,
    W: AsRef<[S]>,
    S: AsRef<str>,
{
    let decoded = rows
        .iter()
        .map(|row| {
            let mut item = T::default();
            decode_row(row.as_ref(), &mut item)?;
            Ok(item)
        })
        .collect::<Result<Vec<T>, MapError>>()?;

    tracing::debug!(record = T::describe().type_name(), rows = decoded.len(), "decoded rows");
    *target = decoded;
    Ok(())
}

/// Name-based decode: `row[i]` goes to the field declared as `names[i]`.
///
/// `names` and `row` must be non-empty and of equal length, checked before any
/// field is touched. Names without a matching field are skipped.
pub fn decode_row_by_names<N, S, R>(names: &[N], row: &[S], target: &mut R) -> Result<(), MapError>
where
    N: AsRef<str>,
    S: AsRef<str>,
    R: RecordMut + ?Sized,
{
    if names.is_empty() || row.is_empty() || names.len() != row.len() {
        return Err(MapError::Arity {
            names: names.len(),
            columns: row.len(),
        });
    }

    let schema = target.schema();
    for (name, text) in names.iter().zip(row) {
        let Some(field) = schema.field_by_name(name.as_ref()) else {
            tracing::trace!(record = schema.type_name(), name = name.as_ref(), "no such field, skipped");
            continue;
        };
        let value = coerce::parse(text.as_ref(), field, schema)?;
        target.set_value(field.index, value)?;
    }
    Ok(())
}

/// Name-based decode of every row into fresh records. `rows` must not be empty.
pub fn decode_rows_by_names<T, N, W, S>(names: &[N], rows: &[W], target: &mut Vec<T>) -> Result<(), MapError>
where
    T: RecordType + Default,
    N: AsRef<str>,
    W: AsRef<[S]>,
    S: AsRef<str>,
{
    if rows.is_empty() {
        return Err(MapError::EmptyInput { what: "rows" });
    }

    let decoded = rows
        .iter()
        .map(|row| {
            let mut item = T::default();
            decode_row_by_names(names, row.as_ref(), &mut item)?;
            Ok(item)
        })
        .collect::<Result<Vec<T>, MapError>>()?;

    tracing::debug!(record = T::describe().type_name(), rows = decoded.len(), "decoded rows by names");
    *target = decoded;
    Ok(())
}

/// Decoder with the mapping mode fixed up front: positional, or by a name list.
#[derive(Debug, Clone, Default)]
pub struct RecordDecoder {
    names: Option<Vec<String>>,
}

impl RecordDecoder {
    pub fn positional() -> Self {
        Self::default()
    }

    pub fn with_names<I>(names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            names: Some(names.into_iter().map(Into::into).collect()),
        }
    }

    pub fn names(&self) -> Option<&[String]> {
        self.names.as_deref()
    }

    pub fn decode_row<R, S>(&self, row: &[S], target: &mut R) -> Result<(), MapError>
    where
        R: RecordMut + ?Sized,
        S: AsRef<str>,
    {
        match &self.names {
            Some(names) => decode_row_by_names(names.as_slice(), row, target),
            None => decode_row(row, target),
        }
    }

    pub fn decode_rows<T, W, S>(&self, rows: &[W], target: &mut Vec<T>) -> Result<(), MapError>
    where
        T: RecordType + Default,
        W: AsRef<[S]>,
        S: AsRef<str>,
    {
        match &self.names {
            Some(names) => decode_rows_by_names(names.as_slice(), rows, target),
            None => decode_rows(rows, target),
        }
    }
}
