use std::collections::VecDeque;

use crate::decode;
use crate::encode;
use crate::error::Error;
use crate::record::{Record, RecordMut, RecordType};
use crate::value::Row;

/// Row collaborator on the read side (a delimited-text tokenizer, an in-memory buffer, ...).
pub trait RowSource {
    /// Next row, `None` at end of input.
    fn read_row(&mut self) -> Result<Option<Row>, Error>;

    /// All remaining rows.
    fn read_all(&mut self) -> Result<Vec<Row>, Error> {
        let mut rows = Vec::new();
        while let Some(row) = self.read_row()? {
            rows.push(row);
        }
        Ok(rows)
    }
}

/// Row collaborator on the write side. Buffering policy belongs to the sink;
/// callers flush explicitly.
pub trait RowSink {
    fn write_rows(&mut self, rows: &[Row]) -> Result<(), Error>;
    fn flush(&mut self) -> Result<(), Error>;
}

impl<S: RowSource + ?Sized> RowSource for &mut S {
    fn read_row(&mut self) -> Result<Option<Row>, Error> {
        (**self).read_row()
    }

    fn read_all(&mut self) -> Result<Vec<Row>, Error> {
        (**self).read_all()
    }
}

impl<W: RowSink + ?Sized> RowSink for &mut W {
    fn write_rows(&mut self, rows: &[Row]) -> Result<(), Error> {
        (**self).write_rows(rows)
    }

    fn flush(&mut self) -> Result<(), Error> {
        (**self).flush()
    }
}

/// In-memory sink: rows are appended, flush is a no-op.
impl RowSink for Vec<Row> {
    fn write_rows(&mut self, rows: &[Row]) -> Result<(), Error> {
        self.extend_from_slice(rows);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Error> {
        Ok(())
    }
}

/// In-memory source over pre-split rows.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    rows: VecDeque<Row>,
}

impl MemorySource {
    pub fn new(rows: impl IntoIterator<Item = Row>) -> Self {
        Self {
            rows: rows.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.rows.len()
    }
}

impl RowSource for MemorySource {
    fn read_row(&mut self) -> Result<Option<Row>, Error> {
        Ok(self.rows.pop_front())
    }

    fn read_all(&mut self) -> Result<Vec<Row>, Error> {
        Ok(self.rows.drain(..).collect())
    }
}

// ═══════════════════════════════════════════════════════════════
//  ClientReader
// ═══════════════════════════════════════════════════════════════

/// Reads rows from a [`RowSource`] and decodes them into records.
pub struct ClientReader<S> {
    source: S,
}

impl<S: RowSource> ClientReader<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn get_ref(&self) -> &S {
        &self.source
    }

    pub fn get_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn into_inner(self) -> S {
        self.source
    }

    /// Read one raw row. `Error::EndOfInput` at end of input.
    pub fn read(&mut self) -> Result<Row, Error> {
        self.source.read_row()?.ok_or(Error::EndOfInput)
    }

    /// Read all remaining raw rows.
    pub fn read_all(&mut self) -> Result<Vec<Row>, Error> {
        self.source.read_all()
    }

    /// Read one row into `target`, by field order.
    pub fn read_record<R: RecordMut + ?Sized>(&mut self, target: &mut R) -> Result<(), Error> {
        let row = self.read()?;
        decode::decode_row(&row, target)?;
        Ok(())
    }

    /// Read one row into `target`, column `i` going to the field named `names[i]`.
    pub fn read_record_with_names<N, R>(&mut self, names: &[N], target: &mut R) -> Result<(), Error>
    where
        N: AsRef<str>,
        R: RecordMut + ?Sized,
    {
        let row = self.read()?;
        decode::decode_row_by_names(names, &row, target)?;
        Ok(())
    }

    /// Read all remaining rows into `target`, by field order.
    pub fn read_records<T: RecordType + Default>(&mut self, target: &mut Vec<T>) -> Result<(), Error> {
        let rows = self.read_all()?;
        decode::decode_rows(&rows, target)?;
        Ok(())
    }

    /// Read all remaining rows into `target` by names. Fails when no rows remain.
    pub fn read_records_with_names<N, T>(&mut self, names: &[N], target: &mut Vec<T>) -> Result<(), Error>
    where
        N: AsRef<str>,
        T: RecordType + Default,
    {
        let rows = self.read_all()?;
        decode::decode_rows_by_names(names, &rows, target)?;
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════
//  ClientWriter
// ═══════════════════════════════════════════════════════════════

/// Encodes records and writes them to a [`RowSink`], flushing after every write.
pub struct ClientWriter<W> {
    sink: W,
}

impl<W: RowSink> ClientWriter<W> {
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    pub fn get_ref(&self) -> &W {
        &self.sink
    }

    pub fn into_inner(self) -> W {
        self.sink
    }

    /// Write one record, preceded by a header row when `header` is set.
    pub fn write_record<R: Record + ?Sized>(&mut self, record: &R, header: bool) -> Result<(), Error> {
        let rows = encode::encode_one(record, header)?;
        self.write_rows(&rows)
    }

    /// Write a homogeneous sequence of records, with at most one header row.
    pub fn write_records<I>(&mut self, records: I, header: bool) -> Result<(), Error>
    where
        I: IntoIterator,
        I::Item: Record,
    {
        let rows = encode::encode_many(records, header)?;
        self.write_rows(&rows)
    }

    /// Write raw rows and flush.
    pub fn write_rows(&mut self, rows: &[Row]) -> Result<(), Error> {
        self.sink.write_rows(rows)?;
        self.sink.flush()?;
        tracing::trace!(rows = rows.len(), "rows written");
        Ok(())
    }
}
