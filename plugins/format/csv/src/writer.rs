use std::io::Write;

use rowmap::{Row, RowSink};

use crate::config::{WriterOptions, WriterSettings};
use crate::error::CsvError;

/// Delimited-text serializer: one output line per [`Row`], quoting as needed.
///
/// Output is buffered; nothing reaches the underlying writer until [`flush`](Self::flush).
pub struct CsvRowWriter<W: Write> {
    inner: csv::Writer<W>,
}

impl<W: Write> CsvRowWriter<W> {
    pub fn new(output: W) -> Self {
        Self::with_settings(
            output,
            WriterSettings {
                delimiter: b',',
                use_crlf: false,
            },
        )
    }

    pub fn with_options(output: W, options: &WriterOptions) -> Result<Self, CsvError> {
        Ok(Self::with_settings(output, options.settings()?))
    }

    fn with_settings(output: W, settings: WriterSettings) -> Self {
        let terminator = if settings.use_crlf {
            csv::Terminator::CRLF
        } else {
            csv::Terminator::Any(b'\n')
        };

        let inner = csv::WriterBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(settings.delimiter)
            .terminator(terminator)
            .from_writer(output);

        Self { inner }
    }

    pub fn write_row(&mut self, row: &[String]) -> Result<(), CsvError> {
        self.inner.write_record(row)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), CsvError> {
        self.inner.flush()?;
        Ok(())
    }

    pub fn get_ref(&self) -> &W {
        self.inner.get_ref()
    }

    /// Flush and return the underlying writer.
    pub fn into_inner(self) -> Result<W, CsvError> {
        self.inner.into_inner().map_err(|e| CsvError::Io(e.into_error()))
    }
}

impl<W: Write> RowSink for CsvRowWriter<W> {
    fn write_rows(&mut self, rows: &[Row]) -> Result<(), rowmap::Error> {
        for row in rows {
            self.write_row(row)?;
        }
        tracing::trace!(rows = rows.len(), "csv rows written");
        Ok(())
    }

    fn flush(&mut self) -> Result<(), rowmap::Error> {
        Ok(CsvRowWriter::flush(self)?)
    }
}
