use std::io::{self, Read};

use rowmap::{Row, RowSource};

use crate::config::{ReaderOptions, ReaderSettings};
use crate::error::CsvError;

/// Delimited-text tokenizer: yields one [`Row`] per record of the input.
///
/// The first line is an ordinary row; header handling belongs to the caller.
pub struct CsvRowReader<R> {
    inner: csv::Reader<LeadingSpace<R>>,
    record: csv::StringRecord,
    settings: ReaderSettings,
}

impl<R: Read> CsvRowReader<R> {
    pub fn new(input: R) -> Self {
        let settings = ReaderSettings {
            delimiter: b',',
            comment: None,
            fields_per_record: 0,
            quoting: true,
            trim_leading_space: false,
        };
        Self::with_settings(input, settings)
    }

    pub fn with_options(input: R, options: &ReaderOptions) -> Result<Self, CsvError> {
        Ok(Self::with_settings(input, options.settings()?))
    }

    fn with_settings(input: R, settings: ReaderSettings) -> Self {
        // Zero means "same as the first record", which the csv crate enforces
        // itself when not flexible. A positive count is checked per record below.
        let inner = csv::ReaderBuilder::new()
            .has_headers(false)
            .delimiter(settings.delimiter)
            .comment(settings.comment)
            .quoting(settings.quoting)
            .flexible(settings.fields_per_record != 0)
            .from_reader(LeadingSpace::new(input, &settings));

        Self {
            inner,
            record: csv::StringRecord::new(),
            settings,
        }
    }

    pub fn get_ref(&self) -> &R {
        &self.inner.get_ref().inner
    }

    pub fn into_inner(self) -> R {
        self.inner.into_inner().inner
    }

    /// Next record, `None` at end of input.
    pub fn next_row(&mut self) -> Result<Option<Row>, CsvError> {
        if !self.inner.read_record(&mut self.record)? {
            return Ok(None);
        }

        if let Ok(expected) = usize::try_from(self.settings.fields_per_record) {
            if expected > 0 && self.record.len() != expected {
                return Err(CsvError::FieldCount {
                    line: self.record.position().map_or(0, |p| p.line()),
                    expected,
                    found: self.record.len(),
                });
            }
        }

        let row: Row = self.record.iter().map(str::to_string).collect();

        tracing::trace!(fields = self.record.len(), "csv row read");
        Ok(Some(row))
    }
}

impl<R: Read> RowSource for CsvRowReader<R> {
    fn read_row(&mut self) -> Result<Option<Row>, rowmap::Error> {
        Ok(self.next_row()?)
    }
}

// ═══════════════════════════════════════════════════════════════
//  Leading white space
// ═══════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    /// Before the first byte of a field; `line` when also at the start of a line.
    Start { line: bool },
    Unquoted,
    Quoted,
    /// A quote inside a quoted field: closing, or the first half of `""`.
    QuoteInQuoted,
    Comment,
}

/// Drops spaces and tabs at the start of every field before the tokenizer
/// sees them, so `a, "b,c"` still opens a quoted field. Passthrough when disabled.
struct LeadingSpace<R> {
    inner: R,
    enabled: bool,
    delimiter: u8,
    comment: Option<u8>,
    quoting: bool,
    state: Field,
}

impl<R> LeadingSpace<R> {
    fn new(inner: R, settings: &ReaderSettings) -> Self {
        Self {
            inner,
            enabled: settings.trim_leading_space,
            delimiter: settings.delimiter,
            comment: settings.comment,
            quoting: settings.quoting,
            state: Field::Start { line: true },
        }
    }

    /// Advance over `b`; `false` when the byte is dropped.
    fn keep(&mut self, b: u8) -> bool {
        let line_end = b == b'\n' || b == b'\r';
        let field_end = b == self.delimiter;

        self.state = match self.state {
            Field::Start { .. } if (b == b' ' || b == b'\t') && !field_end => return false,
            Field::Start { line: true } if Some(b) == self.comment => Field::Comment,
            Field::Start { .. } if self.quoting && b == b'"' => Field::Quoted,
            Field::Comment if !line_end => Field::Comment,
            Field::Quoted if b == b'"' => Field::QuoteInQuoted,
            Field::Quoted => Field::Quoted,
            Field::QuoteInQuoted if b == b'"' => Field::Quoted,
            _ if line_end => Field::Start { line: true },
            _ if field_end => Field::Start { line: false },
            _ => Field::Unquoted,
        };
        true
    }
}

impl<R: Read> Read for LeadingSpace<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if !self.enabled {
            return self.inner.read(buf);
        }

        loop {
            let n = self.inner.read(buf)?;
            if n == 0 {
                return Ok(0);
            }

            let mut kept = 0;
            for i in 0..n {
                let b = buf[i];
                if self.keep(b) {
                    buf[kept] = b;
                    kept += 1;
                }
            }
            if kept > 0 {
                return Ok(kept);
            }
        }
    }
}
