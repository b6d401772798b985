use serde::Deserialize;

use crate::error::CsvError;

// ═══════════════════════════════════════════════════════════════
//  Reader options
// ═══════════════════════════════════════════════════════════════

/// Options of [`CsvRowReader`](crate::CsvRowReader).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReaderOptions {
    /// Field delimiter (default ",").
    pub delimiter: String,

    /// Lines starting with this character are skipped (default: none).
    pub comment: Option<String>,

    /// Expected fields per record:
    /// `0`: fixed by the first record; `> 0`: exactly this many; `< 0`: any.
    pub fields_per_record: i64,

    /// RFC 4180 double-quote handling (default true).
    pub quoting: bool,

    /// Strip leading white space from every field.
    pub trim_leading_space: bool,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            delimiter: ",".to_string(),
            comment: None,
            fields_per_record: 0,
            quoting: true,
            trim_leading_space: false,
        }
    }
}

impl ReaderOptions {
    /// Parse options from JSON; missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, CsvError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter.to_string();
        self
    }

    pub fn with_comment(mut self, comment: char) -> Self {
        self.comment = Some(comment.to_string());
        self
    }

    pub fn with_fields_per_record(mut self, fields_per_record: i64) -> Self {
        self.fields_per_record = fields_per_record;
        self
    }

    pub fn with_quoting(mut self, quoting: bool) -> Self {
        self.quoting = quoting;
        self
    }

    pub fn with_trim_leading_space(mut self, trim_leading_space: bool) -> Self {
        self.trim_leading_space = trim_leading_space;
        self
    }

    pub(crate) fn settings(&self) -> Result<ReaderSettings, CsvError> {
        let delimiter = parse_delimiter(&self.delimiter)?;
        let comment = self
            .comment
            .as_deref()
            .filter(|c| !c.is_empty())
            .map(|c| parse_special("comment", c))
            .transpose()?;

        if comment == Some(delimiter) {
            return Err(CsvError::config("comment character must differ from the delimiter"));
        }

        Ok(ReaderSettings {
            delimiter,
            comment,
            fields_per_record: self.fields_per_record,
            quoting: self.quoting,
            trim_leading_space: self.trim_leading_space,
        })
    }
}

/// Validated reader options, in the form the tokenizer takes them.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ReaderSettings {
    pub delimiter: u8,
    pub comment: Option<u8>,
    pub fields_per_record: i64,
    pub quoting: bool,
    pub trim_leading_space: bool,
}

// ═══════════════════════════════════════════════════════════════
//  Writer options
// ═══════════════════════════════════════════════════════════════

/// Options of [`CsvRowWriter`](crate::CsvRowWriter).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WriterOptions {
    /// Field delimiter (default ",").
    pub delimiter: String,

    /// Terminate lines with `\r\n` instead of `\n`.
    pub use_crlf: bool,
}

impl Default for WriterOptions {
    fn default() -> Self {
        Self {
            delimiter: ",".to_string(),
            use_crlf: false,
        }
    }
}

impl WriterOptions {
    pub fn from_json(json: &str) -> Result<Self, CsvError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter.to_string();
        self
    }

    pub fn with_crlf(mut self, use_crlf: bool) -> Self {
        self.use_crlf = use_crlf;
        self
    }

    pub(crate) fn settings(&self) -> Result<WriterSettings, CsvError> {
        Ok(WriterSettings {
            delimiter: parse_delimiter(&self.delimiter)?,
            use_crlf: self.use_crlf,
        })
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct WriterSettings {
    pub delimiter: u8,
    pub use_crlf: bool,
}

// ═══════════════════════════════════════════════════════════════
//  Shared config helpers
// ═══════════════════════════════════════════════════════════════

pub(crate) fn parse_delimiter(s: &str) -> Result<u8, CsvError> {
    match s {
        "\\t" | "\t" => Ok(b'\t'),
        s => parse_special("delimiter", s),
    }
}

/// A single ASCII character usable as a delimiter or comment marker.
fn parse_special(what: &str, s: &str) -> Result<u8, CsvError> {
    match s.as_bytes() {
        [b'\r' | b'\n' | b'"'] => Err(CsvError::config(format!("{what} must not be {s:?}"))),
        [b] if b.is_ascii() => Ok(*b),
        _ => Err(CsvError::config(format!(
            "{what} must be a single ASCII character, got {s:?}"
        ))),
    }
}
