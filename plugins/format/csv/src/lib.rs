//! Delimited-text collaborators for `rowmap`.
//!
//! [`CsvRowReader`] tokenizes an [`io::Read`](std::io::Read) into rows and
//! [`CsvRowWriter`] serializes rows into an [`io::Write`](std::io::Write).
//! Both plug into [`rowmap::ClientReader`] / [`rowmap::ClientWriter`]:
//!
//! ```ignore
//! let mut writer = rowmap_csv::writer(file, &WriterOptions::default())?;
//! writer.write_records(&students, true)?;
//! ```

mod config;
mod error;
mod reader;
mod writer;

use std::io::{Read, Write};

use rowmap::{ClientReader, ClientWriter};

pub use config::{ReaderOptions, WriterOptions};
pub use error::CsvError;
pub use reader::CsvRowReader;
pub use writer::CsvRowWriter;

/// Record reader over delimited text.
pub fn reader<R: Read>(input: R, options: &ReaderOptions) -> Result<ClientReader<CsvRowReader<R>>, CsvError> {
    let source = CsvRowReader::with_options(input, options)?;
    tracing::debug!(delimiter = %options.delimiter, "csv reader created");
    Ok(ClientReader::new(source))
}

/// Record writer over delimited text. Every write is flushed.
pub fn writer<W: Write>(output: W, options: &WriterOptions) -> Result<ClientWriter<CsvRowWriter<W>>, CsvError> {
    let sink = CsvRowWriter::with_options(output, options)?;
    tracing::debug!(delimiter = %options.delimiter, crlf = options.use_crlf, "csv writer created");
    Ok(ClientWriter::new(sink))
}
