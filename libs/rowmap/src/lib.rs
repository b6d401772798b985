//! Mapping between typed records and rows of text fields.
//!
//! A record is any struct implementing [`Record`] (read side) and
//! [`RecordMut`] (write side), normally generated with `#[derive(Record)]`.
//! Field metadata comes from the `#[csv("<column>[,<transform>]")]` attribute.
//!
//! - [`encode`] turns records into rows, optionally with a header row.
//! - [`decode`] fills records from rows, by field order or by a name list.
//! - [`client`] couples both to a [`RowSource`] / [`RowSink`] collaborator.

extern crate self as rowmap;

pub mod client;
pub mod coerce;
pub mod decode;
pub mod encode;
pub mod error;
pub mod record;
pub mod schema;
pub mod transform;
pub mod value;

pub use rowmap_derive::Record;

pub use client::{ClientReader, ClientWriter, MemorySource, RowSink, RowSource};
pub use coerce::FieldValue;
pub use decode::{RecordDecoder, decode_row, decode_row_by_names, decode_rows, decode_rows_by_names};
pub use encode::{RecordEncoder, encode_many, encode_one};
pub use error::{Error, ErrorKind, MapError};
pub use record::{Record, RecordMut, RecordType};
pub use schema::{FieldDescriptor, RecordSchema, ScalarKind};
pub use transform::Transform;
pub use value::{Row, Value};
