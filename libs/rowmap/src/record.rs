use std::rc::Rc;
use std::sync::Arc;

use crate::error::MapError;
use crate::schema::RecordSchema;
use crate::value::Value;

/// Read side of a mappable record.
///
/// Usually generated with `#[derive(Record)]`. Implemented for references
/// and smart pointers to records, so a `&R` or `Box<R>` maps like `R`.
pub trait Record {
    fn schema(&self) -> &'static RecordSchema;

    /// Value of the field at `index`, `None` past the last field.
    fn value(&self, index: usize) -> Option<Value<'_>>;
}

/// Write side of a mappable record.
pub trait RecordMut: Record {
    /// Assign the field at `index`. The value is already coerced to the field's kind.
    fn set_value(&mut self, index: usize, value: Value<'_>) -> Result<(), MapError>;
}

/// A concrete record type, needed when decoding allocates fresh records.
pub trait RecordType: RecordMut + Sized {
    fn describe() -> &'static RecordSchema;
}

macro_rules! forward_record {
    ($($ptr:ty),* $(,)?) => {
        $(
            impl<R: Record + ?Sized> Record for $ptr {
                fn schema(&self) -> &'static RecordSchema {
                    (**self).schema()
                }

                fn value(&self, index: usize) -> Option<Value<'_>> {
                    (**self).value(index)
                }
            }
        )*
    };
}

forward_record!(&R, &mut R, Box<R>, Rc<R>, Arc<R>);

impl<R: RecordMut + ?Sized> RecordMut for &mut R {
    fn set_value(&mut self, index: usize, value: Value<'_>) -> Result<(), MapError> {
        (**self).set_value(index, value)
    }
}

impl<R: RecordMut + ?Sized> RecordMut for Box<R> {
    fn set_value(&mut self, index: usize, value: Value<'_>) -> Result<(), MapError> {
        (**self).set_value(index, value)
    }
}

/// `Vec<Box<R>>` targets decode like `Vec<R>`.
impl<R: RecordType> RecordType for Box<R> {
    fn describe() -> &'static RecordSchema {
        R::describe()
    }
}
