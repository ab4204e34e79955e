/*!
Iterator implementations for [MrtParser].

- `default`: [RecordIterator], which logs and skips frames that fail to decode
- `fallible`: [FallibleRecordIterator], which hands every error to the caller
*/
pub mod default;
pub mod fallible;

pub use default::RecordIterator;
pub use fallible::FallibleRecordIterator;

use crate::models::MrtRecord;
use crate::parser::MrtParser;
use std::io::Read;

/// Use [RecordIterator] as the default iterator.
impl<R: Read> IntoIterator for MrtParser<R> {
    type Item = MrtRecord;
    type IntoIter = RecordIterator<R>;

    fn into_iter(self) -> Self::IntoIter {
        RecordIterator::new(self)
    }
}

impl<R> MrtParser<R> {
    pub fn into_record_iter(self) -> RecordIterator<R> {
        RecordIterator::new(self)
    }

    /// Creates a fallible iterator over MRT records that returns parsing errors.
    ///
    /// # Example
    /// ```no_run
    /// use mrt_parser::MrtParser;
    ///
    /// let file = std::fs::File::open("rib.mrt").unwrap();
    /// for result in MrtParser::from_reader(file).into_fallible_record_iter() {
    ///     match result {
    ///         Ok(record) => {
    ///             // Process the record
    ///         }
    ///         Err(e) => {
    ///             // Handle the error
    ///             eprintln!("Error parsing record: {}", e);
    ///         }
    ///     }
    /// }
    /// ```
    pub fn into_fallible_record_iter(self) -> FallibleRecordIterator<R> {
        FallibleRecordIterator::new(self)
    }
}
