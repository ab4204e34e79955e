/*!
Fallible iterator implementations that return Results, exposing parsing errors to users.
*/
use crate::error::{ParserError, ParserErrorWithBytes};
use crate::models::*;
use crate::parser::MrtParser;
use std::io::Read;

/// Fallible iterator over MRT records that returns parsing errors.
///
/// Unlike the default `RecordIterator`, this iterator returns `Result<MrtRecord, ParserErrorWithBytes>`
/// allowing users to handle parsing errors explicitly instead of having them logged and skipped.
/// It ends at the end of the stream, and right after a stream-fatal error has been returned.
pub struct FallibleRecordIterator<R> {
    parser: MrtParser<R>,
}

impl<R> FallibleRecordIterator<R> {
    pub(crate) fn new(parser: MrtParser<R>) -> Self {
        FallibleRecordIterator { parser }
    }
}

impl<R: Read> Iterator for FallibleRecordIterator<R> {
    type Item = Result<MrtRecord, ParserErrorWithBytes>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.parser.next_record() {
            Ok(record) => Some(Ok(record)),
            Err(e) if matches!(e.error, ParserError::EofExpected) => {
                // Normal end of file
                None
            }
            Err(e) => Some(Err(e)),
        }
    }
}
