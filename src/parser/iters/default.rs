/*!
Default iterator that skips frames it cannot decode.
*/
use crate::error::ParserError;
use crate::models::*;
use crate::parser::{MrtParser, ReaderState};
use log::{error, warn};
use std::io::Read;

pub struct RecordIterator<R> {
    pub parser: MrtParser<R>,
    pub count: u64,
}

impl<R> RecordIterator<R> {
    pub(crate) fn new(parser: MrtParser<R>) -> Self {
        RecordIterator { parser, count: 0 }
    }
}

impl<R: Read> Iterator for RecordIterator<R> {
    type Item = MrtRecord;

    fn next(&mut self) -> Option<MrtRecord> {
        loop {
            return match self.parser.next_record() {
                Ok(v) => {
                    self.count += 1;
                    Some(v)
                }
                Err(e) => match e.error {
                    ParserError::EofExpected => {
                        // normal end of file
                        None
                    }
                    ParserError::IoError(err) => {
                        // when reaching IO error, stop iterating
                        error!("{:?}", err);
                        None
                    }
                    err if self.parser.state() == ReaderState::Done => {
                        // the stream itself was cut short, nothing left to realign on
                        error!("parser error: {}", err);
                        None
                    }
                    err => {
                        if self.parser.options().show_warnings {
                            warn!("parser warn: {}", err);
                        }
                        continue;
                    }
                },
            };
        }
    }
}
