/*!
parser module contains the MRT stream reader and the decoders for every record type it
dispatches to.
*/
use std::io::Read;

pub mod bgp;
pub mod iters;
pub mod mrt;
pub mod utils;

pub use self::utils::*;
pub use bgp::{parse_attributes, parse_bgp_message, AttributeIter};
pub use mrt::*;

pub use crate::error::{ParserError, ParserErrorWithBytes};
pub use iters::{FallibleRecordIterator, RecordIterator};
use crate::models::MrtRecord;
use mrt::{read_frame_body, read_raw_header};

/// Where a [MrtParser] is in reading the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReaderState {
    /// Between frames, ready to read the next header.
    AwaitingHeader,
    /// The fixed 12-byte header prefix has been read.
    HaveHeader,
    /// Reading the frame body the header declared.
    AwaitingBody,
    /// The whole frame is buffered and being decoded.
    Dispatching,
    /// The stream ended or failed. Every further read reports end of stream.
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// Log frames skipped by [RecordIterator].
    pub show_warnings: bool,
}

impl Default for ParserOptions {
    fn default() -> Self {
        ParserOptions {
            show_warnings: true,
        }
    }
}

/// Reads MRT records one frame at a time from any [Read] source.
///
/// ```no_run
/// use mrt_parser::MrtParser;
///
/// let file = std::fs::File::open("updates.mrt").unwrap();
/// for record in MrtParser::from_reader(std::io::BufReader::new(file)) {
///     println!("{:?}", record.common_header.datetime());
/// }
/// ```
pub struct MrtParser<R> {
    reader: R,
    state: ReaderState,
    options: ParserOptions,
}

impl<R: Read> MrtParser<R> {
    /// Creating a new parser from a object that implements [Read] trait.
    pub fn from_reader(reader: R) -> MrtParser<R> {
        MrtParser {
            reader,
            state: ReaderState::AwaitingHeader,
            options: ParserOptions::default(),
        }
    }

    /// Decode the next frame.
    ///
    /// Returns [ParserError::EofExpected] once the input is exhausted between frames, and on
    /// every call after the stream ended or failed. A per-frame error leaves the reader on the
    /// start of the next frame and carries the raw frame bytes.
    pub fn next_record(&mut self) -> Result<MrtRecord, ParserErrorWithBytes> {
        if self.state == ReaderState::Done {
            return Err(ParserError::EofExpected.into());
        }

        self.state = ReaderState::AwaitingHeader;
        let raw_header = match read_raw_header(&mut self.reader) {
            Ok(raw) => raw,
            Err(e) => {
                self.state = ReaderState::Done;
                return Err(e.into());
            }
        };
        self.state = ReaderState::HaveHeader;
        let header = RawHeader::from_bytes(&raw_header);

        self.state = ReaderState::AwaitingBody;
        let frame = match read_frame_body(&mut self.reader, &raw_header, header.length) {
            Ok(frame) => frame,
            Err(e) => {
                self.state = ReaderState::Done;
                return Err(e.into());
            }
        };

        self.state = ReaderState::Dispatching;
        let result = parse_mrt_frame(frame.clone()).map_err(|error| ParserErrorWithBytes {
            error,
            bytes: Some(frame.to_vec()),
        });
        self.state = ReaderState::AwaitingHeader;
        result
    }
}

impl<R> MrtParser<R> {
    pub fn with_options(self, options: ParserOptions) -> MrtParser<R> {
        MrtParser { options, ..self }
    }

    pub fn disable_warnings(self) -> MrtParser<R> {
        let mut options = self.options;
        options.show_warnings = false;
        self.with_options(options)
    }

    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    pub fn state(&self) -> ReaderState {
        self.state
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}
