/*!
error module defines the error types used in mrt-parser.
*/
use num_enum::{TryFromPrimitive, TryFromPrimitiveError};
use std::fmt::{Display, Formatter};
use std::{error::Error, fmt, io};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParserError {
    /// Fewer bytes are available than a field declares.
    ///
    /// ## Occurs during:
    ///  - Reading any fixed or length-prefixed field of a frame
    ///  - Reading a frame header or body from the input stream when the stream ends mid-frame
    #[error("truncated input: need {needed} bytes, {remaining} remaining")]
    TruncatedInput { needed: usize, remaining: usize },
    /// The (type, subtype) pair in the MRT header has no decoder. The frame body has already been
    /// drained, so the stream stays aligned.
    #[error("unable to parse unsupported MRT type {mrt_type} subtype {subtype}")]
    UnsupportedRecord { mrt_type: u16, subtype: u16 },
    /// A structural violation inside a frame header or body.
    #[error("malformed record: {0}")]
    MalformedRecord(String),
    /// A path attribute whose self-declared length does not fit the remaining bytes.
    #[error("malformed attribute {attr_type}: declared {declared} bytes, {available} available")]
    MalformedAttribute {
        attr_type: u8,
        declared: usize,
        available: usize,
    },
    /// AS numbers are only ever 2 or 4 bytes wide (or absent).
    #[error("invalid AS number width of {0} bytes")]
    InvalidAsnLength(usize),
    /// This error represents a [num_enum::TryFromPrimitiveError] error for any of a number of
    /// different types.
    ///
    /// ## Occurs during:
    ///  - Parsing of an MRT message body
    #[error("unrecognized value {value} for {type_name}")]
    UnrecognizedEnumVariant { type_name: &'static str, value: u64 },
    /// This error represents a [ipnet::PrefixLenError] error. It occurs if an address mask is
    /// larger than the length of the address it is being applied to.
    ///
    /// ## Occurs during:
    ///  - Reading network prefixes (parsing of an MRT message body)
    #[error("invalid network prefix mask")]
    InvalidPrefixLength(#[from] ipnet::PrefixLenError),
    /// A general IO error triggered by the internal reader.
    ///
    /// ## Occurs during:
    ///  - Reading of an MRT record header
    ///  - Buffering of an MRT record body before parsing
    #[error(transparent)]
    IoError(#[from] io::Error),
    /// The input ended cleanly between two frames.
    #[error("end of stream")]
    EofExpected,
}

impl ParserError {
    /// Whether the error ends the whole stream rather than only the current frame.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ParserError::IoError(_) | ParserError::EofExpected)
    }
}

impl<T> From<TryFromPrimitiveError<T>> for ParserError
where
    T: TryFromPrimitive,
    T::Primitive: Into<u64>,
{
    #[inline]
    fn from(value: TryFromPrimitiveError<T>) -> Self {
        ParserError::UnrecognizedEnumVariant {
            type_name: T::NAME,
            value: value.number.into(),
        }
    }
}

/// A [ParserError] together with the raw bytes of the frame that failed, when the frame was
/// read completely.
#[derive(Debug)]
pub struct ParserErrorWithBytes {
    pub error: ParserError,
    pub bytes: Option<Vec<u8>>,
}

impl Display for ParserErrorWithBytes {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl Error for ParserErrorWithBytes {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.error)
    }
}

impl From<ParserError> for ParserErrorWithBytes {
    fn from(error: ParserError) -> Self {
        ParserErrorWithBytes { error, bytes: None }
    }
}
