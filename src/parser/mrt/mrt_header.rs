use crate::error::ParserError;
use crate::models::{CommonHeader, EntryType};
use crate::parser::ReadUtils;
use bytes::{Buf, Bytes};

/// Every MRT frame starts with this many bytes, regardless of type.
pub const COMMON_HEADER_LEN: usize = 12;

/// The fixed 12-byte prefix of a frame, before the type has been interpreted.
///
/// This is just enough to know how many more bytes belong to the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawHeader {
    pub timestamp: u32,
    pub entry_type: u16,
    pub entry_subtype: u16,
    /// On-wire length field: everything after the first 12 bytes of the frame.
    pub length: u32,
}

impl RawHeader {
    pub fn from_bytes(raw: &[u8; COMMON_HEADER_LEN]) -> RawHeader {
        let mut data = &raw[..];
        RawHeader {
            timestamp: data.get_u32(),
            entry_type: data.get_u16(),
            entry_subtype: data.get_u16(),
            length: data.get_u32(),
        }
    }
}

/// MRT common header [RFC6396][header].
///
/// [header]: https://tools.ietf.org/html/rfc6396#section-2
///
/// ```text
///  0                   1                   2                   3
///  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                           Timestamp                           |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |             Type              |            Subtype            |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                             Length                            |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |              (_ET types only) Microsecond Timestamp           |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                      Message... (variable)
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
///
/// `data` is the whole frame. On success the cursor sits at the first message byte. An entry
/// type with no known code is reported as [ParserError::UnsupportedRecord].
pub fn parse_common_header(data: &mut Bytes) -> Result<CommonHeader, ParserError> {
    let timestamp = data.read_u32()?;
    let entry_type_raw = data.read_u16()?;
    let entry_subtype = data.read_u16()?;
    // the length field does not include the 12-byte common header
    let mut length = data.read_u32()?;

    let entry_type =
        EntryType::try_from(entry_type_raw).map_err(|_| ParserError::UnsupportedRecord {
            mrt_type: entry_type_raw,
            subtype: entry_subtype,
        })?;

    let microsecond_timestamp = match entry_type.has_extended_timestamp() {
        true => {
            // the microsecond field is counted inside the on-wire length
            if length < 4 {
                return Err(ParserError::MalformedRecord(format!(
                    "extended timestamp MRT header with length {}",
                    length
                )));
            }
            length -= 4;
            let micros = data.read_u32()?;
            if micros >= 1_000_000 {
                return Err(ParserError::MalformedRecord(format!(
                    "microsecond timestamp out of range: {}",
                    micros
                )));
            }
            Some(micros)
        }
        false => None,
    };

    Ok(CommonHeader {
        timestamp,
        microsecond_timestamp,
        entry_type,
        entry_subtype,
        length,
    })
}
