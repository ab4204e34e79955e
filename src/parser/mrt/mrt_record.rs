use super::mrt_header::{parse_common_header, COMMON_HEADER_LEN};
use crate::error::{ParserError, ParserErrorWithBytes};
use crate::models::*;
use crate::parser::{
    parse_bgp4mp, parse_isis, parse_ospfv2, parse_ospfv3, parse_table_dump_message,
    parse_table_dump_v2_message, MrtParser,
};
use bytes::Bytes;
use std::io::Read;

/// Upper bound on what is allocated up front for a frame body. Larger bodies grow the buffer as
/// bytes actually arrive, so a bogus length field cannot force a huge allocation.
const MAX_PREALLOCATED_BODY: usize = 1 << 20;

/// Parse a single MRT record from the reader.
///
/// This is the one-shot form of [MrtParser::next_record]. A clean end of input before the first
/// header byte is reported as [ParserError::EofExpected].
pub fn parse_mrt_record(input: &mut impl Read) -> Result<MrtRecord, ParserErrorWithBytes> {
    MrtParser::from_reader(input).next_record()
}

/// Read the fixed 12-byte header prefix.
///
/// Zero bytes available means the stream ended cleanly between frames. Anything between 1 and 11
/// bytes is a cut-off frame.
pub(crate) fn read_raw_header(
    input: &mut impl Read,
) -> Result<[u8; COMMON_HEADER_LEN], ParserError> {
    let mut buffer = Vec::with_capacity(COMMON_HEADER_LEN);
    input
        .by_ref()
        .take(COMMON_HEADER_LEN as u64)
        .read_to_end(&mut buffer)?;
    match <[u8; COMMON_HEADER_LEN]>::try_from(buffer.as_slice()) {
        Ok(raw) => Ok(raw),
        Err(_) if buffer.is_empty() => Err(ParserError::EofExpected),
        Err(_) => Err(ParserError::TruncatedInput {
            needed: COMMON_HEADER_LEN,
            remaining: buffer.len(),
        }),
    }
}

/// Read exactly `length` body bytes and return them together with the header as one frame.
pub(crate) fn read_frame_body(
    input: &mut impl Read,
    raw_header: &[u8; COMMON_HEADER_LEN],
    length: u32,
) -> Result<Bytes, ParserError> {
    let body_len = length as usize;
    let mut frame =
        Vec::with_capacity(COMMON_HEADER_LEN + body_len.min(MAX_PREALLOCATED_BODY));
    frame.extend_from_slice(raw_header);
    let read = input.by_ref().take(length as u64).read_to_end(&mut frame)?;
    if read < body_len {
        return Err(ParserError::TruncatedInput {
            needed: body_len,
            remaining: read,
        });
    }
    Ok(Bytes::from(frame))
}

/// Decode one complete frame, header included.
pub fn parse_mrt_frame(mut frame: Bytes) -> Result<MrtRecord, ParserError> {
    let common_header = parse_common_header(&mut frame)?;
    // whatever follows the header is exactly the message body
    let message = parse_mrt_body(&common_header, frame)?;
    Ok(MrtRecord {
        common_header,
        message,
    })
}

/// Parse MRT message body with given entry type and subtype.
///
/// The entry type and subtype are parsed from the common header. `data` holds the message body
/// only, with the microsecond field of extended-timestamp types already consumed.
pub fn parse_mrt_body(header: &CommonHeader, data: Bytes) -> Result<MrtMessage, ParserError> {
    let entry_subtype = header.entry_subtype;

    let message: MrtMessage = match header.entry_type {
        EntryType::NULL
        | EntryType::START
        | EntryType::DIE
        | EntryType::I_AM_DEAD
        | EntryType::PEER_DOWN
        | EntryType::BGP
        | EntryType::RIP
        | EntryType::IDRP
        | EntryType::RIPNG
        | EntryType::BGP4PLUS
        | EntryType::BGP4PLUS_01 => {
            // deprecated
            return Err(ParserError::UnsupportedRecord {
                mrt_type: header.entry_type.into(),
                subtype: entry_subtype,
            });
        }
        EntryType::OSPFv2 => MrtMessage::Ospfv2(parse_ospfv2(data)?),
        EntryType::TABLE_DUMP => {
            MrtMessage::TableDumpMessage(parse_table_dump_message(entry_subtype, data)?)
        }
        EntryType::TABLE_DUMP_V2 => {
            MrtMessage::TableDumpV2Message(parse_table_dump_v2_message(entry_subtype, data)?)
        }
        EntryType::BGP4MP | EntryType::BGP4MP_ET => {
            MrtMessage::Bgp4Mp(parse_bgp4mp(header.entry_type, entry_subtype, data)?)
        }
        EntryType::ISIS | EntryType::ISIS_ET => MrtMessage::Isis(parse_isis(data)),
        EntryType::OSPFv3 | EntryType::OSPFv3_ET => MrtMessage::Ospfv3(parse_ospfv3(data)?),
    };
    Ok(message)
}
