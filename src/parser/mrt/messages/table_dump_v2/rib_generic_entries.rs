//! RIB_GENERIC and RIB_GENERIC_ADDPATH entries.
use crate::models::{RibGenericEntries, TableDumpV2Type};
use crate::parser::mrt::messages::table_dump_v2::parse_rib_entry;
use crate::parser::ReadUtils;
use crate::ParserError;
use bytes::Bytes;

/// Parse a RIB_GENERIC body.
///
/// RFC: <https://www.rfc-editor.org/rfc/rfc6396#section-4.3.3>
///
/// ```text
///  0                   1                   2                   3
///  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                         Sequence Number                       |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |    Address Family Identifier  |Subsequent AFI |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |     Network Layer Reachability Information (variable)         |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |         Entry Count           |  RIB Entries (variable)
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
pub fn parse_rib_generic_entries(
    data: &mut Bytes,
    rib_type: TableDumpV2Type,
) -> Result<RibGenericEntries, ParserError> {
    let add_path = rib_type.is_add_path();

    let sequence_number = data.read_u32()?;
    let afi = data.read_afi()?;
    let safi = data.read_safi()?;
    let nlri = data.read_nlri_prefix(&afi, false)?;

    let entry_count = data.read_u16()?;
    let mut rib_entries = Vec::with_capacity(entry_count as usize);
    for _i in 0..entry_count {
        rib_entries.push(parse_rib_entry(data, add_path, &afi, &safi, nlri)?);
    }

    Ok(RibGenericEntries {
        rib_type,
        sequence_number,
        afi,
        safi,
        nlri,
        rib_entries,
    })
}
