mod peer_index_table;
mod rib_afi_entries;
mod rib_generic_entries;

use crate::error::ParserError;
use crate::models::*;
use bytes::Bytes;

pub use peer_index_table::parse_peer_index_table;
pub use rib_afi_entries::{parse_rib_afi_entries, parse_rib_entry};
pub use rib_generic_entries::parse_rib_generic_entries;

/// Parse TABLE_DUMP V2 format MRT message.
///
/// RFC: <https://www.rfc-editor.org/rfc/rfc6396#section-4.3>
///
/// Subtypes include
/// 1. PEER_INDEX_TABLE
/// 2. RIB_IPV4_UNICAST
/// 3. RIB_IPV4_MULTICAST
/// 4. RIB_IPV6_UNICAST
/// 5. RIB_IPV6_MULTICAST
/// 6. RIB_GENERIC
/// 7. GEO_PEER_TABLE (not supported)
/// 8. to 12. the ADD-PATH forms of 2. to 6. ([RFC8050](https://www.rfc-editor.org/rfc/rfc8050))
pub fn parse_table_dump_v2_message(
    sub_type: u16,
    mut input: Bytes,
) -> Result<TableDumpV2Message, ParserError> {
    let unsupported = ParserError::UnsupportedRecord {
        mrt_type: EntryType::TABLE_DUMP_V2.into(),
        subtype: sub_type,
    };
    let v2_type = TableDumpV2Type::try_from(sub_type).map_err(|_| unsupported)?;

    let msg: TableDumpV2Message = match v2_type {
        TableDumpV2Type::PeerIndexTable => {
            TableDumpV2Message::PeerIndexTable(parse_peer_index_table(&mut input)?)
        }
        TableDumpV2Type::RibIpv4Unicast
        | TableDumpV2Type::RibIpv4Multicast
        | TableDumpV2Type::RibIpv6Unicast
        | TableDumpV2Type::RibIpv6Multicast
        | TableDumpV2Type::RibIpv4UnicastAddPath
        | TableDumpV2Type::RibIpv4MulticastAddPath
        | TableDumpV2Type::RibIpv6UnicastAddPath
        | TableDumpV2Type::RibIpv6MulticastAddPath => {
            TableDumpV2Message::RibAfi(parse_rib_afi_entries(&mut input, v2_type)?)
        }
        TableDumpV2Type::RibGeneric | TableDumpV2Type::RibGenericAddPath => {
            TableDumpV2Message::RibGeneric(parse_rib_generic_entries(&mut input, v2_type)?)
        }
        TableDumpV2Type::GeoPeerTable => {
            return Err(ParserError::UnsupportedRecord {
                mrt_type: EntryType::TABLE_DUMP_V2.into(),
                subtype: sub_type,
            })
        }
    };

    Ok(msg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_type() {
        for sub_type in [0, 7, 13, 99] {
            assert!(matches!(
                parse_table_dump_v2_message(sub_type, Bytes::new()),
                Err(ParserError::UnsupportedRecord { mrt_type: 13, subtype }) if subtype == sub_type
            ));
        }
    }

    #[test]
    fn test_dispatch_by_subtype() {
        let peer_index = Bytes::from_static(&[10, 0, 0, 1, 0, 0, 0, 0]);
        let msg = parse_table_dump_v2_message(1, peer_index).unwrap();
        assert_eq!(msg.dump_type(), TableDumpV2Type::PeerIndexTable);

        let rib = Bytes::from_static(&[0, 0, 0, 1, 8, 10, 0, 0]);
        let msg = parse_table_dump_v2_message(10, rib).unwrap();
        assert_eq!(msg.dump_type(), TableDumpV2Type::RibIpv6UnicastAddPath);

        let generic = Bytes::from_static(&[0, 0, 0, 1, 0, 1, 1, 0, 0, 0]);
        let msg = parse_table_dump_v2_message(6, generic).unwrap();
        assert_eq!(msg.dump_type(), TableDumpV2Type::RibGeneric);
    }
}
