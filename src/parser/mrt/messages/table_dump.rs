use crate::error::*;
use crate::models::*;
use crate::parser::bgp::attributes::parse_attributes;
use crate::parser::ReadUtils;
use bytes::Bytes;
use ipnet::IpNet;
use std::net::IpAddr;

/// Parse MRT TABLE_DUMP type message.
///
/// <https://www.rfc-editor.org/rfc/rfc6396#section-4.2>
///
/// ```text
/// The TABLE_DUMP Type does not permit 4-byte Peer AS numbers, nor does
/// it allow the AFI of the peer IP to differ from the AFI of the Prefix
/// field.  The TABLE_DUMP_V2 Type MUST be used in these situations.
/// ```
///
/// ```text
///  0                   1                   2                   3
///  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |         View Number           |       Sequence Number         |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                        Prefix (variable)                      |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// | Prefix Length |    Status     |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                         Originated Time                       |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                    Peer IP Address (variable)                 |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |           Peer AS             |       Attribute Length        |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                   BGP Attribute... (variable)
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
pub fn parse_table_dump_message(
    sub_type: u16,
    mut data: Bytes,
) -> Result<TableDumpMessage, ParserError> {
    // determine address family based on the sub_type value defined in the MRT [CommonHeader].
    let afi = match sub_type {
        1 => Afi::Ipv4,
        2 => Afi::Ipv6,
        _ => {
            return Err(ParserError::UnsupportedRecord {
                mrt_type: EntryType::TABLE_DUMP.into(),
                subtype: sub_type,
            })
        }
    };

    let view_number = data.read_u16()?;
    let sequence_number = data.read_u16()?;
    let prefix = match &afi {
        Afi::Ipv4 => data.read_ipv4_prefix().map(IpNet::V4),
        Afi::Ipv6 => data.read_ipv6_prefix().map(IpNet::V6),
    }?;

    let status = data.read_u8()?;
    let originated_time = data.read_u32()?;

    let peer_address: IpAddr = data.read_address(&afi)?;
    let peer_asn = data.read_asn(AsnLength::Bits16)?;

    let attribute_length = data.read_u16()? as usize;
    let attr_data_slice = data.read_n_bytes(attribute_length)?;

    // for TABLE_DUMP type, the AS number length is always 2-byte.
    let attributes =
        parse_attributes(attr_data_slice, &AsnLength::Bits16, false, None, None, None)?;

    Ok(TableDumpMessage {
        view_number,
        sequence_number,
        prefix: NetworkPrefix::new(prefix, None),
        status,
        originated_time,
        peer_address,
        peer_asn,
        attributes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::{BufMut, BytesMut};
    use std::str::FromStr;

    #[test]
    fn test_parse_table_dump_ipv4() {
        let mut data = BytesMut::new();
        data.put_u16(0); // view
        data.put_u16(42); // sequence
        data.put_slice(&[192, 0, 2, 0, 24]); // 192.0.2.0/24
        data.put_u8(1); // status
        data.put_u32(1_000_000); // originated
        data.put_slice(&[10, 0, 0, 1]); // peer
        data.put_u16(65000);
        data.put_u16(4);
        data.put_slice(&[0x40, 1, 1, 0]);

        let msg = parse_table_dump_message(1, data.freeze()).unwrap();
        assert_eq!(msg.sequence_number, 42);
        assert_eq!(msg.prefix, NetworkPrefix::from_str("192.0.2.0/24").unwrap());
        assert_eq!(msg.status, 1);
        assert_eq!(msg.originated_time, 1_000_000);
        assert_eq!(msg.peer_address, IpAddr::from_str("10.0.0.1").unwrap());
        assert_eq!(msg.peer_asn, Asn::new_16bit(65000));
        assert_eq!(msg.attributes.origin(), Some(Origin::IGP));
    }

    #[test]
    fn test_parse_table_dump_ipv6() {
        let addr = std::net::Ipv6Addr::from_str("2001:db8::").unwrap();
        let mut data = BytesMut::new();
        data.put_u16(0);
        data.put_u16(1);
        data.put_u128(addr.into());
        data.put_u8(32);
        data.put_u8(1);
        data.put_u32(0);
        data.put_u128(std::net::Ipv6Addr::from_str("2001:db8::1").unwrap().into());
        data.put_u16(65001);
        data.put_u16(0);

        let msg = parse_table_dump_message(2, data.freeze()).unwrap();
        assert_eq!(msg.prefix.to_string(), "2001:db8::/32");
        assert!(msg.attributes.is_empty());
    }

    #[test]
    fn test_parse_table_dump_errors() {
        assert!(matches!(
            parse_table_dump_message(3, Bytes::new()),
            Err(ParserError::UnsupportedRecord {
                mrt_type: 12,
                subtype: 3
            })
        ));

        // attribute length runs past the body
        let mut data = BytesMut::new();
        data.put_u16(0);
        data.put_u16(0);
        data.put_slice(&[10, 0, 0, 0, 8]);
        data.put_u8(1);
        data.put_u32(0);
        data.put_slice(&[10, 0, 0, 1]);
        data.put_u16(1);
        data.put_u16(10);
        data.put_slice(&[0x40, 1, 1, 0]);
        assert!(matches!(
            parse_table_dump_message(1, data.freeze()),
            Err(ParserError::TruncatedInput {
                needed: 10,
                remaining: 4
            })
        ));

        // mask longer than the address
        let data = Bytes::from_static(&[0, 0, 0, 0, 10, 0, 0, 0, 33]);
        assert!(matches!(
            parse_table_dump_message(1, data),
            Err(ParserError::InvalidPrefixLength(_))
        ));
    }
}
