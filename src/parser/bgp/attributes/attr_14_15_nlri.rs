use crate::error::ParserError;
use crate::models::*;
use crate::parser::bgp::attributes::attr_03_next_hop::parse_mp_next_hop;
use crate::parser::{parse_nlri_list, ReadUtils};
use bytes::{Buf, Bytes};

use log::warn;

///
/// <https://datatracker.ietf.org/doc/html/rfc4760#section-3>
/// The attribute is encoded as shown below:
/// +---------------------------------------------------------+
/// | Address Family Identifier (2 octets)                    |
/// +---------------------------------------------------------+
/// | Subsequent Address Family Identifier (1 octet)          |
/// +---------------------------------------------------------+
/// | Length of Next Hop Network Address (1 octet)            |
/// +---------------------------------------------------------+
/// | Network Address of Next Hop (variable)                  |
/// +---------------------------------------------------------+
/// | Reserved (1 octet)                                      |
/// +---------------------------------------------------------+
/// | Network Layer Reachability Information (variable)       |
/// +---------------------------------------------------------+
///
/// Inside TABLE_DUMP_V2 RIB entries the attribute is abbreviated to the next hop length and the
/// next hop ([RFC6396 section 4.3.4](https://datatracker.ietf.org/doc/html/rfc6396#section-4.3.4)).
/// In that case the address family and prefix come from the RIB entry through `afi` and
/// `prefixes`. Some writers still emit the full form there; a leading zero byte (the high byte
/// of an AFI) marks it.
pub fn parse_nlri(
    mut input: Bytes,
    afi: &Option<Afi>,
    safi: &Option<Safi>,
    prefixes: Option<&[NetworkPrefix]>,
    reachable: bool, // whether the NLRI is announcements or withdrawals
    add_path: bool,
) -> Result<AttributeValue, ParserError> {
    let first_byte_zero = match input.first() {
        Some(b) => *b == 0,
        None => {
            return Err(ParserError::MalformedRecord(
                "empty multiprotocol NLRI attribute".to_string(),
            ))
        }
    };

    let abbreviated = match (afi, prefixes) {
        (Some(_), Some(_)) => !first_byte_zero,
        _ => false,
    };

    // read address family
    let (afi, safi) = match (abbreviated, afi) {
        (true, Some(afi)) => (*afi, safi.unwrap_or(Safi::Unicast)),
        _ => (input.read_afi()?, input.read_safi()?),
    };

    let mut next_hop = None;
    if reachable {
        let next_hop_length = input.read_u8()? as usize;
        input.has_n_remaining(next_hop_length)?;
        let next_hop_bytes = input.split_to(next_hop_length);
        next_hop = parse_mp_next_hop(next_hop_bytes)?;
    }

    let prefixes = match (abbreviated, prefixes) {
        (true, Some(pfxs)) => pfxs.to_vec(),
        _ => {
            if reachable {
                // reserved byte for reachable NLRI
                if input.read_u8()? != 0 {
                    warn!("NLRI reserved byte not 0");
                }
            }
            parse_nlri_list(input, add_path, &afi)?
        }
    };

    let nlri = Nlri {
        afi,
        safi,
        next_hop,
        prefixes,
    };
    match reachable {
        true => Ok(AttributeValue::MpReachNlri(nlri)),
        false => Ok(AttributeValue::MpUnreachNlri(nlri)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv6Addr;
    use std::str::FromStr;

    #[test]
    fn test_parsing_mp_reach_full() {
        let mut data = vec![
            0x00, 0x02, // afi
            0x01, // safi
            0x10, // next hop length
        ];
        data.extend(Ipv6Addr::from_str("2001:db8::1").unwrap().octets());
        data.extend([
            0x00, // reserved
            0x20, 0x20, 0x01, 0x0d, 0xb8, // 2001:db8::/32
        ]);
        let res = parse_nlri(Bytes::from(data), &None, &None, None, true, false).unwrap();
        let AttributeValue::MpReachNlri(nlri) = res else {
            panic!("not reachable nlri");
        };
        assert_eq!(nlri.afi, Afi::Ipv6);
        assert_eq!(nlri.safi, Safi::Unicast);
        assert_eq!(
            nlri.next_hop,
            Some(NextHopAddress::Ipv6(Ipv6Addr::from_str("2001:db8::1").unwrap()))
        );
        assert_eq!(
            nlri.prefixes,
            vec![NetworkPrefix::from_str("2001:db8::/32").unwrap()]
        );
    }

    #[test]
    fn test_parsing_mp_unreach_add_path() {
        let data = Bytes::from_static(&[
            0x00, 0x01, // afi
            0x01, // safi
            0x00, 0x00, 0x00, 0x05, // path id
            0x18, 0xc0, 0x00, 0x02, // 192.0.2.0/24
        ]);
        let res = parse_nlri(data, &None, &None, None, false, true).unwrap();
        let AttributeValue::MpUnreachNlri(nlri) = res else {
            panic!("not unreachable nlri");
        };
        assert_eq!(nlri.next_hop, None);
        assert_eq!(nlri.prefixes.len(), 1);
        assert_eq!(nlri.prefixes[0].path_id, Some(5));
        assert_eq!(nlri.prefixes[0].to_string(), "192.0.2.0/24");
    }

    #[test]
    fn test_parsing_mp_reach_abbreviated() {
        let prefix = NetworkPrefix::from_str("2001:db8::/32").unwrap();
        let mut data = vec![0x10];
        data.extend(Ipv6Addr::from_str("fe80::1").unwrap().octets());
        let res = parse_nlri(
            Bytes::from(data),
            &Some(Afi::Ipv6),
            &Some(Safi::Unicast),
            Some(&[prefix]),
            true,
            false,
        )
        .unwrap();
        let AttributeValue::MpReachNlri(nlri) = res else {
            panic!("not reachable nlri");
        };
        assert_eq!(nlri.afi, Afi::Ipv6);
        assert_eq!(nlri.prefixes, vec![prefix]);
        assert_eq!(
            nlri.next_hop.map(|n| n.addr().to_string()),
            Some("fe80::1".to_string())
        );
    }

    #[test]
    fn test_parsing_mp_reach_errors() {
        assert!(matches!(
            parse_nlri(Bytes::new(), &None, &None, None, true, false),
            Err(ParserError::MalformedRecord(_))
        ));
        // next hop longer than the attribute
        let data = Bytes::from_static(&[0x00, 0x01, 0x01, 0x04, 0x0a]);
        assert!(matches!(
            parse_nlri(data, &None, &None, None, true, false),
            Err(ParserError::TruncatedInput { .. })
        ));
    }
}
