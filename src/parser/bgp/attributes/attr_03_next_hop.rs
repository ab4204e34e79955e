use crate::error::ParserError;
use crate::models::*;
use crate::parser::ReadUtils;
use bytes::{Buf, Bytes};

/// NEXT_HOP attribute. Its width comes from the attribute length, never from the
/// enclosing record's address family.
pub fn parse_next_hop(mut input: Bytes) -> Result<AttributeValue, ParserError> {
    let afi = match input.remaining() {
        4 => Afi::Ipv4,
        16 => Afi::Ipv6,
        v => {
            return Err(ParserError::MalformedRecord(format!(
                "invalid next hop length found: {}",
                v
            )));
        }
    };
    Ok(input.read_address(&afi).map(AttributeValue::NextHop)?)
}

/// Next hop of an MP_REACH_NLRI attribute. Its family is implied by its length.
pub fn parse_mp_next_hop(mut input: Bytes) -> Result<Option<NextHopAddress>, ParserError> {
    let output = match input.len() {
        0 => None,
        4 => Some(input.read_ipv4_address().map(NextHopAddress::Ipv4)?),
        16 => Some(input.read_ipv6_address().map(NextHopAddress::Ipv6)?),
        32 => Some(NextHopAddress::Ipv6LinkLocal(
            input.read_ipv6_address()?,
            input.read_ipv6_address()?,
        )),
        v => {
            return Err(ParserError::MalformedRecord(format!(
                "invalid next hop length found: {}",
                v
            )));
        }
    };
    Ok(output)
}
