use crate::error::ParserError;
use crate::models::*;
use crate::parser::ReadUtils;
use bytes::Bytes;

/// Parse an OSPFv2 record: remote and local IPv4 address, then the OSPF packet.
///
/// RFC: <https://www.rfc-editor.org/rfc/rfc6396#section-4.1>
pub fn parse_ospfv2(mut input: Bytes) -> Result<Ospfv2Message, ParserError> {
    let remote_addr = input.read_ipv4_address()?;
    let local_addr = input.read_ipv4_address()?;
    Ok(Ospfv2Message {
        remote_addr,
        local_addr,
        payload: input.read_remaining(),
    })
}

/// Parse an OSPFv3 record.
///
/// RFC: <https://www.rfc-editor.org/rfc/rfc6396#section-4.6>
///
/// ```text
///  0                   1                   2                   3
///  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |        Address Family         |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                 Remote IP Address (variable)                  |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                  Local IP Address (variable)                  |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                OSPF Message Contents (variable)
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
pub fn parse_ospfv3(mut input: Bytes) -> Result<Ospfv3Message, ParserError> {
    let afi = input.read_afi()?;
    let remote_addr = input.read_address(&afi)?;
    let local_addr = input.read_address(&afi)?;
    Ok(Ospfv3Message {
        afi,
        remote_addr,
        local_addr,
        payload: input.read_remaining(),
    })
}
