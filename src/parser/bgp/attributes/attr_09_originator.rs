use crate::error::ParserError;
use crate::models::*;
use crate::parser::ReadUtils;
use bytes::Bytes;

/// ORIGINATOR_ID is always a 4-byte router identifier
/// (<https://datatracker.ietf.org/doc/html/rfc4456#section-8>).
pub fn parse_originator_id(mut input: Bytes) -> Result<AttributeValue, ParserError> {
    Ok(AttributeValue::OriginatorId(input.read_ipv4_address()?))
}
