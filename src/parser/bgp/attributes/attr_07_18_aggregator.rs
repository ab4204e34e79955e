use crate::error::ParserError;
use crate::models::*;
use crate::parser::ReadUtils;
use bytes::{Buf, Bytes};

/// Parse AGGREGATOR or AS4_AGGREGATOR.
///
/// The AS number is 2 or 4 bytes wide depending on the attribute length (6 or 8), followed by
/// the 4-byte BGP identifier of the aggregating router.
pub fn parse_aggregator(mut input: Bytes) -> Result<(Asn, BgpIdentifier), ParserError> {
    let asn_width = input.remaining().saturating_sub(4);
    let asn_bytes = input.read_n_bytes(asn_width)?;
    let asn = Asn::from_be_slice(&asn_bytes)?.ok_or_else(|| {
        ParserError::MalformedRecord("aggregator attribute without AS number".to_string())
    })?;
    let identifier = input.read_ipv4_address()?;
    Ok((asn, identifier))
}
