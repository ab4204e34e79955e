use crate::error::ParserError;
use crate::models::*;
use crate::parser::ReadUtils;
use bytes::Bytes;

/// parse RFC9234 OnlyToCustomer attribute.
///
/// RFC: <https://www.rfc-editor.org/rfc/rfc9234.html#name-bgp-only-to-customer-otc-at>
///
/// ```text
/// The OTC Attribute is an optional transitive Path Attribute of the UPDATE message with
/// Attribute Type Code 35 and a length of 4 octets.
/// ```
pub fn parse_only_to_customer(mut input: Bytes) -> Result<AttributeValue, ParserError> {
    let remote_asn = input.read_u32()?;
    Ok(AttributeValue::OnlyToCustomer(Asn::new_32bit(remote_asn)))
}
