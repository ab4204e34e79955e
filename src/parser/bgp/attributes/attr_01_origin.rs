use crate::error::ParserError;
use crate::models::*;
use crate::parser::ReadUtils;
use bytes::{Buf, Bytes};

pub fn parse_origin(mut input: Bytes) -> Result<AttributeValue, ParserError> {
    if input.remaining() != 1 {
        return Err(ParserError::MalformedRecord(format!(
            "ORIGIN attribute of length {}",
            input.remaining()
        )));
    }
    Ok(AttributeValue::Origin(Origin::try_from(input.read_u8()?)?))
}
