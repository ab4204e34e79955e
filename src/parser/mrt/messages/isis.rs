use crate::models::IsisMessage;
use crate::parser::ReadUtils;
use bytes::Bytes;

/// IS-IS records carry the PDU and nothing else
/// (<https://www.rfc-editor.org/rfc/rfc6396#section-4.5>).
pub fn parse_isis(mut input: Bytes) -> IsisMessage {
    IsisMessage {
        pdu: input.read_remaining(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_isis() {
        let msg = parse_isis(Bytes::from_static(&[0x83, 0x1b, 0x01]));
        assert_eq!(msg.pdu, Bytes::from_static(&[0x83, 0x1b, 0x01]));
        assert!(parse_isis(Bytes::new()).pdu.is_empty());
    }
}
