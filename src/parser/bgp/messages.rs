use crate::models::*;
use bytes::{Buf, Bytes};

use crate::error::ParserError;
use crate::parser::{parse_attributes, parse_nlri_list, ReadUtils};
use log::warn;

/// Size of the marker, length and type fields that start every BGP message.
const BGP_HEADER_LEN: usize = 19;
const BGP_MAX_MESSAGE_LEN: usize = 4096;

/// BGP message
///
/// Format:
/// ```text
/// 0                   1                   2                   3
/// 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                                                               |
/// +                                                               +
/// |                                                               |
/// +                                                               +
/// |                           Marker                              |
/// +                                                               +
/// |                                                               |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |          Length               |      Type     |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
pub fn parse_bgp_message(
    data: &mut Bytes,
    add_path: bool,
    asn_len: &AsnLength,
) -> Result<BgpMessage, ParserError> {
    let total_size = data.remaining();
    data.has_n_remaining(BGP_HEADER_LEN)?;
    data.advance(16);
    /*
    This 2-octet unsigned integer indicates the total length of the
    message, including the header in octets.  Thus, it allows one
    to locate the (Marker field of the) next message in the TCP
    stream.  The value of the Length field MUST always be at least
    19 and no greater than 4096, and MAY be further constrained,
    depending on the message type.
    */
    let length = data.get_u16() as usize;
    if !(BGP_HEADER_LEN..=BGP_MAX_MESSAGE_LEN).contains(&length) {
        return Err(ParserError::MalformedRecord(format!(
            "invalid BGP message length {}",
            length
        )));
    }
    if length > total_size {
        return Err(ParserError::TruncatedInput {
            needed: length,
            remaining: total_size,
        });
    }

    let msg_type = BgpMessageType::try_from(data.get_u8())?;

    let bgp_msg_length = length - BGP_HEADER_LEN;
    if data.remaining() != bgp_msg_length {
        warn!(
            "BGP message length {} does not match the actual length {}",
            bgp_msg_length,
            data.remaining()
        );
    }
    let mut msg_data = data.split_to(bgp_msg_length);

    Ok(match msg_type {
        BgpMessageType::OPEN => BgpMessage::Open(parse_bgp_open_message(&mut msg_data)?),
        BgpMessageType::UPDATE => {
            BgpMessage::Update(parse_bgp_update_message(msg_data, add_path, asn_len)?)
        }
        BgpMessageType::NOTIFICATION => {
            BgpMessage::Notification(parse_bgp_notification_message(msg_data)?)
        }
        BgpMessageType::KEEPALIVE => BgpMessage::KeepAlive,
    })
}

/// Parse BGP NOTIFICATION message. The error code and subcode are kept as numbers.
pub fn parse_bgp_notification_message(
    mut input: Bytes,
) -> Result<BgpNotificationMessage, ParserError> {
    let error_code = input.read_u8()?;
    let error_subcode = input.read_u8()?;
    let data = input.read_remaining();
    Ok(BgpNotificationMessage {
        error_code,
        error_subcode,
        data,
    })
}

/// Parse BGP OPEN message.
///
/// Capabilities (parameter type 2) are split into code and value but not decoded further.
pub fn parse_bgp_open_message(input: &mut Bytes) -> Result<BgpOpenMessage, ParserError> {
    input.has_n_remaining(10)?;
    let version = input.get_u8();
    let asn = Asn::new_16bit(input.get_u16());
    let hold_time = input.get_u16();

    let bgp_identifier = input.read_ipv4_address()?;
    let opt_params_len = input.read_u8()? as usize;

    let mut params_data = input.read_n_bytes(opt_params_len)?;
    let mut params: Vec<OptParam> = vec![];
    while params_data.remaining() > 0 {
        let param_type = params_data.read_u8()?;
        let param_length = params_data.read_u8()? as usize;
        let mut param_data = params_data.read_n_bytes(param_length)?;
        // https://tools.ietf.org/html/rfc5492#section-4
        let param_value = match param_type {
            2 => {
                let mut capabilities = vec![];
                while param_data.remaining() > 0 {
                    let code = param_data.read_u8()?;
                    let len = param_data.read_u8()? as usize;
                    let value = param_data.read_n_bytes(len)?;
                    capabilities.push(Capability { code, value });
                }
                ParamValue::Capabilities(capabilities)
            }
            _ => ParamValue::Raw(param_data),
        };
        params.push(OptParam {
            param_type,
            param_value,
        });
    }

    Ok(BgpOpenMessage {
        version,
        asn,
        hold_time,
        bgp_identifier,
        opt_params: params,
    })
}

/// read bgp update message.
///
/// RFC: <https://tools.ietf.org/html/rfc4271#section-4.3>
pub fn parse_bgp_update_message(
    mut input: Bytes,
    add_path: bool,
    asn_len: &AsnLength,
) -> Result<BgpUpdateMessage, ParserError> {
    // AFI for routes out side attributes are IPv4 ONLY.
    let afi = Afi::Ipv4;

    // parse withdrawn prefixes nlri
    let withdrawn_bytes_length = input.read_u16()? as usize;
    let withdrawn_bytes = input.read_n_bytes(withdrawn_bytes_length)?;
    let withdrawn_prefixes = parse_nlri_list(withdrawn_bytes, add_path, &afi)?;

    // parse attributes
    let attribute_length = input.read_u16()? as usize;
    let attr_data = input.read_n_bytes(attribute_length)?;
    let attributes = parse_attributes(attr_data, asn_len, add_path, None, None, None)?;

    // the remaining bytes are announced prefixes.
    let announced_prefixes = parse_nlri_list(input, add_path, &afi)?;

    Ok(BgpUpdateMessage {
        withdrawn_prefixes,
        attributes,
        announced_prefixes,
    })
}
