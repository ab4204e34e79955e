//! MRT BGP4MP structs
use crate::models::*;
use num_enum::{IntoPrimitive, TryFromPrimitive};
use std::net::IpAddr;

/// BGP states enum.
#[derive(Debug, TryFromPrimitive, IntoPrimitive, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u16)]
pub enum BgpState {
    Idle = 1,
    Connect = 2,
    Active = 3,
    OpenSent = 4,
    OpenConfirm = 5,
    Established = 6,
}

/// BGP4MP message types.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Bgp4MpEnum {
    StateChange(Bgp4MpStateChange),
    Message(Bgp4MpMessage),
}

impl Bgp4MpEnum {
    pub const fn msg_type(&self) -> Bgp4MpType {
        match self {
            Bgp4MpEnum::StateChange(x) => x.msg_type,
            Bgp4MpEnum::Message(x) => x.msg_type,
        }
    }
}

/// BGP4MP message subtypes.
///
/// The subtype alone decides the AS number width of the record and whether its NLRI carry
/// ADD-PATH path identifiers.
#[derive(Debug, TryFromPrimitive, IntoPrimitive, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u16)]
pub enum Bgp4MpType {
    StateChange = 0,
    Message = 1,
    MessageAs4 = 4,
    StateChangeAs4 = 5,
    MessageLocal = 6,
    MessageAs4Local = 7,
    MessageAddpath = 8,
    MessageAs4Addpath = 9,
    MessageLocalAddpath = 10,
    MessageLocalAs4Addpath = 11,
}

impl Bgp4MpType {
    pub const fn asn_length(&self) -> AsnLength {
        match self {
            Bgp4MpType::StateChange
            | Bgp4MpType::Message
            | Bgp4MpType::MessageLocal
            | Bgp4MpType::MessageAddpath
            | Bgp4MpType::MessageLocalAddpath => AsnLength::Bits16,
            Bgp4MpType::StateChangeAs4
            | Bgp4MpType::MessageAs4
            | Bgp4MpType::MessageAs4Local
            | Bgp4MpType::MessageAs4Addpath
            | Bgp4MpType::MessageLocalAs4Addpath => AsnLength::Bits32,
        }
    }

    pub const fn is_add_path(&self) -> bool {
        matches!(
            self,
            Bgp4MpType::MessageAddpath
                | Bgp4MpType::MessageAs4Addpath
                | Bgp4MpType::MessageLocalAddpath
                | Bgp4MpType::MessageLocalAs4Addpath
        )
    }

    pub const fn is_state_change(&self) -> bool {
        matches!(self, Bgp4MpType::StateChange | Bgp4MpType::StateChangeAs4)
    }
}

/// BGP4MP state change message.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bgp4MpStateChange {
    pub msg_type: Bgp4MpType,
    pub peer_asn: Asn,
    pub local_asn: Asn,
    pub interface_index: u16,
    pub peer_addr: IpAddr,
    pub local_addr: IpAddr,
    pub old_state: BgpState,
    pub new_state: BgpState,
}

/// BGP4MP message.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bgp4MpMessage {
    pub msg_type: Bgp4MpType,
    pub peer_asn: Asn,
    pub local_asn: Asn,
    pub interface_index: u16,
    pub peer_ip: IpAddr,
    pub local_ip: IpAddr,
    pub bgp_message: BgpMessage,
}

impl Bgp4MpMessage {
    pub const fn is_local(&self) -> bool {
        matches!(
            self.msg_type,
            Bgp4MpType::MessageLocal
                | Bgp4MpType::MessageAs4Local
                | Bgp4MpType::MessageLocalAddpath
                | Bgp4MpType::MessageLocalAs4Addpath
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn message(msg_type: Bgp4MpType) -> Bgp4MpMessage {
        Bgp4MpMessage {
            msg_type,
            peer_asn: Asn::new_32bit(0),
            local_asn: Asn::new_32bit(0),
            interface_index: 1,
            peer_ip: IpAddr::from_str("10.0.0.0").unwrap(),
            local_ip: IpAddr::from_str("10.0.0.1").unwrap(),
            bgp_message: BgpMessage::KeepAlive,
        }
    }

    #[test]
    fn test_subtype_widths() {
        for (code, width, add_path) in [
            (0u16, AsnLength::Bits16, false),
            (1, AsnLength::Bits16, false),
            (4, AsnLength::Bits32, false),
            (5, AsnLength::Bits32, false),
            (6, AsnLength::Bits16, false),
            (7, AsnLength::Bits32, false),
            (8, AsnLength::Bits16, true),
            (9, AsnLength::Bits32, true),
            (10, AsnLength::Bits16, true),
            (11, AsnLength::Bits32, true),
        ] {
            let ty = Bgp4MpType::try_from(code).unwrap();
            assert_eq!(ty.asn_length(), width, "{code}");
            assert_eq!(ty.is_add_path(), add_path, "{code}");
        }
        assert!(Bgp4MpType::try_from(2u16).is_err());
        assert!(Bgp4MpType::try_from(3u16).is_err());
        assert!(Bgp4MpType::StateChangeAs4.is_state_change());
    }

    #[test]
    fn test_msg_type_and_is_local() {
        let msg = Bgp4MpEnum::Message(message(Bgp4MpType::MessageAs4));
        assert_eq!(msg.msg_type(), Bgp4MpType::MessageAs4);

        assert!(!message(Bgp4MpType::Message).is_local());
        assert!(!message(Bgp4MpType::MessageAs4Addpath).is_local());
        assert!(message(Bgp4MpType::MessageLocal).is_local());
        assert!(message(Bgp4MpType::MessageAs4Local).is_local());
        assert!(message(Bgp4MpType::MessageLocalAddpath).is_local());
        assert!(message(Bgp4MpType::MessageLocalAs4Addpath).is_local());
    }

    #[test]
    #[cfg(feature = "serde")]
    fn test_serialization() {
        let state_change = Bgp4MpEnum::StateChange(Bgp4MpStateChange {
            msg_type: Bgp4MpType::StateChange,
            peer_asn: Asn::new_16bit(65000),
            local_asn: Asn::new_16bit(65001),
            interface_index: 1,
            peer_addr: IpAddr::from_str("10.0.0.0").unwrap(),
            local_addr: IpAddr::from_str("10.0.0.1").unwrap(),
            old_state: BgpState::Idle,
            new_state: BgpState::Connect,
        });
        let serialized = serde_json::to_string(&state_change).unwrap();
        let deserialized: Bgp4MpEnum = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, state_change);
    }
}
