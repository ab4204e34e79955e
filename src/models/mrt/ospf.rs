//! MRT OSPFv2 and OSPFv3 structs
use crate::models::Afi;
use bytes::Bytes;
use std::net::{IpAddr, Ipv4Addr};

/// OSPFv2 message ([RFC6396 section 4.1](https://datatracker.ietf.org/doc/html/rfc6396#section-4.1)).
///
/// ```text
///  0                   1                   2                   3
///  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                        Remote IP Address                      |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                         Local IP Address                      |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                  OSPF Message Contents (variable)
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
///
/// The OSPF packet itself is kept as raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ospfv2Message {
    pub remote_addr: Ipv4Addr,
    pub local_addr: Ipv4Addr,
    pub payload: Bytes,
}

/// OSPFv3 message ([RFC6396 section 4.6](https://datatracker.ietf.org/doc/html/rfc6396#section-4.6)).
///
/// Same as [Ospfv2Message], with an address family selecting the address widths.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ospfv3Message {
    pub afi: Afi,
    pub remote_addr: IpAddr,
    pub local_addr: IpAddr,
    pub payload: Bytes,
}
