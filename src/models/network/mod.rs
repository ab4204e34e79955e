//! Common network-related structs.

mod afi;
mod asn;
mod nexthop;
mod prefix;

pub use afi::*;
pub use asn::*;
pub use nexthop::*;
pub use prefix::*;

/// BGP identifiers are always 4 octets, written as an IPv4 address.
pub type BgpIdentifier = std::net::Ipv4Addr;
