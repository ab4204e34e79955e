use crate::models::*;
use ipnet::IpNet;
use std::net::IpAddr;

/// Network Layer Reachability Information carried by MP_REACH_NLRI and MP_UNREACH_NLRI.
#[derive(Debug, PartialEq, Clone, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Nlri {
    pub afi: Afi,
    pub safi: Safi,
    pub next_hop: Option<NextHopAddress>,
    pub prefixes: Vec<NetworkPrefix>,
}

impl Nlri {
    /// Returns true if this NLRI refers to the IPv4 address space.
    pub const fn is_ipv4(&self) -> bool {
        matches!(self.afi, Afi::Ipv4)
    }

    /// Returns true if this NLRI refers to the IPv6 address space.
    pub const fn is_ipv6(&self) -> bool {
        matches!(self.afi, Afi::Ipv6)
    }

    /// Returns true if this NLRI refers to reachable prefixes
    pub const fn is_reachable(&self) -> bool {
        self.next_hop.is_some()
    }

    pub fn new_reachable(prefix: NetworkPrefix, next_hop: Option<IpAddr>) -> Nlri {
        Nlri {
            afi: afi_of(&prefix.prefix),
            safi: Safi::Unicast,
            next_hop: next_hop.map(NextHopAddress::from),
            prefixes: vec![prefix],
        }
    }

    pub fn new_unreachable(prefix: NetworkPrefix) -> Nlri {
        Nlri {
            afi: afi_of(&prefix.prefix),
            safi: Safi::Unicast,
            next_hop: None,
            prefixes: vec![prefix],
        }
    }
}

fn afi_of(prefix: &IpNet) -> Afi {
    match prefix {
        IpNet::V4(_) => Afi::Ipv4,
        IpNet::V6(_) => Afi::Ipv6,
    }
}

impl IntoIterator for Nlri {
    type Item = NetworkPrefix;
    type IntoIter = std::vec::IntoIter<NetworkPrefix>;

    fn into_iter(self) -> Self::IntoIter {
        self.prefixes.into_iter()
    }
}
