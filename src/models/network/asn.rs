use crate::error::ParserError;
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

/// AS number length: 16 or 32 bits.
///
/// The width of an AS number is never encoded alongside the number itself; it always comes from
/// the surrounding context (MRT subtype, peer type flags, or attribute length).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AsnLength {
    Bits16,
    Bits32,
}

impl AsnLength {
    /// Number of octets an AS number of this length occupies on the wire.
    pub const fn byte_width(&self) -> usize {
        match self {
            AsnLength::Bits16 => 2,
            AsnLength::Bits32 => 4,
        }
    }

    pub const fn is_four_byte(&self) -> bool {
        matches!(self, AsnLength::Bits32)
    }
}

/// ASN -- Autonomous System Number
#[derive(Debug, Clone, Copy, Eq)]
pub struct Asn {
    pub asn: u32,
    pub len: AsnLength,
}

impl Asn {
    /// Constructs a new 2-octet `Asn` with `AsnLength::Bits16`.
    pub const fn new_16bit(asn: u16) -> Self {
        Asn {
            asn: asn as u32,
            len: AsnLength::Bits16,
        }
    }

    /// Constructs a new 4-octet `Asn` with `AsnLength::Bits32`.
    pub const fn new_32bit(asn: u32) -> Self {
        Asn {
            asn,
            len: AsnLength::Bits32,
        }
    }

    /// Decode an AS number from a big-endian byte run whose width was set by context.
    ///
    /// An empty run means the AS number is absent. Any width other than 0, 2 or 4 is rejected
    /// with [ParserError::InvalidAsnLength].
    ///
    /// ```
    /// use mrt_parser::models::Asn;
    ///
    /// let asn = Asn::from_be_slice(&[0x00, 0x01, 0xE2, 0x40]).unwrap().unwrap();
    /// assert_eq!(asn.to_string(), "123456");
    /// assert!(Asn::from_be_slice(&[]).unwrap().is_none());
    /// assert!(Asn::from_be_slice(&[0, 0, 1]).is_err());
    /// ```
    pub fn from_be_slice(bytes: &[u8]) -> Result<Option<Asn>, ParserError> {
        match *bytes {
            [] => Ok(None),
            [a, b] => Ok(Some(Asn::new_16bit(u16::from_be_bytes([a, b])))),
            [a, b, c, d] => Ok(Some(Asn::new_32bit(u32::from_be_bytes([a, b, c, d])))),
            _ => Err(ParserError::InvalidAsnLength(bytes.len())),
        }
    }

    pub const fn is_four_byte(&self) -> bool {
        self.len.is_four_byte()
    }

    pub const fn to_u32(&self) -> u32 {
        self.asn
    }
}

impl PartialEq for Asn {
    fn eq(&self, other: &Self) -> bool {
        self.asn == other.asn
    }
}

impl PartialOrd for Asn {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Asn {
    fn cmp(&self, other: &Self) -> Ordering {
        self.asn.cmp(&other.asn)
    }
}

impl Hash for Asn {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.asn.hash(state);
    }
}

impl PartialEq<u32> for Asn {
    fn eq(&self, other: &u32) -> bool {
        self.asn == *other
    }
}

impl From<u32> for Asn {
    fn from(v: u32) -> Self {
        Asn::new_32bit(v)
    }
}

impl From<Asn> for u32 {
    fn from(value: Asn) -> Self {
        value.asn
    }
}

impl Display for Asn {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.asn)
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::*;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for Asn {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_u32(self.asn)
        }
    }

    impl<'de> Deserialize<'de> for Asn {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let asn = u32::deserialize(deserializer)?;
            Ok(match u16::try_from(asn) {
                Ok(v) => Asn::new_16bit(v),
                Err(_) => Asn::new_32bit(asn),
            })
        }
    }
}
