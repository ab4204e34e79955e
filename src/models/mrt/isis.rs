//! MRT IS-IS struct
use bytes::Bytes;

/// IS-IS PDU ([RFC6396 section 4.5](https://datatracker.ietf.org/doc/html/rfc6396#section-4.5)),
/// carried verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IsisMessage {
    pub pdu: Bytes,
}
