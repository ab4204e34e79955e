/*!
Provides parsing of BGP messages embedded in MRT records.
*/
pub mod attributes;
pub mod messages;

pub use attributes::{parse_attributes, AttributeIter};
pub use messages::parse_bgp_message;
