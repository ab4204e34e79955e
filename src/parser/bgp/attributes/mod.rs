mod attr_01_origin;
mod attr_02_17_as_path;
mod attr_03_next_hop;
mod attr_04_med;
mod attr_05_local_pref;
mod attr_07_18_aggregator;
mod attr_08_communities;
mod attr_09_originator;
mod attr_10_13_cluster;
mod attr_14_15_nlri;
mod attr_32_large_communities;
mod attr_35_otc;

use bytes::{Buf, Bytes};
use log::debug;
use std::iter::FusedIterator;

use crate::models::*;

use crate::error::ParserError;
use crate::parser::bgp::attributes::attr_01_origin::parse_origin;
use crate::parser::bgp::attributes::attr_02_17_as_path::parse_as_path;
use crate::parser::bgp::attributes::attr_03_next_hop::parse_next_hop;
use crate::parser::bgp::attributes::attr_04_med::parse_med;
use crate::parser::bgp::attributes::attr_05_local_pref::parse_local_pref;
use crate::parser::bgp::attributes::attr_07_18_aggregator::parse_aggregator;
use crate::parser::bgp::attributes::attr_08_communities::parse_regular_communities;
use crate::parser::bgp::attributes::attr_09_originator::parse_originator_id;
use crate::parser::bgp::attributes::attr_10_13_cluster::parse_clusters;
use crate::parser::bgp::attributes::attr_14_15_nlri::parse_nlri;
use crate::parser::bgp::attributes::attr_32_large_communities::parse_large_communities;
use crate::parser::bgp::attributes::attr_35_otc::parse_only_to_customer;
use crate::parser::ReadUtils;

/// Lazy decoder over a length-delimited run of path attributes.
///
/// Yields one decoded [Attribute] per wire attribute, in order. The first error is yielded
/// once and ends the iteration; nothing after a malformed attribute is trusted.
///
/// The AFI/SAFI/prefix context is only needed for the abbreviated MP_REACH_NLRI form found in
/// TABLE_DUMP_V2 RIB entries ([RFC6396 section 4.3.4](https://datatracker.ietf.org/doc/html/rfc6396#section-4.3.4)).
#[derive(Debug, Clone)]
pub struct AttributeIter {
    data: Bytes,
    asn_len: AsnLength,
    add_path: bool,
    afi: Option<Afi>,
    safi: Option<Safi>,
    prefixes: Option<Vec<NetworkPrefix>>,
    finished: bool,
}

impl AttributeIter {
    pub fn new(data: Bytes, asn_len: AsnLength, add_path: bool) -> AttributeIter {
        AttributeIter {
            data,
            asn_len,
            add_path,
            afi: None,
            safi: None,
            prefixes: None,
            finished: false,
        }
    }

    /// Supply the RIB entry's address family and prefix.
    pub fn with_context(
        mut self,
        afi: Option<Afi>,
        safi: Option<Safi>,
        prefixes: Option<&[NetworkPrefix]>,
    ) -> AttributeIter {
        self.afi = afi;
        self.safi = safi;
        self.prefixes = prefixes.map(|p| p.to_vec());
        self
    }

    fn read_attribute(&mut self) -> Result<Attribute, ParserError> {
        let data = &mut self.data;

        // flag(1) + type(1) + length(1 or 2)
        let available = data.remaining();
        let attr_type_code = data.get(1).copied().unwrap_or(0);
        let header_len = match data.first() {
            Some(flag) if AttrFlags::from_bits_retain(*flag).contains(AttrFlags::EXTENDED) => 4,
            _ => 3,
        };
        if available < header_len {
            return Err(ParserError::MalformedAttribute {
                attr_type: attr_type_code,
                declared: header_len,
                available,
            });
        }

        let flag = AttrFlags::from_bits_retain(data.read_u8()?);
        let attr_type_code = data.read_u8()?;
        let attr_length = match flag.contains(AttrFlags::EXTENDED) {
            false => data.read_u8()? as usize,
            true => data.read_u16()? as usize,
        };

        debug!(
            "reading attribute: type -- {}, length -- {}",
            attr_type_code, attr_length
        );

        if attr_length > data.remaining() {
            return Err(ParserError::MalformedAttribute {
                attr_type: attr_type_code,
                declared: attr_length,
                available: data.remaining(),
            });
        }
        let attr_data = data.split_to(attr_length);

        let attr_type = AttrType::from(attr_type_code);
        let asn_len = &self.asn_len;
        let value = match attr_type {
            AttrType::ORIGIN => parse_origin(attr_data),
            AttrType::AS_PATH => parse_as_path(attr_data, asn_len).map(AttributeValue::AsPath),
            AttrType::NEXT_HOP => parse_next_hop(attr_data),
            AttrType::MULTI_EXIT_DISCRIMINATOR => parse_med(attr_data),
            AttrType::LOCAL_PREFERENCE => parse_local_pref(attr_data),
            AttrType::ATOMIC_AGGREGATE => Ok(AttributeValue::AtomicAggregate),
            AttrType::AGGREGATOR => parse_aggregator(attr_data)
                .map(|(asn, id)| AttributeValue::Aggregator { asn, id }),
            AttrType::COMMUNITIES => parse_regular_communities(attr_data),
            AttrType::ORIGINATOR_ID => parse_originator_id(attr_data),
            AttrType::CLUSTER_LIST => parse_clusters(attr_data),
            AttrType::MP_REACHABLE_NLRI => parse_nlri(
                attr_data,
                &self.afi,
                &self.safi,
                self.prefixes.as_deref(),
                true,
                self.add_path,
            ),
            AttrType::MP_UNREACHABLE_NLRI => parse_nlri(
                attr_data,
                &self.afi,
                &self.safi,
                self.prefixes.as_deref(),
                false,
                self.add_path,
            ),
            AttrType::AS4_PATH => {
                parse_as_path(attr_data, &AsnLength::Bits32).map(AttributeValue::As4Path)
            }
            AttrType::AS4_AGGREGATOR => parse_aggregator(attr_data)
                .map(|(asn, id)| AttributeValue::As4Aggregator { asn, id }),
            AttrType::LARGE_COMMUNITIES => parse_large_communities(attr_data),
            AttrType::ONLY_TO_CUSTOMER => parse_only_to_customer(attr_data),
            AttrType::RESERVED | AttrType::Unknown(_) => {
                match get_deprecated_attr_type(attr_type_code) {
                    Some(name) => debug!("deprecated attribute type: {} - {}", attr_type_code, name),
                    None => debug!("unknown attribute type: {}", attr_type_code),
                }
                Ok(AttributeValue::Unknown(AttrRaw {
                    attr_type,
                    bytes: attr_data,
                }))
            }
        }?;

        Ok(Attribute { flag, value })
    }
}

impl Iterator for AttributeIter {
    type Item = Result<Attribute, ParserError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished || !self.data.has_remaining() {
            return None;
        }
        let attr = self.read_attribute();
        if attr.is_err() {
            self.finished = true;
        }
        Some(attr)
    }
}

impl FusedIterator for AttributeIter {}

/// Parse BGP attributes given the attribute bytes and some options.
///
/// `data` holds exactly the attributes section. Any attribute error fails the whole section.
pub fn parse_attributes(
    data: Bytes,
    asn_len: &AsnLength,
    add_path: bool,
    afi: Option<Afi>,
    safi: Option<Safi>,
    prefixes: Option<&[NetworkPrefix]>,
) -> Result<Attributes, ParserError> {
    AttributeIter::new(data, *asn_len, add_path)
        .with_context(afi, safi, prefixes)
        .collect()
}
