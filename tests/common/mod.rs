//! Frame builders shared by the integration tests.
//!
//! The library only decodes, so the tests build their input here. Each `encode_*` function
//! writes a model back in wire format, which lets tests compare a decoded record against the
//! record the frame was built from.
#![allow(dead_code)]

use bytes::{BufMut, Bytes, BytesMut};
use ipnet::IpNet;
use mrt_parser::models::*;
use std::net::IpAddr;

pub fn encode_asn(buf: &mut BytesMut, asn: &Asn, asn_len: AsnLength) {
    match asn_len {
        AsnLength::Bits16 => buf.put_u16(asn.to_u32() as u16),
        AsnLength::Bits32 => buf.put_u32(asn.to_u32()),
    }
}

pub fn encode_addr(buf: &mut BytesMut, addr: &IpAddr) {
    match addr {
        IpAddr::V4(a) => buf.put_u32((*a).into()),
        IpAddr::V6(a) => buf.put_u128((*a).into()),
    }
}

/// Length in bits, then only as many address bytes as the length needs.
pub fn encode_nlri_prefix(buf: &mut BytesMut, prefix: &NetworkPrefix, add_path: bool) {
    if add_path {
        buf.put_u32(prefix.path_id.unwrap_or(0));
    }
    let bit_len = prefix.prefix.prefix_len();
    buf.put_u8(bit_len);
    let byte_len = prefix.encoded_len();
    match prefix.prefix {
        IpNet::V4(p) => buf.put_slice(&p.addr().octets()[..byte_len]),
        IpNet::V6(p) => buf.put_slice(&p.addr().octets()[..byte_len]),
    }
}

fn encode_as_path(buf: &mut BytesMut, path: &AsPath, asn_len: AsnLength) {
    for segment in path.segments() {
        let segment_type = match segment {
            AsPathSegment::AsSet(_) => 1,
            AsPathSegment::AsSequence(_) => 2,
            AsPathSegment::ConfedSequence(_) => 3,
            AsPathSegment::ConfedSet(_) => 4,
        };
        buf.put_u8(segment_type);
        buf.put_u8(segment.asns().len() as u8);
        for asn in segment.asns() {
            encode_asn(buf, asn, asn_len);
        }
    }
}

fn encode_attribute_value(value: &AttributeValue, asn_len: AsnLength) -> BytesMut {
    let mut buf = BytesMut::new();
    match value {
        AttributeValue::Origin(origin) => buf.put_u8(*origin as u8),
        AttributeValue::AsPath(path) => encode_as_path(&mut buf, path, asn_len),
        AttributeValue::As4Path(path) => encode_as_path(&mut buf, path, AsnLength::Bits32),
        AttributeValue::NextHop(addr) => encode_addr(&mut buf, addr),
        AttributeValue::MultiExitDiscriminator(v) | AttributeValue::LocalPreference(v) => {
            buf.put_u32(*v)
        }
        AttributeValue::AtomicAggregate => {}
        AttributeValue::Aggregator { asn, id } | AttributeValue::As4Aggregator { asn, id } => {
            encode_asn(&mut buf, asn, asn.len);
            buf.put_u32((*id).into());
        }
        AttributeValue::Communities(communities) => {
            for community in communities {
                buf.put_u32(match community {
                    Community::NoExport => 0xFFFFFF01,
                    Community::NoAdvertise => 0xFFFFFF02,
                    Community::NoExportSubConfed => 0xFFFFFF03,
                    Community::Custom(asn, value) => (asn.to_u32() << 16) | *value as u32,
                });
            }
        }
        AttributeValue::OriginatorId(id) => buf.put_u32((*id).into()),
        AttributeValue::Clusters(ids) => ids.iter().for_each(|id| buf.put_u32(*id)),
        AttributeValue::LargeCommunities(communities) => {
            for c in communities {
                buf.put_u32(c.global_admin);
                buf.put_u32(c.local_data[0]);
                buf.put_u32(c.local_data[1]);
            }
        }
        AttributeValue::OnlyToCustomer(asn) => buf.put_u32(asn.to_u32()),
        AttributeValue::Unknown(raw) => buf.put_slice(&raw.bytes),
        AttributeValue::MpReachNlri(_) | AttributeValue::MpUnreachNlri(_) => {
            unimplemented!("multiprotocol NLRI is not built by the test encoder")
        }
    }
    buf
}

pub fn encode_attributes(attributes: &Attributes, asn_len: AsnLength) -> Bytes {
    let mut buf = BytesMut::new();
    for attr in attributes {
        let value = encode_attribute_value(&attr.value, asn_len);
        let attr_type: u8 = attr.attr_type().into();
        buf.put_u8(attr.flag.bits());
        buf.put_u8(attr_type);
        if attr.flag.contains(AttrFlags::EXTENDED) {
            buf.put_u16(value.len() as u16);
        } else {
            buf.put_u8(value.len() as u8);
        }
        buf.put_slice(&value);
    }
    buf.freeze()
}

pub fn encode_peer_index_table(table: &PeerIndexTable) -> Bytes {
    let mut buf = BytesMut::new();
    buf.put_u32(table.collector_bgp_id.into());
    buf.put_u16(table.view_name.len() as u16);
    buf.put_slice(table.view_name.as_bytes());
    buf.put_u16(table.peers.len() as u16);
    for peer in &table.peers {
        buf.put_u8(peer.peer_type.bits());
        buf.put_u32(peer.peer_bgp_id.into());
        encode_addr(&mut buf, &peer.peer_address);
        let asn_len = match peer.peer_type.contains(PeerType::AS_SIZE_32BIT) {
            true => AsnLength::Bits32,
            false => AsnLength::Bits16,
        };
        encode_asn(&mut buf, &peer.peer_asn, asn_len);
    }
    buf.freeze()
}

fn encode_rib_entries(buf: &mut BytesMut, entries: &[RibEntry], add_path: bool) {
    buf.put_u16(entries.len() as u16);
    for entry in entries {
        buf.put_u16(entry.peer_index);
        buf.put_u32(entry.originated_time);
        if add_path {
            buf.put_u32(entry.path_id.unwrap_or(0));
        }
        let attrs = encode_attributes(&entry.attributes, AsnLength::Bits32);
        buf.put_u16(attrs.len() as u16);
        buf.put_slice(&attrs);
    }
}

pub fn encode_rib_afi(rib: &RibAfiEntries) -> Bytes {
    let mut buf = BytesMut::new();
    buf.put_u32(rib.sequence_number);
    encode_nlri_prefix(&mut buf, &rib.prefix, false);
    encode_rib_entries(&mut buf, &rib.rib_entries, rib.rib_type.is_add_path());
    buf.freeze()
}

pub fn encode_rib_generic(rib: &RibGenericEntries) -> Bytes {
    let mut buf = BytesMut::new();
    buf.put_u32(rib.sequence_number);
    buf.put_u16(rib.afi.into());
    buf.put_u8(rib.safi.into());
    encode_nlri_prefix(&mut buf, &rib.nlri, false);
    encode_rib_entries(&mut buf, &rib.rib_entries, rib.rib_type.is_add_path());
    buf.freeze()
}

pub fn encode_table_dump(msg: &TableDumpMessage) -> Bytes {
    let mut buf = BytesMut::new();
    buf.put_u16(msg.view_number);
    buf.put_u16(msg.sequence_number);
    encode_addr(&mut buf, &msg.prefix.prefix.addr());
    buf.put_u8(msg.prefix.prefix.prefix_len());
    buf.put_u8(msg.status);
    buf.put_u32(msg.originated_time);
    encode_addr(&mut buf, &msg.peer_address);
    encode_asn(&mut buf, &msg.peer_asn, AsnLength::Bits16);
    let attrs = encode_attributes(&msg.attributes, AsnLength::Bits16);
    buf.put_u16(attrs.len() as u16);
    buf.put_slice(&attrs);
    buf.freeze()
}

pub fn encode_bgp_message(msg: &BgpMessage, add_path: bool, asn_len: AsnLength) -> Bytes {
    let mut body = BytesMut::new();
    match msg {
        BgpMessage::Open(open) => {
            body.put_u8(open.version);
            body.put_u16(open.asn.to_u32() as u16);
            body.put_u16(open.hold_time);
            body.put_u32(open.bgp_identifier.into());
            let mut params = BytesMut::new();
            for param in &open.opt_params {
                let mut value = BytesMut::new();
                match &param.param_value {
                    ParamValue::Raw(bytes) => value.put_slice(bytes),
                    ParamValue::Capabilities(caps) => {
                        for cap in caps {
                            value.put_u8(cap.code);
                            value.put_u8(cap.value.len() as u8);
                            value.put_slice(&cap.value);
                        }
                    }
                }
                params.put_u8(param.param_type);
                params.put_u8(value.len() as u8);
                params.put_slice(&value);
            }
            body.put_u8(params.len() as u8);
            body.put_slice(&params);
        }
        BgpMessage::Update(update) => {
            let mut withdrawn = BytesMut::new();
            for p in &update.withdrawn_prefixes {
                encode_nlri_prefix(&mut withdrawn, p, add_path);
            }
            body.put_u16(withdrawn.len() as u16);
            body.put_slice(&withdrawn);
            let attrs = encode_attributes(&update.attributes, asn_len);
            body.put_u16(attrs.len() as u16);
            body.put_slice(&attrs);
            for p in &update.announced_prefixes {
                encode_nlri_prefix(&mut body, p, add_path);
            }
        }
        BgpMessage::Notification(n) => {
            body.put_u8(n.error_code);
            body.put_u8(n.error_subcode);
            body.put_slice(&n.data);
        }
        BgpMessage::KeepAlive => {}
    }

    let mut buf = BytesMut::new();
    buf.put_slice(&[0xFF; 16]);
    buf.put_u16(19 + body.len() as u16);
    buf.put_u8(msg.msg_type().into());
    buf.put_slice(&body);
    buf.freeze()
}

pub fn encode_bgp4mp(msg: &Bgp4MpEnum) -> Bytes {
    let mut buf = BytesMut::new();
    let msg_type = msg.msg_type();
    let asn_len = msg_type.asn_length();
    match msg {
        Bgp4MpEnum::StateChange(s) => {
            encode_asn(&mut buf, &s.peer_asn, asn_len);
            encode_asn(&mut buf, &s.local_asn, asn_len);
            buf.put_u16(s.interface_index);
            buf.put_u16(Afi::from(s.peer_addr).into());
            encode_addr(&mut buf, &s.peer_addr);
            encode_addr(&mut buf, &s.local_addr);
            buf.put_u16(s.old_state.into());
            buf.put_u16(s.new_state.into());
        }
        Bgp4MpEnum::Message(m) => {
            encode_asn(&mut buf, &m.peer_asn, asn_len);
            encode_asn(&mut buf, &m.local_asn, asn_len);
            buf.put_u16(m.interface_index);
            buf.put_u16(Afi::from(m.peer_ip).into());
            encode_addr(&mut buf, &m.peer_ip);
            encode_addr(&mut buf, &m.local_ip);
            buf.put_slice(&encode_bgp_message(
                &m.bgp_message,
                msg_type.is_add_path(),
                asn_len,
            ));
        }
    }
    buf.freeze()
}

pub fn encode_message(msg: &MrtMessage) -> Bytes {
    match msg {
        MrtMessage::TableDumpMessage(m) => encode_table_dump(m),
        MrtMessage::TableDumpV2Message(TableDumpV2Message::PeerIndexTable(t)) => {
            encode_peer_index_table(t)
        }
        MrtMessage::TableDumpV2Message(TableDumpV2Message::RibAfi(r)) => encode_rib_afi(r),
        MrtMessage::TableDumpV2Message(TableDumpV2Message::RibGeneric(r)) => {
            encode_rib_generic(r)
        }
        MrtMessage::Bgp4Mp(m) => encode_bgp4mp(m),
        MrtMessage::Ospfv2(m) => {
            let mut buf = BytesMut::new();
            buf.put_u32(m.remote_addr.into());
            buf.put_u32(m.local_addr.into());
            buf.put_slice(&m.payload);
            buf.freeze()
        }
        MrtMessage::Ospfv3(m) => {
            let mut buf = BytesMut::new();
            buf.put_u16(m.afi.into());
            encode_addr(&mut buf, &m.remote_addr);
            encode_addr(&mut buf, &m.local_addr);
            buf.put_slice(&m.payload);
            buf.freeze()
        }
        MrtMessage::Isis(m) => m.pdu.clone(),
    }
}

/// Wrap an already encoded body in a common header. For extended-timestamp types the
/// microsecond field is written and counted in the length.
pub fn frame_bytes(
    timestamp: u32,
    microsecond_timestamp: Option<u32>,
    entry_type: u16,
    entry_subtype: u16,
    body: &[u8],
) -> Vec<u8> {
    let mut buf = BytesMut::new();
    buf.put_u32(timestamp);
    buf.put_u16(entry_type);
    buf.put_u16(entry_subtype);
    match microsecond_timestamp {
        Some(micros) => {
            buf.put_u32(body.len() as u32 + 4);
            buf.put_u32(micros);
        }
        None => buf.put_u32(body.len() as u32),
    }
    buf.put_slice(body);
    buf.to_vec()
}

pub fn encode_record(record: &MrtRecord) -> Vec<u8> {
    let header = &record.common_header;
    frame_bytes(
        header.timestamp,
        header.microsecond_timestamp,
        header.entry_type.into(),
        header.entry_subtype,
        &encode_message(&record.message),
    )
}

/// Build a record whose header length matches its encoded message.
pub fn make_record(
    timestamp: u32,
    microsecond_timestamp: Option<u32>,
    entry_type: EntryType,
    entry_subtype: u16,
    message: MrtMessage,
) -> MrtRecord {
    let length = encode_message(&message).len() as u32;
    MrtRecord {
        common_header: CommonHeader {
            timestamp,
            microsecond_timestamp,
            entry_type,
            entry_subtype,
            length,
        },
        message,
    }
}

pub fn attr(flag: AttrFlags, value: AttributeValue) -> Attribute {
    Attribute { flag, value }
}
