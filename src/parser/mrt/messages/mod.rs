pub mod bgp4mp;
pub mod isis;
pub mod ospf;
pub mod table_dump;
pub mod table_dump_v2;

pub use bgp4mp::parse_bgp4mp;
pub use isis::parse_isis;
pub use ospf::{parse_ospfv2, parse_ospfv3};
pub use table_dump::parse_table_dump_message;
pub use table_dump_v2::parse_table_dump_v2_message;
