pub mod messages;
pub mod mrt_header;
pub mod mrt_record;

pub use messages::*;
pub use mrt_header::{parse_common_header, RawHeader, COMMON_HEADER_LEN};
pub use mrt_record::{parse_mrt_body, parse_mrt_frame, parse_mrt_record};
pub(crate) use mrt_record::{read_frame_body, read_raw_header};
