/*!
mrt-parser decodes MRT routing-data captures into strongly typed records.

MRT ([RFC 6396](https://datatracker.ietf.org/doc/html/rfc6396)) is the envelope route
collectors use to archive BGP table dumps and update streams, along with OSPF and IS-IS
traffic. This crate reads such a stream frame by frame and turns each frame into an
[MrtRecord](models::MrtRecord). It only decodes; writing MRT is out of scope.

# Examples

Iterate over every record of a file, skipping frames that fail to decode:

```no_run
use mrt_parser::MrtParser;
use mrt_parser::models::*;

let file = std::fs::File::open("rib.20240101.0000").unwrap();
for record in MrtParser::from_reader(std::io::BufReader::new(file)) {
    if let MrtMessage::TableDumpV2Message(TableDumpV2Message::RibAfi(rib)) = &record.message {
        for entry in &rib.rib_entries {
            println!("{} via peer {}: {:?}", rib.prefix, entry.peer_index, entry.attributes.as_path());
        }
    }
}
```

Handle errors yourself with the fallible iterator:

```no_run
use mrt_parser::{MrtParser, ParserError};

let file = std::fs::File::open("updates.20240101.0000").unwrap();
for result in MrtParser::from_reader(file).into_fallible_record_iter() {
    match result {
        Ok(record) => println!("{:?}", record.common_header),
        Err(e) if e.error.is_fatal() => break,
        Err(e) => eprintln!("skipping frame: {}", e),
    }
}
```

# Supported RFCs

### MRT
- [X] [RFC 6396](https://datatracker.ietf.org/doc/html/rfc6396): Multi-Threaded Routing Toolkit (MRT) Routing Information Export Format
- [ ] [RFC 6397](https://datatracker.ietf.org/doc/html/rfc6397): MRT BGP Routing Information Export Format with Geo-Location Extensions
- [X] [RFC 8050](https://datatracker.ietf.org/doc/html/rfc8050): MRT Routing Information Export Format with BGP Additional Path Extensions

### BGP
- [X] [RFC 4271](https://datatracker.ietf.org/doc/html/rfc4271): A Border Gateway Protocol 4 (BGP-4)
- [X] [RFC 4456](https://datatracker.ietf.org/doc/html/rfc4456): BGP Route Reflection
- [X] [RFC 4760](https://datatracker.ietf.org/doc/html/rfc4760): Multiprotocol Extensions for BGP-4
- [X] [RFC 5065](https://datatracker.ietf.org/doc/html/rfc5065): Autonomous System Confederations for BGP
- [X] [RFC 6793](https://datatracker.ietf.org/doc/html/rfc6793): BGP Support for Four-Octet Autonomous System (AS) Number Space
- [X] [RFC 7911](https://datatracker.ietf.org/doc/html/rfc7911): Advertisement of Multiple Paths in BGP (ADD-PATH)
- [X] [RFC 9234](https://datatracker.ietf.org/doc/html/rfc9234): Route Leak Prevention and Detection Using Roles in UPDATE and OPEN Messages

### Communities
- [X] [RFC 1997](https://datatracker.ietf.org/doc/html/rfc1997): BGP Communities Attribute
- [X] [RFC 8092](https://datatracker.ietf.org/doc/html/rfc8092): BGP Large Communities
*/

pub mod error;
pub mod models;
pub mod parser;

pub use error::{ParserError, ParserErrorWithBytes};
pub use parser::iters::{FallibleRecordIterator, RecordIterator};
pub use parser::{parse_mrt_record, MrtParser, ParserOptions, ReaderState};
