/*!
models module defines the structs decoded out of MRT frames.

All models are plain data: they are built once per decoded frame and handed to the caller.
*/
pub mod bgp;
pub mod mrt;
pub mod network;

pub use bgp::*;
pub use mrt::*;
pub use network::*;
