//! Byte buffers for the clustermgmt JSON codec.
//!
//! - [`Writer`] is an auto-growing output buffer that can hand its pending
//!   bytes to any [`std::io::Write`] sink.
//! - [`Reader`] is a cursor over a borrowed byte slice whose accessors never
//!   read past the end.

mod reader;
mod writer;

pub use reader::Reader;
pub use writer::{Writer, DEFAULT_ALLOC_SIZE};
