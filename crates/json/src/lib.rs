//! Streaming JSON tokens for the clustermgmt data-binding layer.
//!
//! The binding code never builds an intermediate document tree. Values are
//! written field by field through a [`JsonWriter`] and read field by field
//! through a [`JsonReader`]; [`Source`] normalizes the inputs a caller may
//! hold (bytes, strings, streams) into one contiguous buffer.
//!
//! # Example
//!
//! ```
//! use clustermgmt_json::{JsonReader, JsonWriter};
//!
//! let mut writer = JsonWriter::new();
//! writer.write_start_obj();
//! writer.write_key("cpu");
//! writer.write_str("100m");
//! writer.write_end_obj();
//! let bytes = writer.finish();
//! assert_eq!(bytes, br#"{"cpu":"100m"}"#);
//!
//! let mut reader = JsonReader::new(&bytes);
//! let mut cpu = None;
//! reader
//!     .read_object(|reader, key| {
//!         match key.as_str() {
//!             "cpu" => cpu = Some(reader.read_str()?),
//!             _ => reader.skip_value()?,
//!         }
//!         Ok(())
//!     })
//!     .unwrap();
//! assert_eq!(cpu.as_deref(), Some("100m"));
//! ```

mod error;
mod reader;
mod source;
mod util;
mod writer;

pub use error::JsonError;
pub use reader::{JsonReader, Token, MAX_DEPTH};
pub use source::Source;
pub use writer::JsonWriter;
