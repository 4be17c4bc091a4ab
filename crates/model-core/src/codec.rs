//! JSON entry points.
//!
//! Output is compact: no insignificant whitespace, members in declaration
//! order. Input must hold exactly one JSON value; anything but whitespace
//! after it is an error.

use std::any::type_name;
use std::io::Write;

use clustermgmt_json::{JsonError, JsonReader, JsonWriter, Source};

use crate::list::{read_items, write_items};
use crate::{Binding, List, Resource};

fn write_to<W: Write>(writer: &mut JsonWriter, mut sink: W) -> Result<(), JsonError> {
    writer.flush_to(&mut sink)?;
    Ok(())
}

fn read_from<'a, T, F>(source: Source<'a>, read: F) -> Result<T, JsonError>
where
    F: FnOnce(&mut JsonReader<'_>) -> Result<T, JsonError>,
{
    let bytes = source.into_bytes()?;
    let mut reader = JsonReader::new(&bytes);
    let result = read(&mut reader).and_then(|value| {
        reader.finish()?;
        Ok(value)
    });
    if let Err(err) = &result {
        tracing::debug!(target_type = type_name::<T>(), error = %err, "unmarshal failed");
    }
    result
}

/// Writes `value` as JSON to `sink`. Write errors from the sink are
/// returned unchanged.
pub fn marshal<T: Binding, W: Write>(value: &T, sink: W) -> Result<(), JsonError> {
    let mut writer = JsonWriter::new();
    value.write_json(&mut writer);
    write_to(&mut writer, sink)
}

pub fn marshal_to_vec<T: Binding>(value: &T) -> Vec<u8> {
    let mut writer = JsonWriter::new();
    value.write_json(&mut writer);
    writer.finish()
}

pub fn marshal_to_string<T: Binding>(value: &T) -> String {
    String::from_utf8_lossy(&marshal_to_vec(value)).into_owned()
}

/// Writes `items` as a bare JSON array.
pub fn marshal_list<T: Binding, W: Write>(items: &[T], sink: W) -> Result<(), JsonError> {
    let mut writer = JsonWriter::new();
    write_items(&mut writer, items);
    write_to(&mut writer, sink)
}

/// Reads one value from `source`, which may be bytes, text or a
/// [`Source::reader`] stream.
pub fn unmarshal<'a, T: Binding>(source: impl Into<Source<'a>>) -> Result<T, JsonError> {
    read_from(source.into(), T::read_json)
}

/// Reads a bare JSON array. An empty array gives an empty vector.
pub fn unmarshal_list<'a, T: Binding>(source: impl Into<Source<'a>>) -> Result<Vec<T>, JsonError> {
    read_from(source.into(), read_items)
}

/// Reads a list in either wire form, keeping the envelope's `href` and link
/// flag.
pub fn unmarshal_list_envelope<'a, T: Resource>(
    source: impl Into<Source<'a>>,
) -> Result<List<T>, JsonError> {
    unmarshal(source)
}
