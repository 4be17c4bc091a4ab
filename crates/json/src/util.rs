use crate::JsonError;

/// Returns the index of the quote closing a string whose body starts at `x`.
pub(crate) fn find_ending_quote(data: &[u8], x: usize) -> Option<usize> {
    let mut i = x;
    while i < data.len() {
        match data[i] {
            b'"' => return Some(i),
            b'\\' => i += 2,
            _ => i += 1,
        }
    }
    None
}

/// Decodes a JSON string body (between the quotes).
pub(crate) fn decode_json_string(bytes: &[u8]) -> Result<String, JsonError> {
    // Fast path: no escapes and no raw control characters.
    if !bytes.iter().any(|&b| b == b'\\' || b < 0x20) {
        return std::str::from_utf8(bytes)
            .map(str::to_owned)
            .map_err(|_| JsonError::InvalidUtf8);
    }
    let mut quoted = Vec::with_capacity(bytes.len() + 2);
    quoted.push(b'"');
    quoted.extend_from_slice(bytes);
    quoted.push(b'"');
    Ok(serde_json::from_slice(&quoted)?)
}

/// Formats a finite float with the shortest round-trip representation.
pub(crate) fn format_float(f: f64) -> String {
    if f.fract() == 0.0 && f.abs() < 1e15 {
        format!("{}", f as i64)
    } else {
        format!("{}", f)
    }
}
