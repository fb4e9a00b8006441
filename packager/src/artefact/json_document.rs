//! Reading and writing the JSON documents the packager edits.
//!
//! Documents are handled as untyped [`serde_json::Value`]s so that fields
//! the packager does not own survive a rewrite unchanged and in order.

use crate::error::{PackagerError, Result};
use camino::Utf8Path;
use serde::Serialize;
use serde_json::Value;
use serde_json::ser::PrettyFormatter;
use std::fs;

/// Indentation used when writing documents back to disk.
const INDENT: &[u8] = b"    ";

/// Load and parse the JSON document at `path`.
///
/// # Errors
///
/// Returns [`PackagerError::Io`] if the file cannot be read and
/// [`PackagerError::Json`] if it is not valid JSON.
pub fn read_document(path: &Utf8Path) -> Result<Value> {
    let contents = fs::read_to_string(path).map_err(|e| PackagerError::io(path, e))?;
    serde_json::from_str(&contents).map_err(|source| PackagerError::Json {
        path: path.to_owned(),
        source,
    })
}

/// Render `document` with four-space indentation and a trailing newline.
///
/// Output is pure ASCII: non-ASCII characters are written as lowercase
/// `\uXXXX` escapes.
///
/// # Errors
///
/// Returns the serializer's error if `document` cannot be encoded.
pub fn render_document(document: &Value) -> serde_json::Result<String> {
    let mut buffer = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(INDENT));
    document.serialize(&mut serializer)?;
    buffer.push(b'\n');
    // serde_json only ever emits UTF-8.
    Ok(escape_non_ascii(&String::from_utf8_lossy(&buffer)))
}

/// Replace every non-ASCII character with its `\uXXXX` escape.
///
/// Non-ASCII text can only occur inside JSON strings, so escaping the
/// rendered document keeps it valid. Characters outside the Basic
/// Multilingual Plane become UTF-16 surrogate pairs.
fn escape_non_ascii(rendered: &str) -> String {
    let mut escaped = String::with_capacity(rendered.len());
    let mut units = [0u16; 2];
    for ch in rendered.chars() {
        if ch.is_ascii() {
            escaped.push(ch);
            continue;
        }
        for unit in ch.encode_utf16(&mut units) {
            escaped.push_str(&format!("\\u{unit:04x}"));
        }
    }
    escaped
}

/// Write `document` to `path` in the rendered form.
///
/// # Errors
///
/// Returns [`PackagerError::Json`] if encoding fails and
/// [`PackagerError::Io`] if the file cannot be written.
pub fn write_document(path: &Utf8Path, document: &Value) -> Result<()> {
    let rendered = render_document(document).map_err(|source| PackagerError::Json {
        path: path.to_owned(),
        source,
    })?;
    fs::write(path, rendered).map_err(|e| PackagerError::io(path, e))
}
