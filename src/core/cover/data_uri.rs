//! core/cover/data_uri.rs
//! The only place base64 / data-URI text is produced or parsed.

use base64::{Engine as _, engine::general_purpose::STANDARD};

use crate::core::error::{Error, Result};

pub const PNG_DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// PNG bytes -> `data:image/png;base64,...`
pub fn encode_as_data_uri(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(PNG_DATA_URI_PREFIX.len() + bytes.len() * 4 / 3 + 4);
    out.push_str(PNG_DATA_URI_PREFIX);
    STANDARD.encode_string(bytes, &mut out);
    out
}

/// `data:<mime>;base64,<payload>` -> payload bytes.
///
/// Any mime is accepted; the `;base64` marker is required.
pub fn decode_data_uri(uri: &str) -> Result<Vec<u8>> {
    let rest = uri
        .strip_prefix("data:")
        .ok_or_else(|| Error::InvalidDataUri(preview(uri)))?;

    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| Error::InvalidDataUri(preview(uri)))?;

    if !header.ends_with(";base64") {
        return Err(Error::InvalidDataUri(preview(uri)));
    }

    Ok(STANDARD.decode(payload.trim())?)
}

/// Keep error messages short; payloads can be megabytes.
fn preview(uri: &str) -> String {
    uri.chars().take(32).collect()
}
