//! Order file encoding and decoding
//!
//! Orders can be read from YAML or JSON; the format is chosen from the file
//! extension through [`FORMATS`]. Orders are always written as YAML.

use crate::error::{common, ErrorCode, Result, TakeawayError};
use crate::order::Order;
use std::fmt;
use std::path::Path;
use tracing::{debug, trace};

/// Supported order file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Json,
}

/// Extension to format dispatch table. New formats are added here.
pub const FORMATS: &[(&str, Format)] = &[
    ("yaml", Format::Yaml),
    ("yml", Format::Yaml),
    ("json", Format::Json),
];

impl Format {
    /// Look up a format by extension (without the leading dot)
    pub fn from_extension(ext: &str) -> Option<Self> {
        FORMATS
            .iter()
            .find(|(candidate, _)| *candidate == ext)
            .map(|(_, format)| *format)
    }

    /// Determine the format of an order file from its path
    pub fn from_path(path: &Path) -> Result<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
            .ok_or_else(|| common::unrecognized_format(path))
    }

    fn decoder(self) -> fn(&[u8]) -> Result<Order> {
        match self {
            Format::Yaml => decode_yaml,
            Format::Json => decode_json,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Yaml => f.write_str("YAML"),
            Format::Json => f.write_str("JSON"),
        }
    }
}

/// Decode an order from `bytes` in the given format
///
/// Unknown fields are ignored and every field is optional.
pub fn decode(bytes: &[u8], format: Format) -> Result<Order> {
    debug!(%format, len = bytes.len(), "decoding order");
    let order = (format.decoder())(bytes)?;
    trace!(?order, "decoded order");
    Ok(order)
}

/// Decode an order read from `path`, picking the format from its extension
///
/// Fails with a format error before parsing anything if the extension is not
/// recognized.
pub fn decode_path(path: &Path, bytes: &[u8]) -> Result<Order> {
    let format = Format::from_path(path)?;
    decode(bytes, format)
}

/// Encode an order as YAML, leaving out unset fields
pub fn encode(order: &Order) -> Result<Vec<u8>> {
    let yaml = serde_yaml::to_string(order).map_err(|e| {
        TakeawayError::persist_with_code(
            ErrorCode::PERSIST_ENCODE_FAILED,
            "failed to marshal order to yml",
            None,
        )
        .with_source(e)
    })?;
    Ok(yaml.into_bytes())
}

fn decode_yaml(bytes: &[u8]) -> Result<Order> {
    // An empty or null document is an empty order, not a parse failure.
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Order::default());
    }
    serde_yaml::from_slice::<Option<Order>>(bytes)
        .map(Option::unwrap_or_default)
        .map_err(|e| {
            TakeawayError::decode_with_code(
                ErrorCode::DECODE_INVALID_YAML,
                "failed to read file contents",
            )
            .with_source(e)
        })
}

fn decode_json(bytes: &[u8]) -> Result<Order> {
    serde_json::from_slice(bytes).map_err(|e| {
        TakeawayError::decode_with_code(
            ErrorCode::DECODE_INVALID_JSON,
            "failed to read file contents",
        )
        .with_source(e)
    })
}
