//! Serialization layer. Defaults to JSON via serde_json.
//!
//! Implement [`Serializer`] if you need a different format.

use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Converts record collections to/from bytes for persistence.
pub trait Serializer: Send + Sync {
    /// Encode a collection to bytes.
    fn serialize<R: Serialize>(&self, records: &[R]) -> Result<Vec<u8>>;

    /// Decode bytes back into a collection, preserving order.
    fn deserialize<R: DeserializeOwned>(&self, bytes: &[u8]) -> Result<Vec<R>>;
}

/// JSON serializer with optional pretty-printing.
///
/// Decoding accepts either an array of records or a single bare record, which
/// comes back as a one-element collection.
#[derive(Debug, Clone, Default)]
pub struct JsonSerializer {
    pretty: bool,
}

impl JsonSerializer {
    /// Compact JSON (single line, no extra whitespace).
    pub fn new() -> Self {
        Self::default()
    }

    /// Pretty-printed JSON with indentation, easier to read by hand.
    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    /// `true` if this serializer indents its output.
    pub fn is_pretty(&self) -> bool {
        self.pretty
    }
}

impl Serializer for JsonSerializer {
    fn serialize<R: Serialize>(&self, records: &[R]) -> Result<Vec<u8>> {
        let bytes = if self.pretty {
            serde_json::to_vec_pretty(records)
        } else {
            serde_json::to_vec(records)
        };
        bytes.map_err(|e| Error::Serialize(e.to_string()))
    }

    fn deserialize<R: DeserializeOwned>(&self, bytes: &[u8]) -> Result<Vec<R>> {
        let value: serde_json::Value = serde_json::from_slice(bytes)?;
        let records = match value {
            serde_json::Value::Array(_) => Vec::<R>::deserialize(value),
            // a lone record object stands for a one-element collection
            other => R::deserialize(other).map(|r| vec![r]),
        };
        records.map_err(|e| Error::Deserialize(e.to_string()))
    }
}
