//! Canonical binary encoding of IR values.
//!
//! The encoding is `bincode` over the serde-derived schema. It has no maps
//! and no unordered fields, so structurally identical trees always encode
//! to identical bytes. Tracing relies on this: the bytes are the dedup key.

use crate::error::{internal, Result};
use crate::value::Value;

impl Value {
    /// Encode to canonical bytes.
    pub fn encode(&self) -> Result<Vec<u8>> {
        let bytes = bincode::serialize(self)
            .map_err(|e| internal(format!("failed to encode IR value: {e}")))?;
        tracing::trace!(len = bytes.len(), "encoded IR value");
        Ok(bytes)
    }

    /// Decode bytes produced by [`Value::encode`].
    pub fn decode(bytes: &[u8]) -> Result<Value> {
        bincode::deserialize(bytes).map_err(|e| internal(format!("failed to decode IR value: {e}")))
    }
}
