//! JSON serialization of tree stages
//!
//! Every tree type in the crate derives `Serialize`, so any stage can be
//! dumped for inspection or snapshotting.

use serde::Serialize;

/// Pretty-printed JSON for any serializable tree value.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}
