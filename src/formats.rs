//! Output formats for inspecting trees
//!
//! Two formats, both read-only views used by tooling and tests:
//!
//! - `treeviz` - a one-line-per-node indented rendering of block trees,
//!   for quick visual scanning
//! - `json` - serde_json serialization of any tree stage

pub mod json;
pub mod treeviz;

pub use json::to_json;
pub use treeviz::to_treeviz_str;
