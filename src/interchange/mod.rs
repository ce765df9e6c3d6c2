//! Definition interchange formats.
//!
//! - **WebIDL** - text, through the crate's own parser and writer
//! - **JSON** - the definition tree as serde JSON, for tools that want the
//!   structure without parsing WebIDL
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐
//! │  .idl file   │     │  .json file  │
//! └──────┬───────┘     └──────┬───────┘
//!        ▼                    ▼
//! ┌──────────────────────────────────────────────┐
//! │            DefinitionFormat trait            │
//! │  - read(&[u8]) -> Result<Vec<Definition>>    │
//! │  - write(&[Definition]) -> Result<Vec<u8>>   │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! Read JSON feeds straight into the pipeline as `Input::Parsed`.

mod format;
mod json;

pub use format::{DefinitionFormat, WebIdl, format_for_path};
pub use json::{Json, from_json, to_json};
