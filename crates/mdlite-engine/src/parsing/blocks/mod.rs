//! # Block Parsing
//!
//! Line classification: every input line becomes exactly one block.
//!
//! ## Modules
//!
//! - **`types`**: Core types (`BlockNode`, `BlockKind`)
//! - **`kinds`**: Block-specific types with owned markers (Header, ListItem)
//! - **`classify`**: `MarkdownLineClassifier` produces a `BlockNode` for each line
//!
//! ## Key Invariants
//!
//! - No cross-line state: a line's block depends on that line only
//! - Header is checked before list item, list item before paragraph
//! - All block nodes store byte spans into the input

pub mod classify;
pub mod kinds;
pub mod types;

pub use classify::MarkdownLineClassifier;
pub use types::{BlockKind, BlockNode};
