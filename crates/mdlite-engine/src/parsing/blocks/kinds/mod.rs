//! # Block Kinds
//!
//! Block-specific types that own their line markers.
//!
//! - **`Header`**: `MARKER = "#"`, `SEPARATOR = " "`, plus the level counter
//! - **`ListItem`**: `BULLET = "*"`, `SEPARATOR = " "`
//!
//! Paragraphs have no marker and need no type here. The classifier calls
//! these constants; it never hardcodes `#` or `* `.

pub mod header;
pub mod list_item;

pub use header::Header;
pub use list_item::ListItem;
