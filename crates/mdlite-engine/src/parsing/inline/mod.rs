//! # Inline Parsing
//!
//! Cursor-based emphasis rewriting over the content of one block.
//!
//! ## Architecture
//!
//! Inline parsing is separate from line classification and runs over the
//! content span of every block (headers, list items, paragraphs alike).
//!
//! The rewriter is a single left-to-right pass with one bit of scan state
//! (italic open or not). It emits a flat stream of `InlineEvent`s: text spans
//! interleaved with open/close insertion points.
//!
//! ## Modules
//!
//! - **`types`**: `InlineEvent` and `Emphasis`
//! - **`kinds`**: Inline-specific types with owned delimiters (Strong, Em)
//! - **`cursor`**: `Cursor` for grapheme-by-grapheme scanning with position tracking
//! - **`parser`**: `parse_inline()` state machine
//!
//! ## Delimiter Precedence
//!
//! Bold is checked first: `__text__` is a bold span, never two italic opens.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::parse_inline;
pub use types::{Emphasis, InlineEvent};
