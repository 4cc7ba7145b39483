//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`Strong`**: `DELIM = ["_", "_"]`, rendered as `<strong>`
//! - **`Em`**: `DELIM = "_"`, rendered as `<em>`
//!
//! ## Design Principle
//!
//! All delimiter constants live here, not scattered in parser code.
//! The parser calls these constants; it never hardcodes `_` or `__`.

pub mod em;
pub mod strong;

pub use em::Em;
pub use strong::Strong;
