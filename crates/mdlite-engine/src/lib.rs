pub mod options;
pub mod parsing;
pub mod render;


// Re-export key types for easier usage
pub use options::RenderOptions;
pub use parsing::{ParsedDoc, parse_document};
pub use render::{RenderedBlock, group_lists, render, render_with};
