//! # HTML Rendering
//!
//! Turns the classified block stream into HTML.
//!
//! - **`html`**: per-block wrapping and inline event serialization
//! - **`lists`**: the optional `<ul>` grouping pass over rendered fragments
//!
//! Lines render independently and are joined with no separator.

pub mod html;
pub mod lists;

pub use html::{render_block, render_inline};
pub use lists::{RenderedBlock, group_lists};

use crate::{
    options::RenderOptions,
    parsing::{blocks::MarkdownLineClassifier, parse_document_with},
};

/// Renders `input` to HTML with default options.
///
/// Total over all strings: `render("")` is `<p></p>`. List items are not
/// grouped.
pub fn render(input: &str) -> String {
    render_with(input, &RenderOptions::default())
}

/// Renders `input` to HTML honoring `options`.
pub fn render_with(input: &str, options: &RenderOptions) -> String {
    let classifier = MarkdownLineClassifier::with_max_header_level(options.max_header_level);
    let doc = parse_document_with(input, &classifier);
    log::debug!(
        "rendering {} bytes as {} blocks ({options:?})",
        input.len(),
        doc.blocks.len()
    );

    let fragments = doc.blocks.iter().map(|b| RenderedBlock {
        kind: b.kind,
        html: render_block(input, b, options.escape_html),
    });

    if options.group_lists {
        group_lists(fragments)
    } else {
        fragments.map(|f| f.html).collect()
    }
}
