use serde::{Deserialize, Serialize};

/// Knobs for [`render_with`](crate::render_with).
///
/// The default reproduces plain [`render`](crate::render): no list grouping,
/// no escaping, uncapped header levels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Wrap runs of consecutive list items in `<ul>...</ul>`.
    pub group_lists: bool,
    /// Escape `&`, `<` and `>` in text passed through from the input.
    pub escape_html: bool,
    /// Deepest header level; deeper `#` runs render as paragraphs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_header_level: Option<usize>,
}
