use crate::parsing::lines::Span;

use super::kinds::{Em, Strong};

/// The two emphasis flavors the rewriter knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    /// `__text__`, rendered as `<strong>`.
    Strong,
    /// `_text_`, rendered as `<em>`.
    Em,
}

impl Emphasis {
    /// The HTML element name for this emphasis.
    pub fn tag(self) -> &'static str {
        match self {
            Emphasis::Strong => Strong::TAG,
            Emphasis::Em => Em::TAG,
        }
    }
}

/// One step of the rewritten inline stream.
///
/// An emphasis span is never a node of its own: it is the pair of `Open` and
/// `Close` insertion points around the text between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineEvent {
    /// Text passed through unchanged, as a byte span into the input.
    Text(Span),
    /// An opening tag insertion point.
    Open(Emphasis),
    /// A closing tag insertion point.
    Close(Emphasis),
}
