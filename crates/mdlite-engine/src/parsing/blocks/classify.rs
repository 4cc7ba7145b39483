use crate::parsing::lines::{LineRef, Span};

use super::{
    kinds::{Header, ListItem},
    types::{BlockKind, BlockNode},
};

/// Classifies individual lines into blocks.
///
/// Each line is classified independently without reference to surrounding
/// lines: header first, then list item, then paragraph.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownLineClassifier {
    /// Highest header level accepted; deeper headers fall back to paragraphs.
    max_header_level: Option<usize>,
}

impl MarkdownLineClassifier {
    /// Creates a classifier with uncapped header levels.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a classifier that treats headers deeper than `max` as
    /// paragraphs. `None` leaves the level uncapped.
    pub fn with_max_header_level(max: Option<usize>) -> Self {
        Self {
            max_header_level: max,
        }
    }

    /// Classifies a line into a [`BlockNode`].
    pub fn classify(&self, lr: &LineRef) -> BlockNode {
        let (kind, content_offset) = self.kind_of(lr.text);
        log::trace!("line {}: {kind:?}", lr.index);

        BlockNode {
            line_index: lr.index,
            kind,
            span: lr.span,
            content_span: Span {
                start: lr.span.start + content_offset,
                end: lr.span.end,
            },
        }
    }

    fn kind_of(&self, text: &str) -> (BlockKind, usize) {
        if let Some((level, start)) = Header::count_level(text) {
            if self.max_header_level.is_none_or(|max| level <= max) {
                return (BlockKind::Header { level }, start);
            }
            return (BlockKind::Paragraph, 0);
        }
        if let Some(start) = ListItem::content_start(text) {
            return (BlockKind::ListItem, start);
        }
        (BlockKind::Paragraph, 0)
    }
}
