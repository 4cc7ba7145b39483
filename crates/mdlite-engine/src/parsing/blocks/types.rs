use crate::parsing::lines::Span;

/// The kind of a block. Every input line produces exactly one block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// A header line (`#`, `##`, ...). The level is the number of markers.
    Header {
        /// Count of leading `#` markers; not capped unless the classifier is.
        level: usize,
    },
    /// A `* ` list item. Grouping into `<ul>` happens after rendering.
    ListItem,
    /// Any other line, including the empty line.
    Paragraph,
}

impl BlockKind {
    /// The HTML element name that wraps this block.
    pub fn tag(self) -> String {
        match self {
            BlockKind::Header { level } => format!("h{level}"),
            BlockKind::ListItem => "li".to_string(),
            BlockKind::Paragraph => "p".to_string(),
        }
    }
}

/// A classified line with its kind and spans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockNode {
    /// Zero-based source line number.
    pub line_index: usize,
    /// The kind of block.
    pub kind: BlockKind,
    /// Full byte span of the line, markers included.
    pub span: Span,
    /// Byte span of the inline content (markers stripped).
    pub content_span: Span,
}
