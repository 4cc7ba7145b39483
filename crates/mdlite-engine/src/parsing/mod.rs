pub mod blocks;
pub mod inline;
pub mod lines;

use blocks::{BlockNode, MarkdownLineClassifier};
use lines::lines_with_spans;

#[derive(Debug)]
pub struct ParsedDoc {
    pub blocks: Vec<BlockNode>,
}

/// Classifies every line of `input` with an uncapped classifier.
pub fn parse_document(input: &str) -> ParsedDoc {
    parse_document_with(input, &MarkdownLineClassifier::new())
}

pub fn parse_document_with(input: &str, classifier: &MarkdownLineClassifier) -> ParsedDoc {
    ParsedDoc {
        blocks: lines_with_spans(input)
            .map(|lr| classifier.classify(&lr))
            .collect(),
    }
}

/// Convenience: inline parse for a given block node.
pub fn parse_inline_for_block(input: &str, b: &BlockNode) -> Vec<inline::InlineEvent> {
    inline::parse_inline(b.content_span.start, b.content_span.slice(input))
}
