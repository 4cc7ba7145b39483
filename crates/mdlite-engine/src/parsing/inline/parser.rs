use crate::parsing::lines::Span;

use super::{
    cursor::Cursor,
    kinds::{Em, Strong},
    types::{Emphasis, InlineEvent},
};

/// Scan state of the rewriter. Resets for every line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Normal,
    ItalicOpen,
}

/// Rewrites inline content into a stream of [`InlineEvent`]s.
///
/// # Arguments
/// - `base`: Byte offset in the input where `s` begins (for absolute spans)
/// - `s`: The content to scan, block marker already stripped
///
/// # Rules
/// Evaluated in order at each grapheme position:
/// 1. `__X` outside an open italic span opens bold; `X` is scanned next
/// 2. any other `__` closes bold
/// 3. `_X` opens italic, passes `X` through and enters the italic state
/// 4. in the italic state, `c_` passes `c` through and closes italic
/// 5. a final lone `_` closes italic
/// 6. anything else passes through
///
/// The scan is greedy: nothing looks for a matching closer before opening.
/// Spans still open at the end are force-closed in reverse opening order.
/// Every `_` grapheme is consumed as a delimiter; none reaches the text.
pub fn parse_inline(base: usize, s: &str) -> Vec<InlineEvent> {
    let mut cur = Cursor::new(s, base);
    let mut out = vec![];
    let mut open: Vec<Emphasis> = vec![];
    let mut state = ScanState::Normal;
    let mut text_start = cur.pos();

    // Helper to flush accumulated text as a Text event
    fn flush_text(out: &mut Vec<InlineEvent>, start: usize, end: usize) {
        if end > start {
            out.push(InlineEvent::Text(Span { start, end }));
        }
    }

    while !cur.eof() {
        if cur.starts_with(&Strong::DELIM) {
            flush_text(&mut out, text_start, cur.pos());
            let opens = state == ScanState::Normal && cur.peek_nth(Strong::DELIM.len()).is_some();
            cur.bump_n(Strong::DELIM.len());
            if opens {
                push_open(&mut out, &mut open, Emphasis::Strong);
            } else {
                push_close(&mut out, &mut open, Emphasis::Strong);
            }
            text_start = cur.pos();
            continue;
        }

        if cur.peek() == Some(Em::DELIM) {
            flush_text(&mut out, text_start, cur.pos());
            cur.bump();
            if cur.eof() {
                push_close(&mut out, &mut open, Emphasis::Em);
                text_start = cur.pos();
                break;
            }
            push_open(&mut out, &mut open, Emphasis::Em);
            state = ScanState::ItalicOpen;
            // The grapheme after the delimiter passes through unscanned
            text_start = cur.pos();
            cur.bump();
            continue;
        }

        if state == ScanState::ItalicOpen && cur.peek_nth(1) == Some(Em::DELIM) {
            cur.bump();
            flush_text(&mut out, text_start, cur.pos());
            cur.bump();
            push_close(&mut out, &mut open, Emphasis::Em);
            state = ScanState::Normal;
            text_start = cur.pos();
            continue;
        }

        cur.bump();
    }

    flush_text(&mut out, text_start, cur.pos());

    // Force-close anything still open at end of line
    while let Some(kind) = open.pop() {
        out.push(InlineEvent::Close(kind));
    }
    out
}

fn push_open(out: &mut Vec<InlineEvent>, open: &mut Vec<Emphasis>, kind: Emphasis) {
    open.push(kind);
    out.push(InlineEvent::Open(kind));
}

/// Emits a closer even when nothing of that kind is open.
fn push_close(out: &mut Vec<InlineEvent>, open: &mut Vec<Emphasis>, kind: Emphasis) {
    if let Some(idx) = open.iter().rposition(|&k| k == kind) {
        open.remove(idx);
    }
    out.push(InlineEvent::Close(kind));
}
