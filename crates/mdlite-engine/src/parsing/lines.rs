/// A byte range `[start, end)` into the input text.
///
/// Block and inline nodes store spans rather than copied text; slicing the
/// input with any span reproduces the exact source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    /// Returns the length in bytes. Uses saturating subtraction.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty (start >= end).
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Slices `text` with this span.
    pub fn slice(self, text: &str) -> &str {
        &text[self.start..self.end]
    }
}

/// A reference to a single line of the input with its byte span.
#[derive(Debug, Clone, Copy)]
pub struct LineRef<'a> {
    /// Zero-based line number.
    pub index: usize,
    /// Byte span of this line in the input, excluding the `\n` separator.
    pub span: Span,
    /// The line text.
    pub text: &'a str,
}

/// Returns an iterator over the lines of `input` with their byte spans.
///
/// Splits on `\n` only. The empty input yields a single empty line, and a
/// trailing newline yields a trailing empty line.
pub fn lines_with_spans(input: &str) -> impl Iterator<Item = LineRef<'_>> + '_ {
    let mut offset = 0usize;
    input.split('\n').enumerate().map(move |(index, text)| {
        let start = offset;
        offset += text.len() + 1;
        LineRef {
            index,
            span: Span {
                start,
                end: start + text.len(),
            },
            text,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_one_empty_line() {
        let lines: Vec<_> = lines_with_spans("").collect();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text, "");
        assert!(lines[0].span.is_empty());
    }

    #[test]
    fn spans_exclude_newlines() {
        let input = "# a\n* b\nc";
        let lines: Vec<_> = lines_with_spans(input).collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1].span, Span { start: 4, end: 7 });
        assert_eq!(lines[1].span.slice(input), "* b");
        assert_eq!(lines[2].index, 2);
        assert_eq!(lines[2].span.slice(input), "c");
    }

    #[test]
    fn trailing_newline_yields_empty_line() {
        let lines: Vec<_> = lines_with_spans("a\n").collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].text, "");
        assert_eq!(lines[1].span, Span { start: 2, end: 2 });
    }

    #[test]
    fn carriage_returns_stay_in_line_text() {
        let lines: Vec<_> = lines_with_spans("a\r\nb").collect();
        assert_eq!(lines[0].text, "a\r");
    }

    #[test]
    fn span_len_saturates() {
        let sp = Span { start: 5, end: 2 };
        assert_eq!(sp.len(), 0);
        assert!(sp.is_empty());
    }
}
