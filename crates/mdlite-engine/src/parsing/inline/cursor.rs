use unicode_segmentation::UnicodeSegmentation;

/// A cursor for grapheme-by-grapheme inline scanning with position tracking.
///
/// Steps over extended grapheme clusters, so a multi-byte glyph is one scan
/// unit. Positions are absolute byte offsets in the input (via `base`).
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being scanned.
    pub s: &'a str,
    /// Base offset in the input (added to local offsets for absolute positions).
    pub base: usize,
    /// Grapheme clusters of `s` with their local byte offsets.
    graphemes: Vec<(usize, &'a str)>,
    /// Current grapheme index.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `s` with the given base offset.
    pub fn new(s: &'a str, base: usize) -> Self {
        Self {
            s,
            base,
            graphemes: s.grapheme_indices(true).collect(),
            i: 0,
        }
    }

    /// Returns the current absolute byte position.
    pub fn pos(&self) -> usize {
        let local = self
            .graphemes
            .get(self.i)
            .map_or(self.s.len(), |&(offset, _)| offset);
        self.base + local
    }

    /// Returns true if at end of string.
    pub fn eof(&self) -> bool {
        self.i >= self.graphemes.len()
    }

    /// Peeks at the current grapheme without advancing.
    pub fn peek(&self) -> Option<&'a str> {
        self.peek_nth(0)
    }

    /// Peeks `n` graphemes ahead of the current one.
    pub fn peek_nth(&self, n: usize) -> Option<&'a str> {
        self.graphemes.get(self.i + n).map(|&(_, g)| g)
    }

    /// Checks if the remaining graphemes start with `pat`.
    pub fn starts_with(&self, pat: &[&str]) -> bool {
        pat.iter()
            .enumerate()
            .all(|(n, want)| self.peek_nth(n) == Some(*want))
    }

    /// Advances by one grapheme, returning it.
    pub fn bump(&mut self) -> Option<&'a str> {
        let g = self.peek()?;
        self.i += 1;
        Some(g)
    }

    /// Advances by `n` graphemes.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }
}
