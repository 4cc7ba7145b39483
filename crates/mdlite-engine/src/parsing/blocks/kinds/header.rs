use unicode_segmentation::UnicodeSegmentation;

/// Header block type with owned delimiter constants.
pub struct Header;

impl Header {
    /// The grapheme that opens a header line and is counted for its level.
    pub const MARKER: &'static str = "#";
    /// A single separator allowed after each marker; swallowed, never counted.
    pub const SEPARATOR: &'static str = " ";

    /// Counts the header level of `text`.
    ///
    /// Consumes consecutive markers, each optionally followed by one
    /// separator, and stops at the first other grapheme. Returns the level and
    /// the byte offset where the header content starts, or `None` when the
    /// line does not begin with a marker.
    ///
    /// The level is not capped: ten markers give level 10.
    pub fn count_level(text: &str) -> Option<(usize, usize)> {
        let mut graphemes = text.grapheme_indices(true).peekable();
        let mut level = 0;
        let mut content_start = 0;

        while let Some((idx, g)) = graphemes.next_if(|&(_, g)| g == Self::MARKER) {
            level += 1;
            content_start = idx + g.len();
            if let Some((sep_idx, sep)) = graphemes.next_if(|&(_, g)| g == Self::SEPARATOR) {
                content_start = sep_idx + sep.len();
            }
        }

        (level > 0).then_some((level, content_start))
    }
}
