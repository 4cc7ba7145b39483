use unicode_segmentation::UnicodeSegmentation;

/// List item block type with owned delimiter constants.
pub struct ListItem;

impl ListItem {
    /// The bullet grapheme.
    pub const BULLET: &'static str = "*";
    /// The separator that must follow the bullet.
    pub const SEPARATOR: &'static str = " ";

    /// Returns the byte offset of the item content if `text` starts with the
    /// `* ` marker.
    pub fn content_start(text: &str) -> Option<usize> {
        let mut graphemes = text.graphemes(true);
        if graphemes.next() == Some(Self::BULLET) && graphemes.next() == Some(Self::SEPARATOR) {
            Some(Self::BULLET.len() + Self::SEPARATOR.len())
        } else {
            None
        }
    }
}
