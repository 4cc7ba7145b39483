/// Bold span inline type with owned delimiter constants.
///
/// Bold is checked before italic at every scan position, so `__` never
/// reads as two italic openers.
pub struct Strong;

impl Strong {
    /// The two-grapheme delimiter run.
    pub const DELIM: [&'static str; 2] = ["_", "_"];
    /// The HTML element name.
    pub const TAG: &'static str = "strong";
}
