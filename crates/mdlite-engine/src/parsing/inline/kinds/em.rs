pub struct Em;

impl Em {
    pub const DELIM: &'static str = "_";
    pub const TAG: &'static str = "em";
}
