use crate::parsing::blocks::BlockKind;

const LIST_OPEN: &str = "<ul>";
const LIST_CLOSE: &str = "</ul>";

/// A rendered block fragment tagged with the kind of block it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedBlock {
    pub kind: BlockKind,
    pub html: String,
}

/// Concatenates fragments, wrapping every maximal run of list items in
/// `<ul>...</ul>`. Fragment content is never altered.
pub fn group_lists<I>(fragments: I) -> String
where
    I: IntoIterator<Item = RenderedBlock>,
{
    let mut out = String::new();
    let mut in_list = false;

    for fragment in fragments {
        let is_item = fragment.kind == BlockKind::ListItem;
        if is_item && !in_list {
            out.push_str(LIST_OPEN);
        } else if !is_item && in_list {
            out.push_str(LIST_CLOSE);
        }
        in_list = is_item;
        out.push_str(&fragment.html);
    }

    if in_list {
        out.push_str(LIST_CLOSE);
    }
    out
}
