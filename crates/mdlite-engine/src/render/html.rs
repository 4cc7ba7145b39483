use crate::parsing::{
    blocks::BlockNode,
    inline::{InlineEvent, parse_inline},
    parse_inline_for_block,
};

/// Renders one classified block as `<tag>inline</tag>`.
pub fn render_block(input: &str, block: &BlockNode, escape: bool) -> String {
    let tag = block.kind.tag();
    let events = parse_inline_for_block(input, block);

    let mut out = String::with_capacity(block.span.len() + 2 * tag.len() + 5);
    push_tag(&mut out, &tag, false);
    push_inline(&mut out, input, &events, escape);
    push_tag(&mut out, &tag, true);
    out
}

/// Renders a standalone inline fragment without any block wrapper.
pub fn render_inline(s: &str, escape: bool) -> String {
    let mut out = String::with_capacity(s.len());
    push_inline(&mut out, s, &parse_inline(0, s), escape);
    out
}

/// Appends the HTML for an inline event stream. Spans index into `input`.
pub fn push_inline(out: &mut String, input: &str, events: &[InlineEvent], escape: bool) {
    for ev in events {
        match *ev {
            InlineEvent::Text(sp) if escape => {
                html_escape::encode_text_to_string(sp.slice(input), out);
            }
            InlineEvent::Text(sp) => out.push_str(sp.slice(input)),
            InlineEvent::Open(kind) => push_tag(out, kind.tag(), false),
            InlineEvent::Close(kind) => push_tag(out, kind.tag(), true),
        }
    }
}

fn push_tag(out: &mut String, tag: &str, closing: bool) {
    out.push('<');
    if closing {
        out.push('/');
    }
    out.push_str(tag);
    out.push('>');
}
