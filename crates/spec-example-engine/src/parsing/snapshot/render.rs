use xi_rope::Rope;

use crate::parsing::{
    blocks::{
        BlockKind, BlockNode,
        kinds::{SpecExampleBlock, spec_example::SectionKind},
    },
    rope::{slice::preview, span::Span},
};

const PREVIEW_LEN: usize = 60;

/// Renders parsed blocks as an indented tree with spans and text previews.
///
/// One line per node or populated field; null fields are omitted.
pub fn render_ast(rope: &Rope, blocks: &[BlockNode]) -> String {
    let mut out = String::new();
    for b in blocks {
        match &b.kind {
            BlockKind::Paragraph => line(&mut out, 0, "Paragraph", b.span, Some(rope)),
            BlockKind::FencedCode { kind } => {
                line(&mut out, 0, &format!("FencedCode({kind:?})"), b.span, None)
            }
            BlockKind::SpecExample(example) => render_spec_example(&mut out, rope, example),
        }
    }
    out
}

/// Renders a single spec example.
pub fn render_spec_example(out: &mut String, rope: &Rope, b: &SpecExampleBlock) {
    line(out, 0, "SpecExample", b.span, None);

    let fields = [
        ("opening_delimiter", b.opening_delimiter),
        ("example_keyword", b.example_keyword),
        ("coord_open", b.info.coord_open),
        ("section", b.info.section),
        ("number_separator", b.info.number_separator),
        ("number", b.info.number),
        ("coord_close", b.info.coord_close),
        ("options_keyword", b.info.options_keyword),
        ("options_open", b.info.options_open),
        ("options", b.info.options_text),
        ("options_close", b.info.options_close),
        ("closing_delimiter", b.closing_delimiter),
    ];
    for (name, sp) in fields {
        if sp.is_not_null() {
            line(out, 1, name, sp, Some(rope));
        }
    }
    line(out, 1, "whole_content", b.whole_content, None);

    for child in b.children() {
        let name = match child.kind {
            SectionKind::Source => "Source",
            SectionKind::Separator => "Separator",
            SectionKind::Rendered => "Rendered",
            SectionKind::Dump => "Dump",
        };
        line(out, 1, name, child.span, Some(rope));
    }
}

fn line(out: &mut String, depth: usize, name: &str, sp: Span, text: Option<&Rope>) {
    let indent = "  ".repeat(depth);
    let rendered = match text {
        Some(rope) => format!(
            "{indent}{name} {sp:?} {:?}\n",
            preview(rope, sp, PREVIEW_LEN)
        ),
        None => format!("{indent}{name} {sp:?}\n"),
    };
    out.push_str(&rendered);
}
