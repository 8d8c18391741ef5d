use xi_rope::Rope;

use crate::parsing::{
    blocks::{BlockNode, kinds::SpecExampleBlock},
    rope::span::Span,
};

/// Validates parser output invariants.
///
/// Asserts that:
/// - All block spans are within rope bounds
/// - Content spans are contained within their block spans
/// - Spec example fields lie inside their block
/// - Spec example sections are strictly ordered and never overlap
/// - A rendered or dump section only exists after its separator
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(rope: &Rope, blocks: &[BlockNode]) {
    let n = rope.len();
    for b in blocks {
        assert!(
            b.span.start <= b.span.end && b.span.end <= n,
            "block span out of bounds: {:?} (rope len: {})",
            b.span,
            n
        );
        assert!(
            b.content_span.start >= b.span.start && b.content_span.end <= b.span.end,
            "content span not contained in block span: content {:?}, block {:?}",
            b.content_span,
            b.span
        );
        if let Some(example) = b.as_spec_example() {
            check_spec_example(example);
        }
    }
}

fn check_spec_example(b: &SpecExampleBlock) {
    let fields = [
        b.opening_delimiter,
        b.example_keyword,
        b.info.coord_open,
        b.info.section,
        b.info.number_separator,
        b.info.number,
        b.info.coord_close,
        b.info.options_keyword,
        b.info.options_open,
        b.info.options_text,
        b.info.options_close,
        b.closing_delimiter,
        b.whole_content,
    ];
    for sp in fields.into_iter().filter_map(Span::present) {
        assert!(
            sp.start <= sp.end && sp.start >= b.span.start && sp.end <= b.span.end,
            "spec example field {sp:?} outside block {:?}",
            b.span
        );
    }

    let children = b.children();
    for pair in children.windows(2) {
        assert!(
            pair[0].span.start < pair[1].span.start && pair[0].span.end <= pair[1].span.start,
            "spec example sections out of order: {:?} then {:?}",
            pair[0],
            pair[1]
        );
    }
    for child in &children {
        assert!(
            child.span.start >= b.whole_content.start && child.span.end <= b.whole_content.end,
            "section {child:?} outside content {:?}",
            b.whole_content
        );
    }

    let s = &b.sections;
    assert!(
        s.rendered.is_null() || s.rendered_separator.is_not_null(),
        "rendered section without separator"
    );
    assert!(
        s.dump.is_null() || s.dump_separator.is_not_null(),
        "dump section without separator"
    );
    assert!(
        s.dump_separator.is_null() || s.rendered_separator.is_not_null(),
        "dump separator without rendered separator"
    );
}
