use xi_rope::Rope;

use super::span::Span;

/// Extracts the text for a span from the rope as an owned String.
///
/// A null span slices to the empty string; use [`slice_present`] when absence
/// matters.
pub fn slice_to_string(rope: &Rope, sp: Span) -> String {
    match sp.present() {
        Some(sp) => rope.slice_to_cow(sp.start..sp.end).into_owned(),
        None => String::new(),
    }
}

/// Extracts the text for a span, or `None` for [`Span::NULL`].
pub fn slice_present(rope: &Rope, sp: Span) -> Option<String> {
    sp.present()
        .map(|sp| rope.slice_to_cow(sp.start..sp.end).into_owned())
}

/// Extracts text for a span, truncating to `max` bytes with "..." suffix if needed.
///
/// Truncation backs off to the nearest char boundary.
pub fn preview(rope: &Rope, sp: Span, max: usize) -> String {
    let mut s = slice_to_string(rope, sp);
    if s.len() > max {
        let mut cut = max;
        while !s.is_char_boundary(cut) {
            cut -= 1;
        }
        s.truncate(cut);
        s.push_str("...");
    }
    s
}
