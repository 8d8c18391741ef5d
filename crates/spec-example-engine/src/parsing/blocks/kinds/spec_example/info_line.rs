//! Info line grammar for spec examples.
//!
//! The tail is everything after the example keyword on the opening line:
//!
//! ```text
//! tail           := [coord] [options-clause]
//! coord          := ["("] section [":" number] [")"]
//! section        := any run of characters excluding ':'
//! number         := any run of non-space characters
//! options-clause := <options keyword> ["("] options-body [")"]
//! options-body   := any run of characters excluding ')'
//! ```
//!
//! Every element is optional. Elements that trim to nothing are left null, and
//! a tail that does not fit the grammar leaves every field null.

use crate::parsing::{
    cursor::{Cursor, is_blank_char},
    rope::span::Span,
};

/// Coordinate and options metadata decoded from an info line tail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfoFields {
    pub coord_open: Span,
    pub section: Span,
    pub number_separator: Span,
    pub number: Span,
    pub coord_close: Span,
    pub options_keyword: Span,
    pub options_open: Span,
    pub options_text: Span,
    pub options_close: Span,
}

impl Default for InfoFields {
    fn default() -> Self {
        Self {
            coord_open: Span::NULL,
            section: Span::NULL,
            number_separator: Span::NULL,
            number: Span::NULL,
            coord_close: Span::NULL,
            options_keyword: Span::NULL,
            options_open: Span::NULL,
            options_text: Span::NULL,
            options_close: Span::NULL,
        }
    }
}

impl InfoFields {
    /// True when no coordinate or options element was recognised.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Parses `tail`, which starts at document offset `base`.
pub fn parse_info_tail(tail: &str, base: usize, options_keyword: &str) -> InfoFields {
    match parse(tail, base, options_keyword) {
        Some(fields) => fields,
        None => {
            log::debug!("info line tail {tail:?} at {base} does not match, metadata left empty");
            InfoFields::default()
        }
    }
}

fn parse(tail: &str, base: usize, options_keyword: &str) -> Option<InfoFields> {
    let mut fields = InfoFields::default();
    let clause = find_options_keyword(tail, options_keyword);

    let coord_end = clause.unwrap_or(tail.len());
    parse_coord(&tail[..coord_end], base, &mut fields)?;

    if let Some(at) = clause {
        parse_options_clause(&tail[at..], base + at, options_keyword, &mut fields)?;
    }
    Some(fields)
}

/// First occurrence of the keyword standing as a word of its own.
///
/// It may directly follow the coordinate's closing `)`.
fn find_options_keyword(tail: &str, keyword: &str) -> Option<usize> {
    if keyword.is_empty() {
        return None;
    }
    tail.match_indices(keyword).map(|(at, _)| at).find(|&at| {
        let before = tail[..at].chars().next_back();
        let after = tail[at + keyword.len()..].chars().next();
        before.is_none_or(|c| c == ')' || is_blank_char(c))
            && after.is_none_or(|c| c == '(' || is_blank_char(c))
    })
}

fn parse_coord(region: &str, base: usize, fields: &mut InfoFields) -> Option<()> {
    let hi = region.trim_end_matches(is_blank_char).len();
    let mut cur = Cursor::new(region, base);
    cur.skip_blanks();
    if cur.i >= hi {
        return Some(());
    }

    let open_at = cur.i;
    if cur.eat('(') {
        fields.coord_open = cur.span(open_at, open_at + 1);
    }

    let mut inner_end = hi;
    if inner_end > cur.i && region[..inner_end].ends_with(')') {
        inner_end -= 1;
        fields.coord_close = cur.span(inner_end, hi);
    }

    let mut cur = Cursor {
        s: &region[..inner_end],
        base,
        i: cur.i,
    };
    let (start, end) = cur.take_while(|c| c != ':');
    fields.section = trimmed(&cur, start, end);

    if cur.eat(':') {
        fields.number_separator = cur.span(end, end + 1);
        cur.skip_blanks();
        let (start, end) = cur.take_while(|c| !is_blank_char(c));
        cur.skip_blanks();
        if !cur.eof() {
            // a number cannot contain spaces
            return None;
        }
        if end > start {
            fields.number = cur.span(start, end);
        }
    }
    Some(())
}

fn parse_options_clause(
    clause: &str,
    base: usize,
    keyword: &str,
    fields: &mut InfoFields,
) -> Option<()> {
    let mut cur = Cursor::new(clause, base);
    cur.bump_n(keyword.len());
    fields.options_keyword = cur.span(0, keyword.len());
    cur.skip_blanks();

    let open_at = cur.i;
    if cur.eat('(') {
        fields.options_open = cur.span(open_at, open_at + 1);
    }

    let (start, end) = cur.take_while(|c| c != ')');
    fields.options_text = trimmed(&cur, start, end);

    if cur.eat(')') {
        fields.options_close = cur.span(end, end + 1);
    }
    cur.skip_blanks();
    cur.eof().then_some(())
}

/// Absolute span of `cur.s[start..end]` without surrounding blanks, or null if blank.
fn trimmed(cur: &Cursor<'_>, start: usize, end: usize) -> Span {
    let text = &cur.s[start..end];
    let body = text.trim_matches(is_blank_char);
    if body.is_empty() {
        return Span::NULL;
    }
    let lead = text.len() - text.trim_start_matches(is_blank_char).len();
    cur.span(start + lead, start + lead + body.len())
}
