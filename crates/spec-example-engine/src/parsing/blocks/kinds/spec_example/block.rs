use xi_rope::Rope;

use crate::parsing::rope::{slice::slice_present, span::Span};

use super::{info_line::InfoFields, sections::Sections};

/// Kind of a child node of a spec example.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Source,
    Separator,
    Rendered,
    Dump,
}

/// A child node: one populated section or separator span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionNode {
    pub kind: SectionKind,
    pub span: Span,
}

/// A closed spec example block.
///
/// Built once when the block closes and never mutated afterwards. Every field
/// is a span into the parsed document; unmatched fields are [`Span::NULL`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecExampleBlock {
    /// From the opening line's start to the end of the closing line, or to the
    /// end of the last line when input ran out.
    pub span: Span,
    pub opening_delimiter: Span,
    pub example_keyword: Span,
    pub info: InfoFields,
    pub closing_delimiter: Span,
    /// Everything between the info line and the closing line.
    pub whole_content: Span,
    pub sections: Sections,
}

/// The `section:number` pair naming an example.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coordinate {
    pub section: Option<String>,
    pub number: Option<String>,
}

impl Sections {
    /// Child nodes in document order, one per populated span.
    pub fn nodes(&self) -> Vec<SectionNode> {
        [
            (SectionKind::Source, self.source),
            (SectionKind::Separator, self.rendered_separator),
            (SectionKind::Rendered, self.rendered),
            (SectionKind::Separator, self.dump_separator),
            (SectionKind::Dump, self.dump),
        ]
        .into_iter()
        .filter(|(_, span)| span.is_not_null())
        .map(|(kind, span)| SectionNode { kind, span })
        .collect()
    }
}

impl SpecExampleBlock {
    pub fn children(&self) -> Vec<SectionNode> {
        self.sections.nodes()
    }

    pub fn is_closed_by_delimiter(&self) -> bool {
        self.closing_delimiter.is_not_null()
    }

    pub fn source_text(&self, rope: &Rope) -> Option<String> {
        slice_present(rope, self.sections.source)
    }

    pub fn rendered_text(&self, rope: &Rope) -> Option<String> {
        slice_present(rope, self.sections.rendered)
    }

    pub fn dump_text(&self, rope: &Rope) -> Option<String> {
        slice_present(rope, self.sections.dump)
    }

    pub fn section(&self, rope: &Rope) -> Option<String> {
        slice_present(rope, self.info.section)
    }

    pub fn number(&self, rope: &Rope) -> Option<String> {
        slice_present(rope, self.info.number)
    }

    pub fn options(&self, rope: &Rope) -> Option<String> {
        slice_present(rope, self.info.options_text)
    }

    /// Individual options, split on commas and whitespace.
    pub fn option_list(&self, rope: &Rope) -> Vec<String> {
        self.options(rope)
            .map(|text| {
                text.split(|c: char| c == ',' || c.is_whitespace())
                    .filter(|opt| !opt.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// The example's coordinate, if either part is present.
    pub fn coordinate(&self, rope: &Rope) -> Option<Coordinate> {
        let section = self.section(rope);
        let number = self.number(rope);
        if section.is_none() && number.is_none() {
            return None;
        }
        Some(Coordinate { section, number })
    }
}
