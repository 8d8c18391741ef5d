use crate::parsing::rope::{lines::LineRef, span::Span};

/// Which section body lines currently belong to.
///
/// Transitions only move forward: source, then rendered, then dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    InSource,
    InRendered,
    InDump,
}

/// Section and separator spans of a spec example body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sections {
    pub source: Span,
    pub rendered_separator: Span,
    pub rendered: Span,
    pub dump_separator: Span,
    pub dump: Span,
}

impl Default for Sections {
    fn default() -> Self {
        Self {
            source: Span::NULL,
            rendered_separator: Span::NULL,
            rendered: Span::NULL,
            dump_separator: Span::NULL,
            dump: Span::NULL,
        }
    }
}

/// Splits body lines on a repeated type-break line.
///
/// The first type-break ends the source section, the second ends the rendered
/// section. From then on the type-break is ordinary dump content.
pub struct SectionSplitter<'a> {
    type_break: &'a str,
    phase: Phase,
    section_start: Option<usize>,
    /// Content end of the last line pushed, line ending excluded.
    previous_content_end: usize,
    out: Sections,
}

impl<'a> SectionSplitter<'a> {
    pub fn new(type_break: &'a str) -> Self {
        Self {
            type_break,
            phase: Phase::InSource,
            section_start: None,
            previous_content_end: 0,
            out: Sections::default(),
        }
    }

    /// Runs the splitter over a whole body.
    pub fn split(type_break: &'a str, body: &[LineRef]) -> Sections {
        let mut splitter = Self::new(type_break);
        let last = body.len().saturating_sub(1);
        for (i, line) in body.iter().enumerate() {
            splitter.push(line, i == last);
        }
        splitter.finish()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// A type-break line has nothing but the marker before its line ending.
    pub fn is_type_break(&self, line: &LineRef) -> bool {
        line.content() == self.type_break
    }

    pub fn push(&mut self, line: &LineRef, is_last: bool) {
        let boundary = self.is_type_break(line) && self.phase != Phase::InDump;

        if boundary {
            let closed = match self.section_start.take() {
                Some(start) => Span::new(start, self.previous_content_end),
                None => Span::NULL,
            };
            let separator = Span::new(line.span.start, line.span.start + self.type_break.len());
            match self.phase {
                Phase::InSource => {
                    self.out.source = closed;
                    self.out.rendered_separator = separator;
                    self.phase = Phase::InRendered;
                }
                Phase::InRendered => {
                    self.out.rendered = closed;
                    self.out.dump_separator = separator;
                    self.phase = Phase::InDump;
                }
                Phase::InDump => {}
            }
            log::trace!("type break at {} moves to {:?}", line.span.start, self.phase);
        } else if self.section_start.is_none() {
            self.section_start = Some(line.span.start);
        }

        self.previous_content_end = line.content_span().end;

        if is_last && let Some(start) = self.section_start.take() {
            let span = Span::new(start, self.previous_content_end);
            match self.phase {
                Phase::InSource => self.out.source = span,
                Phase::InRendered => self.out.rendered = span,
                Phase::InDump => self.out.dump = span,
            }
        }
    }

    pub fn finish(self) -> Sections {
        self.out
    }
}
