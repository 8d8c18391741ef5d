use crate::parsing::{
    cursor::is_blank_char,
    rope::{lines::LineRef, span::Span},
};

use super::{
    block::SpecExampleBlock,
    info_line::{InfoFields, parse_info_tail},
    options::SpecExampleOptions,
    sections::{SectionSplitter, Sections},
};

/// Outcome of offering a line to an open block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockContinue {
    /// The line belongs to the block.
    Continue,
    /// The line closed the block and is consumed by it.
    Finished,
}

/// Accumulates the lines of one open spec example.
///
/// Created by [`SpecExampleParser::try_start`] and consumed by
/// [`SpecExampleParser::close`], so a block can only be closed once:
///
/// ```compile_fail
/// use spec_example_engine::parsing::blocks::kinds::spec_example::{
///     SpecExampleOptions, SpecExampleParser,
/// };
/// use spec_example_engine::parsing::rope::{LineRef, Span};
///
/// let options = SpecExampleOptions::with_example_break("~~~");
/// let line = LineRef { span: Span::new(0, 11), text: "~~~example\n".to_string() };
/// let parser = SpecExampleParser::try_start(&line, 0, &options).unwrap();
/// let first = parser.close();
/// let second = parser.close();
/// ```
#[derive(Debug, Clone)]
pub struct SpecExampleParser {
    options: SpecExampleOptions,
    opening: LineRef,
    keyword: Span,
    body: Vec<LineRef>,
    closing: Option<LineRef>,
}

impl SpecExampleParser {
    /// Opens a block if `line` starts one.
    ///
    /// The line must start at column 0 with the example break, followed by the
    /// keyword (optionally after one space, tab or non-breaking space), and the
    /// keyword must end the line or be followed by whitespace.
    pub fn try_start(line: &LineRef, column: usize, options: &SpecExampleOptions) -> Option<Self> {
        if column != 0 || options.example_break.is_empty() {
            return None;
        }
        let keyword = Self::match_opening(line.content(), options)?;
        log::debug!("spec example opens at {}", line.span.start);
        Some(Self {
            options: options.clone(),
            opening: line.clone(),
            keyword: line.span.sub(keyword.0, keyword.1),
            body: vec![],
            closing: None,
        })
    }

    /// Local byte range of the keyword on an opening line.
    fn match_opening(text: &str, options: &SpecExampleOptions) -> Option<(usize, usize)> {
        let rest = text.strip_prefix(options.example_break.as_str())?;
        let gap = match rest.chars().next() {
            Some(c) if is_blank_char(c) => c.len_utf8(),
            _ => 0,
        };
        let after = rest[gap..].strip_prefix(options.example_keyword.as_str())?;
        if !after.chars().next().is_none_or(is_blank_char) {
            return None;
        }
        let start = options.example_break.len() + gap;
        Some((start, start + options.example_keyword.len()))
    }

    /// Decides whether `line` still belongs to the block.
    ///
    /// Only a line equal to the example break ends the block; it is recorded
    /// as the closing line and kept out of the body.
    pub fn try_continue(&mut self, line: &LineRef) -> BlockContinue {
        if line.content() == self.options.example_break {
            self.closing = Some(line.clone());
            return BlockContinue::Finished;
        }
        BlockContinue::Continue
    }

    pub fn add_line(&mut self, line: LineRef) {
        self.body.push(line);
    }

    /// Parses the info line and the body into the finished block.
    pub fn close(self) -> SpecExampleBlock {
        let tail_start = self.keyword.end - self.opening.span.start;
        let tail = &self.opening.content()[tail_start..];
        let info = parse_info_tail(tail, self.keyword.end, &self.options.options_keyword);
        let sections = SectionSplitter::split(&self.options.type_break, &self.body);

        let block = BlockAssembler {
            opening: &self.opening,
            keyword: self.keyword,
            info,
            body: &self.body,
            sections,
            closing: self.closing.as_ref(),
            break_len: self.options.example_break.len(),
        }
        .build();

        log::debug!(
            "spec example {:?} closed with {} body lines, {} sections",
            block.span,
            self.body.len(),
            block.children().len()
        );
        block
    }
}

/// Collects the pieces of a closing block; discarded once built.
struct BlockAssembler<'a> {
    opening: &'a LineRef,
    keyword: Span,
    info: InfoFields,
    body: &'a [LineRef],
    sections: Sections,
    closing: Option<&'a LineRef>,
    break_len: usize,
}

impl BlockAssembler<'_> {
    fn build(self) -> SpecExampleBlock {
        let content_start = self.opening.span.end;
        let content_end = self.body.last().map_or(content_start, |l| l.span.end);
        let end = self.closing.map_or(content_end, |l| l.span.end);

        SpecExampleBlock {
            span: Span::new(self.opening.span.start, end),
            opening_delimiter: self.opening.span.sub(0, self.break_len),
            example_keyword: self.keyword,
            info: self.info,
            closing_delimiter: self
                .closing
                .map_or(Span::NULL, |l| l.span.sub(0, self.break_len)),
            whole_content: Span::new(content_start, content_end),
            sections: self.sections,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::rope::lines_with_spans;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use xi_rope::Rope;

    fn tilde() -> SpecExampleOptions {
        SpecExampleOptions::with_example_break("~~~")
    }

    fn line(text: &str) -> LineRef {
        LineRef {
            span: Span::new(0, text.len()),
            text: text.to_string(),
        }
    }

    /// Feeds a document that starts with a block and closes it.
    fn run(doc: &str) -> (Rope, SpecExampleBlock) {
        let rope = Rope::from(doc);
        let mut lines = lines_with_spans(&rope);
        let first = lines.next().expect("opening line");
        let mut parser = SpecExampleParser::try_start(&first, 0, &tilde()).expect("block start");
        for l in lines {
            if parser.try_continue(&l) == BlockContinue::Finished {
                break;
            }
            parser.add_line(l);
        }
        let block = parser.close();
        (rope, block)
    }

    fn slice(rope: &Rope, sp: Span) -> String {
        rope.slice_to_cow(sp.start..sp.end).into_owned()
    }

    #[rstest]
    #[case::bare("~~~example\n")]
    #[case::no_line_ending("~~~example")]
    #[case::with_tail("~~~example (1:2)\n")]
    #[case::tab_after_keyword("~~~example\t(x)\n")]
    #[case::nbsp_after_keyword("~~~example\u{a0}(x)\n")]
    #[case::space_before_keyword("~~~ example\n")]
    fn start_accepted(#[case] text: &str) {
        assert!(SpecExampleParser::try_start(&line(text), 0, &tilde()).is_some());
    }

    #[rstest]
    #[case::keyword_runs_on("~~~examples\n")]
    #[case::keyword_glued_to_paren("~~~example(1)\n")]
    #[case::no_keyword("~~~\n")]
    #[case::other_text("~~~rust\n")]
    #[case::two_spaces("~~~  example\n")]
    #[case::indented(" ~~~example\n")]
    fn start_rejected(#[case] text: &str) {
        assert!(SpecExampleParser::try_start(&line(text), 0, &tilde()).is_none());
    }

    #[test]
    fn start_rejected_away_from_first_column() {
        assert!(SpecExampleParser::try_start(&line("~~~example\n"), 2, &tilde()).is_none());
    }

    #[test]
    fn keyword_span_accounts_for_gap() {
        let p = SpecExampleParser::try_start(&line("~~~ example\n"), 0, &tilde()).unwrap();
        assert_eq!(p.keyword, Span::new(4, 11));
    }

    #[test]
    fn default_options_open_on_32_backticks() {
        let text = format!("{} example\n", "`".repeat(32));
        let options = SpecExampleOptions::default();
        assert!(SpecExampleParser::try_start(&line(&text), 0, &options).is_some());
        assert!(SpecExampleParser::try_start(&line("~~~example\n"), 0, &options).is_none());
    }

    #[test]
    fn closing_line_must_match_exactly() {
        let mut p = SpecExampleParser::try_start(&line("~~~example\n"), 0, &tilde()).unwrap();
        assert_eq!(p.try_continue(&line("~~~ \n")), BlockContinue::Continue);
        assert_eq!(p.try_continue(&line("~~~~\n")), BlockContinue::Continue);
        assert_eq!(p.try_continue(&line("~~~example\n")), BlockContinue::Continue);
        assert_eq!(p.try_continue(&line("~~~\r\n")), BlockContinue::Finished);
    }

    #[test]
    fn full_block_spans() {
        let doc = "~~~example (2.3) options (no-numbered-references)\n*text*\n.\n<p><em>text</em></p>\n.\nParagraph[text]\n~~~\n";
        let (rope, b) = run(doc);

        assert_eq!(b.span, Span::new(0, doc.len()));
        assert_eq!(slice(&rope, b.opening_delimiter), "~~~");
        assert_eq!(slice(&rope, b.example_keyword), "example");
        assert_eq!(b.section(&rope).as_deref(), Some("2.3"));
        assert_eq!(b.options(&rope).as_deref(), Some("no-numbered-references"));
        assert_eq!(b.source_text(&rope).as_deref(), Some("*text*"));
        assert_eq!(b.rendered_text(&rope).as_deref(), Some("<p><em>text</em></p>"));
        assert_eq!(b.dump_text(&rope).as_deref(), Some("Paragraph[text]"));
        assert_eq!(slice(&rope, b.closing_delimiter), "~~~");
        assert_eq!(b.closing_delimiter.end, doc.len() - 1);
        assert_eq!(
            slice(&rope, b.whole_content),
            "*text*\n.\n<p><em>text</em></p>\n.\nParagraph[text]\n"
        );
        assert_eq!(b.children().len(), 5);
    }

    #[test]
    fn unterminated_block_ends_at_last_line() {
        let doc = "~~~example\na\n.\nb";
        let (rope, b) = run(doc);
        assert!(!b.is_closed_by_delimiter());
        assert!(b.closing_delimiter.is_null());
        assert_eq!(b.span, Span::new(0, doc.len()));
        assert_eq!(b.source_text(&rope).as_deref(), Some("a"));
        assert_eq!(b.rendered_text(&rope).as_deref(), Some("b"));
    }

    #[test]
    fn empty_body() {
        let (_, b) = run("~~~example\n~~~\n");
        assert_eq!(b.whole_content, Span::new(11, 11));
        assert_eq!(b.closing_delimiter, Span::new(11, 14));
        assert!(b.children().is_empty());
        assert_eq!(b.sections, Sections::default());
    }

    #[test]
    fn opening_line_only_at_end_of_input() {
        let (_, b) = run("~~~example");
        assert_eq!(b.span, Span::new(0, 10));
        assert_eq!(b.whole_content, Span::new(10, 10));
        assert!(b.info.is_empty());
    }

    #[test]
    fn malformed_tail_keeps_block() {
        let (rope, b) = run("~~~example (a:1 2)\nx\n~~~\n");
        assert!(b.info.is_empty());
        assert_eq!(slice(&rope, b.example_keyword), "example");
        assert_eq!(b.source_text(&rope).as_deref(), Some("x"));
    }

    #[test]
    fn coordinate_and_option_list() {
        let (rope, b) = run("~~~example (sec:3) options (opt1, opt2 opt3)\n~~~\n");
        let coord = b.coordinate(&rope).unwrap();
        assert_eq!(coord.section.as_deref(), Some("sec"));
        assert_eq!(coord.number.as_deref(), Some("3"));
        assert_eq!(b.option_list(&rope), vec!["opt1", "opt2", "opt3"]);
    }

    #[test]
    fn no_coordinate() {
        let (rope, b) = run("~~~example\n~~~\n");
        assert_eq!(b.coordinate(&rope), None);
        assert!(b.option_list(&rope).is_empty());
    }
}
