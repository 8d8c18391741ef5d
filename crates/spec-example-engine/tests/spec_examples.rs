use pretty_assertions::assert_eq;
use rstest::rstest;
use spec_example_engine::parsing::{ParsedDoc, blocks::BlockKind, parse_document, snapshot};
use spec_example_engine::{SpecExampleBlock, SpecExampleOptions};
use xi_rope::Rope;

fn tilde() -> SpecExampleOptions {
    SpecExampleOptions::with_example_break("~~~")
}

fn parse(md: &str, options: &SpecExampleOptions) -> (Rope, ParsedDoc) {
    let rope = Rope::from(md);
    let doc = parse_document(&rope, options);
    snapshot::invariants(&rope, &doc.blocks);
    (rope, doc)
}

fn only_example(doc: &ParsedDoc) -> &SpecExampleBlock {
    let examples: Vec<_> = doc.examples().collect();
    assert_eq!(examples.len(), 1, "expected exactly one spec example");
    examples[0]
}

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}.md",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap()
}

#[test]
fn renders_every_info_line_field() {
    let (rope, doc) = parse(
        "Intro\n\n~~~example (sec:3) options (opt1)\na\n.\nb\n~~~\n",
        &tilde(),
    );

    insta::assert_snapshot!(snapshot::render_ast(&rope, &doc.blocks), @r#"
    Paragraph [0, 6) "Intro\n"
    SpecExample [7, 51)
      opening_delimiter [7, 10) "~~~"
      example_keyword [10, 17) "example"
      coord_open [18, 19) "("
      section [19, 22) "sec"
      number_separator [22, 23) ":"
      number [23, 24) "3"
      coord_close [24, 25) ")"
      options_keyword [26, 33) "options"
      options_open [34, 35) "("
      options [35, 39) "opt1"
      options_close [39, 40) ")"
      closing_delimiter [47, 50) "~~~"
      whole_content [41, 47)
      Source [41, 42) "a"
      Separator [43, 44) "."
      Rendered [45, 46) "b"
    "#);
}

#[test]
fn example_line_inside_fence_is_code() {
    let (rope, doc) = parse("~~~rust\n~~~example\n~~~\n\n~~~example\nx\n~~~\n", &tilde());

    insta::assert_snapshot!(snapshot::render_ast(&rope, &doc.blocks), @r#"
    FencedCode(Tildes) [0, 23)
    SpecExample [24, 41)
      opening_delimiter [24, 27) "~~~"
      example_keyword [27, 34) "example"
      closing_delimiter [37, 40) "~~~"
      whole_content [35, 37)
      Source [35, 36) "x"
    "#);
}

#[test]
fn single_body_line_is_source_only() {
    let (rope, doc) = parse("~~~example\nonly line\n~~~\n", &tilde());
    let b = only_example(&doc);

    assert_eq!(b.source_text(&rope).as_deref(), Some("only line"));
    assert_eq!(b.rendered_text(&rope), None);
    assert_eq!(b.dump_text(&rope), None);
    assert!(b.sections.rendered_separator.is_null());
}

#[test]
fn source_and_rendered() {
    let (rope, doc) = parse("~~~example\na\n.\nb\n~~~\n", &tilde());
    let b = only_example(&doc);

    assert_eq!(b.source_text(&rope).as_deref(), Some("a"));
    assert_eq!(
        rope.slice_to_cow(b.sections.rendered_separator.start..b.sections.rendered_separator.end),
        "."
    );
    assert_eq!(b.rendered_text(&rope).as_deref(), Some("b"));
    assert!(b.sections.dump_separator.is_null());
    assert_eq!(b.dump_text(&rope), None);
}

#[test]
fn third_type_break_is_dump_content() {
    let (rope, doc) = parse("~~~example\na\n.\nb\n.\nc\n.\nd\n~~~\n", &tilde());
    let b = only_example(&doc);

    assert_eq!(b.source_text(&rope).as_deref(), Some("a"));
    assert_eq!(b.rendered_text(&rope).as_deref(), Some("b"));
    assert_eq!(b.dump_text(&rope).as_deref(), Some("c\n.\nd"));
    assert_eq!(b.children().len(), 5);
}

#[rstest]
#[case::keyword_runs_on("~~~examplex\nfoo\n~~~\n")]
#[case::keyword_glued_to_paren("~~~example(1)\nfoo\n~~~\n")]
#[case::indented(" ~~~example\nfoo\n~~~\n")]
fn rejected_opening_line_is_a_fence(#[case] md: &str) {
    let (_, doc) = parse(md, &tilde());

    assert_eq!(doc.examples().count(), 0);
    assert!(matches!(doc.blocks[0].kind, BlockKind::FencedCode { .. }));
}

#[rstest]
#[case::unclosed_paren("~~~example (a:1 2)\nx\n~~~\n")]
#[case::text_after_options("~~~example options (x) tail\nx\n~~~\n")]
#[case::number_with_spaces("~~~example sec: 1 2\nx\n~~~\n")]
fn malformed_info_line_leaves_metadata_empty(#[case] md: &str) {
    let (rope, doc) = parse(md, &tilde());
    let b = only_example(&doc);

    assert!(b.info.is_empty());
    assert_eq!(b.coordinate(&rope), None);
    assert_eq!(b.source_text(&rope).as_deref(), Some("x"));
    assert!(b.is_closed_by_delimiter());
}

#[test]
fn final_line_trims_its_own_line_ending() {
    let (rope, doc) = parse("~~~example\na\n.\nb\r\n~~~\n", &tilde());
    let b = only_example(&doc);
    assert_eq!(b.rendered_text(&rope).as_deref(), Some("b"));

    let (rope, doc) = parse("~~~example\na\r\nb", &tilde());
    let b = only_example(&doc);
    assert_eq!(b.source_text(&rope).as_deref(), Some("a\r\nb"));
}

#[test]
fn unterminated_example_runs_to_end_of_input() {
    let md = "~~~example\nx\n~~~~\nafter\n";
    let (rope, doc) = parse(md, &tilde());
    let b = only_example(&doc);

    assert!(!b.is_closed_by_delimiter());
    assert_eq!(b.span.end, md.len());
    assert_eq!(b.source_text(&rope).as_deref(), Some("x\n~~~~\nafter"));
    assert_eq!(doc.blocks.len(), 1);
}

#[test]
fn example_interrupts_paragraph() {
    let (_, doc) = parse("para\n~~~example\nx\n~~~\nafter\n", &tilde());

    let kinds: Vec<_> = doc
        .blocks
        .iter()
        .map(|b| match &b.kind {
            BlockKind::Paragraph => "paragraph",
            BlockKind::FencedCode { .. } => "fence",
            BlockKind::SpecExample(_) => "example",
        })
        .collect();
    assert_eq!(kinds, vec!["paragraph", "example", "paragraph"]);
}

#[test]
fn options_clause_glued_to_coordinate() {
    let (rope, doc) = parse("~~~example (sec:3)options(x)\nbody\n~~~\n", &tilde());
    let b = only_example(&doc);

    assert_eq!(b.section(&rope).as_deref(), Some("sec"));
    assert_eq!(b.number(&rope).as_deref(), Some("3"));
    assert_eq!(b.options(&rope).as_deref(), Some("x"));
}

#[test]
fn custom_markers() {
    let options = SpecExampleOptions {
        example_break: "@@@@".to_string(),
        type_break: "---".to_string(),
        example_keyword: "case".to_string(),
        options_keyword: "flags".to_string(),
    };
    let (rope, doc) = parse("@@@@ case (io:7) flags (slow)\nin\n---\nout\n@@@@\n", &options);
    let b = only_example(&doc);

    assert_eq!(b.section(&rope).as_deref(), Some("io"));
    assert_eq!(b.number(&rope).as_deref(), Some("7"));
    assert_eq!(b.option_list(&rope), vec!["slow"]);
    assert_eq!(b.source_text(&rope).as_deref(), Some("in"));
    assert_eq!(b.rendered_text(&rope).as_deref(), Some("out"));
}

#[test]
fn fixture_headings_and_lists() {
    let md = load_fixture("headings_and_lists");
    let (rope, doc) = parse(&md, &SpecExampleOptions::default());

    let summary: Vec<_> = doc
        .examples()
        .map(|b| {
            (
                b.section(&rope),
                b.number(&rope),
                b.option_list(&rope),
                b.children().len(),
            )
        })
        .collect();
    assert_eq!(
        summary,
        vec![
            (Some("Headings".into()), Some("1".into()), vec![], 5),
            (
                Some("Lists".into()),
                Some("2".into()),
                vec!["IGNORE".to_string(), "FAIL".to_string()],
                3
            ),
            (None, None, vec![], 1),
            (Some("Dumps".into()), Some("4".into()), vec![], 5),
        ]
    );

    let examples: Vec<_> = doc.examples().collect();
    assert_eq!(
        examples[0].dump_text(&rope).as_deref(),
        Some("Document[0, 5]\n  Heading[0, 5]")
    );
    assert_eq!(
        examples[1].rendered_text(&rope).as_deref(),
        Some("<ul>\n<li>a</li>\n<li>b</li>\n</ul>")
    );
    assert_eq!(examples[2].source_text(&rope).as_deref(), Some("plain"));
    assert_eq!(
        examples[3].dump_text(&rope).as_deref(),
        Some("Paragraph[0, 1]\n.\nText[0, 1]")
    );
    assert!(examples.iter().all(|b| b.is_closed_by_delimiter()));

    let fences = doc
        .blocks
        .iter()
        .filter(|b| matches!(b.kind, BlockKind::FencedCode { .. }))
        .count();
    assert_eq!(fences, 1);
}

/// Slicing any block span reproduces the exact source text.
#[test]
fn fixture_blocks_are_lossless() {
    let md = load_fixture("headings_and_lists");
    let (rope, doc) = parse(&md, &SpecExampleOptions::default());

    for pair in doc.blocks.windows(2) {
        let gap = rope.slice_to_cow(pair[0].span.end..pair[1].span.start);
        assert!(gap.trim().is_empty(), "non-blank text between blocks: {gap:?}");
    }
    let last = doc.blocks.last().unwrap();
    assert_eq!(last.span.end, md.len());
}
