// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_spec_document(examples: usize) -> String {
    let delimiter = "`".repeat(32);
    let mut content = String::from("# Spec\n\nIntroductory prose for the section.\n\n");

    for n in 0..examples {
        content.push_str(&format!(
            "{delimiter} example (Section {}: {n}) options (opt-{n})\n",
            n / 10
        ));
        content.push_str("- item *emphasis*\n  continued\n.\n");
        content.push_str("<ul>\n<li>item <em>emphasis</em>\ncontinued</li>\n</ul>\n.\n");
        content.push_str("Document[0, 30]\n  BulletList[0, 30]\n");
        content.push_str(&delimiter);
        content.push_str("\n\nA paragraph between examples.\n\n");
        if n % 5 == 0 {
            content.push_str("```text\nfenced code\n```\n\n");
        }
    }

    content
}
