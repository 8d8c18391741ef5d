use xi_rope::Rope;

use super::span::{Span, eol_len};

/// A reference to a single line in the rope with its byte span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRef {
    /// Byte span of this line in the rope (includes newline if present).
    pub span: Span,
    /// The line text including its end-of-line characters.
    pub text: String,
}

impl LineRef {
    /// Line text without trailing `\r`/`\n`.
    pub fn content(&self) -> &str {
        self.text.trim_end_matches(['\r', '\n'])
    }

    /// Count of trailing end-of-line bytes.
    pub fn eol_len(&self) -> usize {
        eol_len(&self.text)
    }

    /// Span of [`Self::content`].
    pub fn content_span(&self) -> Span {
        Span::new(self.span.start, self.span.end - self.eol_len())
    }
}

/// Returns an iterator over lines with their byte spans.
///
/// Uses `lines_raw` to preserve newline characters, which is important for
/// accurate span tracking during block parsing.
pub fn lines_with_spans(rope: &Rope) -> impl Iterator<Item = LineRef> + '_ {
    let mut offset = 0usize;
    rope.lines_raw(..).map(move |line| {
        let start = offset;
        let len = line.len();
        offset += len;
        LineRef {
            span: Span { start, end: offset },
            text: line.into_owned(),
        }
    })
}
