use super::rope::span::Span;

/// Characters treated as horizontal whitespace inside block info lines.
///
/// Non-breaking space counts as an ordinary space.
pub fn is_blank_char(c: char) -> bool {
    c == '\u{a0}' || c.is_ascii_whitespace()
}

/// A cursor for character-by-character parsing with position tracking.
///
/// Operates over a string slice while tracking the absolute byte position
/// in the original rope (via `base` offset). Steps by `char`, so multi-byte
/// characters such as U+00A0 are consumed whole.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being parsed.
    pub s: &'a str,
    /// Base offset in the rope (added to local index for absolute positions).
    pub base: usize,
    /// Current local byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str, base: usize) -> Self {
        Self { s, base, i: 0 }
    }

    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    pub fn rest(&self) -> &'a str {
        &self.s[self.i.min(self.s.len())..]
    }

    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Advances by `n` bytes. The caller keeps `i` on a char boundary.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }

    /// Consumes `c` if it is next.
    pub fn eat(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.i += c.len_utf8();
            true
        } else {
            false
        }
    }

    /// Consumes chars while `pred` holds and returns the local `(start, end)`.
    pub fn take_while(&mut self, pred: impl Fn(char) -> bool) -> (usize, usize) {
        let start = self.i;
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            self.i += c.len_utf8();
        }
        (start, self.i)
    }

    pub fn skip_blanks(&mut self) {
        self.take_while(is_blank_char);
    }

    /// Absolute span for a local byte range.
    pub fn span(&self, start: usize, end: usize) -> Span {
        Span::new(self.base + start, self.base + end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_input() {
        let mut cur = Cursor::new("", 0);
        assert!(cur.eof());
        assert_eq!(cur.peek(), None);
        assert!(!cur.eat('x'));
        assert_eq!(cur.take_while(|_| true), (0, 0));
    }

    #[test]
    fn eat_steps_over_multibyte_chars() {
        let mut cur = Cursor::new("\u{a0}x", 0);
        assert!(cur.eat('\u{a0}'));
        assert_eq!(cur.i, 2);
        assert_eq!(cur.peek(), Some('x'));
    }

    #[test]
    fn skip_blanks_treats_nbsp_as_space() {
        let mut cur = Cursor::new(" \t\u{a0}(", 5);
        cur.skip_blanks();
        assert_eq!(cur.peek(), Some('('));
        assert_eq!(cur.span(cur.i, cur.i + 1), Span::new(9, 10));
    }

    #[test]
    fn take_while_reports_local_range() {
        let mut cur = Cursor::new("abc:def", 100);
        let (s, e) = cur.take_while(|c| c != ':');
        assert_eq!((s, e), (0, 3));
        assert_eq!(cur.span(s, e), Span::new(100, 103));
        assert!(cur.eat(':'));
        assert!(!cur.eat(':'));
        assert_eq!(cur.rest(), "def");
    }

    #[test]
    fn bump_n_past_end_is_eof() {
        let mut cur = Cursor::new("hi", 0);
        cur.bump_n(10);
        assert!(cur.eof());
        assert_eq!(cur.peek(), None);
        assert_eq!(cur.rest(), "");
    }
}
