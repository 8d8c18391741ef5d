#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceKind {
    Backticks,
    Tildes,
}

/// A line that looks like a fence opener or closer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FenceSig {
    pub kind: FenceKind,
    /// Length of the fence character run.
    pub len: usize,
    /// Nothing but whitespace follows the run.
    pub bare: bool,
}

pub struct CodeFence;

impl CodeFence {
    pub const MIN_LEN: usize = 3;
    pub const MAX_INDENT: usize = 3;

    pub fn sig(content: &str) -> Option<FenceSig> {
        let t = content.trim_end_matches(['\r', '\n']);
        let run = t.trim_start_matches(' ');
        if t.len() - run.len() > Self::MAX_INDENT {
            return None;
        }
        let (kind, ch) = match run.chars().next()? {
            '`' => (FenceKind::Backticks, '`'),
            '~' => (FenceKind::Tildes, '~'),
            _ => return None,
        };
        let len = run.len() - run.trim_start_matches(ch).len();
        if len < Self::MIN_LEN {
            return None;
        }
        let info = &run[len..];
        if kind == FenceKind::Backticks && info.contains('`') {
            return None;
        }
        Some(FenceSig {
            kind,
            len,
            bare: info.trim().is_empty(),
        })
    }

    /// A closer uses the opener's character, is at least as long and has no info string.
    pub fn closes(open: FenceSig, sig: Option<FenceSig>) -> bool {
        matches!(sig, Some(s) if s.kind == open.kind && s.len >= open.len && s.bare)
    }
}
