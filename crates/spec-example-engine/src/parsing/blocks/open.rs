//! Leaf block openers and their declared ordering.
//!
//! Each opener names the recognizers it must run after and before. Tags with
//! no registered opener are ignored, so an opener can declare constraints
//! against recognizers this parser does not implement.

use std::collections::HashMap;

use super::{
    classify::LineClass,
    kinds::{CodeFence, FenceSig, SpecExampleOptions, SpecExampleParser},
};

/// Identifies a block recognizer in ordering constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpenerTag {
    BlockQuote,
    Heading,
    SpecExample,
    FencedCode,
    HtmlBlock,
    ThematicBreak,
    List,
    IndentedCode,
}

#[derive(Debug)]
pub enum BlockOpen {
    SpecExample(Box<SpecExampleParser>),
    FencedCode(FenceSig),
}

pub trait BlockOpener {
    fn tag(&self) -> OpenerTag;

    /// Recognizers that must be tried before this one.
    fn runs_after(&self) -> &'static [OpenerTag] {
        &[]
    }

    /// Recognizers that must be tried after this one.
    fn runs_before(&self) -> &'static [OpenerTag] {
        &[]
    }

    fn try_open(&self, line: &LineClass) -> Option<BlockOpen>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OrderingError {
    #[error("block opener {0:?} registered more than once")]
    Duplicate(OpenerTag),
    #[error("block opener ordering has a cycle through {0:?}")]
    Cycle(Vec<OpenerTag>),
}

pub struct SpecExampleOpener {
    options: SpecExampleOptions,
}

impl SpecExampleOpener {
    pub fn new(options: SpecExampleOptions) -> Self {
        Self { options }
    }
}

impl BlockOpener for SpecExampleOpener {
    fn tag(&self) -> OpenerTag {
        OpenerTag::SpecExample
    }

    fn runs_after(&self) -> &'static [OpenerTag] {
        &[OpenerTag::BlockQuote, OpenerTag::Heading]
    }

    fn runs_before(&self) -> &'static [OpenerTag] {
        &[
            OpenerTag::FencedCode,
            OpenerTag::HtmlBlock,
            OpenerTag::ThematicBreak,
            OpenerTag::List,
            OpenerTag::IndentedCode,
        ]
    }

    fn try_open(&self, line: &LineClass) -> Option<BlockOpen> {
        SpecExampleParser::try_start(&line.line, line.indent, &self.options)
            .map(|parser| BlockOpen::SpecExample(Box::new(parser)))
    }
}

pub struct FencedCodeOpener;

impl BlockOpener for FencedCodeOpener {
    fn tag(&self) -> OpenerTag {
        OpenerTag::FencedCode
    }

    fn try_open(&self, line: &LineClass) -> Option<BlockOpen> {
        line.fence_sig
            .filter(|_| line.indent <= CodeFence::MAX_INDENT)
            .map(BlockOpen::FencedCode)
    }
}

/// Orders openers so every declared constraint holds.
///
/// Among openers free to go next, registration order wins.
pub fn opener_order(openers: &[Box<dyn BlockOpener>]) -> Result<Vec<usize>, OrderingError> {
    let mut index_of = HashMap::new();
    for (i, opener) in openers.iter().enumerate() {
        if index_of.insert(opener.tag(), i).is_some() {
            return Err(OrderingError::Duplicate(opener.tag()));
        }
    }

    let mut successors = vec![vec![]; openers.len()];
    let mut pending = vec![0usize; openers.len()];
    for (i, opener) in openers.iter().enumerate() {
        let edges = opener
            .runs_after()
            .iter()
            .filter_map(|tag| index_of.get(tag).map(|&before| (before, i)))
            .chain(
                opener
                    .runs_before()
                    .iter()
                    .filter_map(|tag| index_of.get(tag).map(|&after| (i, after))),
            );
        for (from, to) in edges {
            successors[from].push(to);
            pending[to] += 1;
        }
    }

    let mut order = Vec::with_capacity(openers.len());
    let mut placed = vec![false; openers.len()];
    while order.len() < openers.len() {
        let next = (0..openers.len()).find(|&i| !placed[i] && pending[i] == 0);
        let Some(next) = next else {
            let stuck = (0..openers.len())
                .filter(|&i| !placed[i])
                .map(|i| openers[i].tag())
                .collect();
            return Err(OrderingError::Cycle(stuck));
        };
        placed[next] = true;
        order.push(next);
        for &to in &successors[next] {
            pending[to] -= 1;
        }
    }
    Ok(order)
}

/// Reorders `openers` per [`opener_order`].
pub fn ordered_openers(
    openers: Vec<Box<dyn BlockOpener>>,
) -> Result<Vec<Box<dyn BlockOpener>>, OrderingError> {
    let order = opener_order(&openers)?;
    Ok(reorder(openers, order))
}

fn reorder(openers: Vec<Box<dyn BlockOpener>>, order: Vec<usize>) -> Vec<Box<dyn BlockOpener>> {
    let mut slots: Vec<_> = openers.into_iter().map(Some).collect();
    order.into_iter().filter_map(|i| slots[i].take()).collect()
}

/// The openers this parser knows, in dependency order.
pub fn default_openers(options: &SpecExampleOptions) -> Vec<Box<dyn BlockOpener>> {
    let registered: Vec<Box<dyn BlockOpener>> = vec![
        Box::new(FencedCodeOpener),
        Box::new(SpecExampleOpener::new(options.clone())),
    ];
    match opener_order(&registered) {
        Ok(order) => {
            log::debug!(
                "block opener order: {:?}",
                order.iter().map(|&i| registered[i].tag()).collect::<Vec<_>>()
            );
            reorder(registered, order)
        }
        Err(err) => {
            log::warn!("{err}; keeping registration order");
            registered
        }
    }
}
