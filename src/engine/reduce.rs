//! Fixpoint reduction of a run.
//!
//! A [`Run`] owns an ordered buffer of [`Numeral`]s. Reduction repeatedly:
//!
//! ```text
//! buffer ──▶ pattern ("sb&ts") ──▶ first catalog entry present
//!    ▲                                   │ (right-most occurrence)
//!    └──────── combinator.apply(idx) ◀───┘
//! ```
//!
//! until no catalog entry matches. Every step either removes a value or
//! retags one as `Done`, so the loop always terminates; the cost is
//! quadratic in the run length, which stays at sentence scale.
//!
//! The buffer is only ever touched through `&mut self` (or by value), so no
//! other reference can observe it mid-reduction.

use super::metrics::RewriteStep;
use crate::numeral::{Numeral, Tag, TagMask};
use crate::rules::catalog::find_rewrite;
use crate::{Error, Result};

/// A contiguous span of numeric values awaiting (or after) reduction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Run {
    items: Vec<Numeral>,
}

impl Run {
    pub fn new() -> Self {
        Run { items: Vec::new() }
    }

    pub fn push(&mut self, numeral: Numeral) {
        self.items.push(numeral);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn last(&self) -> Option<&Numeral> {
        self.items.last()
    }

    /// Concatenated tag symbols, e.g. `"sb&ts"`.
    pub fn pattern(&self) -> String {
        self.items.iter().map(|n| n.tag.symbol()).collect()
    }

    /// Rendered values in order.
    pub fn render(&self) -> Vec<String> {
        self.items.iter().map(|n| n.to_string()).collect()
    }

    /// Reduce to the minimal form the catalog allows.
    pub fn reduce(self) -> Run {
        self.reduce_inner(None)
    }

    /// Like [`Run::reduce`], recording every rewrite into `steps`.
    pub fn reduce_traced(self, steps: &mut Vec<RewriteStep>) -> Run {
        self.reduce_inner(Some(steps))
    }

    fn reduce_inner(mut self, mut steps: Option<&mut Vec<RewriteStep>>) -> Run {
        loop {
            let pattern = self.pattern();
            let Some((rewrite, idx)) = find_rewrite(&pattern, TagMask::of(&self.items)) else {
                break;
            };

            let overflowed = match rewrite.combinator.apply(&mut self.items, idx) {
                Ok(()) => false,
                Err(err) => {
                    tracing::warn!(pattern = %pattern, matched = rewrite.pattern, "{err}; marking value done");
                    self.items[err.index].tag = Tag::Done;
                    true
                }
            };

            tracing::trace!(
                before = %pattern,
                matched = rewrite.pattern,
                index = idx,
                combinator = rewrite.combinator.name(),
                after = %self.pattern(),
                "rewrite"
            );

            if let Some(steps) = steps.as_deref_mut() {
                steps.push(RewriteStep {
                    before: pattern,
                    matched: rewrite.pattern,
                    index: idx,
                    combinator: rewrite.combinator,
                    after: self.pattern(),
                    overflowed,
                });
            }
        }
        self
    }

    /// Reduce and return the single remaining value.
    pub fn scalar_value(self) -> Result<f64> {
        self.into_single().map(|n| n.value())
    }

    /// Reduce and return the single remaining value truncated toward zero.
    pub fn integer_value(self) -> Result<i64> {
        self.into_single().map(|n| n.numerator / n.denominator)
    }

    fn into_single(self) -> Result<Numeral> {
        let reduced = self.reduce();
        match reduced.items.as_slice() {
            [] => Err(Error::NoNumberFound),
            [single] => Ok(*single),
            many => Err(Error::AmbiguousNumber { count: many.len() }),
        }
    }
}

impl FromIterator<Numeral> for Run {
    fn from_iter<I: IntoIterator<Item = Numeral>>(iter: I) -> Self {
        Run { items: iter.into_iter().collect() }
    }
}
