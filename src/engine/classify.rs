//! Token classification.
//!
//! A token is resolved to a [`Numeral`] by vocabulary lookup first and by
//! literal parsing second. Glue words ("and", "&") are only accepted inside
//! a run, when the glue heuristic holds at that position.

use super::reduce::Run;
use crate::Vocabulary;
use crate::numeral::{Numeral, Tag};
use crate::rules::literal::classify_literal;

pub(crate) struct Classifier<'v> {
    vocabulary: &'v Vocabulary,
}

impl<'v> Classifier<'v> {
    pub fn new(vocabulary: &'v Vocabulary) -> Self {
        Classifier { vocabulary }
    }

    /// Classify `word` on its own, glue included.
    pub fn classify(&self, word: &str) -> Option<Numeral> {
        self.vocabulary.lookup(word).or_else(|| classify_literal(word))
    }

    /// Classify `tokens[idx]` as the next member of `run`.
    pub fn classify_in_run<S: AsRef<str>>(&self, tokens: &[S], idx: usize, run: &Run) -> Option<Numeral> {
        let word = tokens[idx].as_ref();

        match self.vocabulary.lookup(word) {
            Some(n) if !n.is_glue() => return Some(n),
            Some(n) if self.accepts_glue(tokens, idx, run) => return Some(n),
            _ => {}
        }

        classify_literal(word)
    }

    /// Glue joins the run only when:
    ///
    /// - the run already holds a value,
    /// - that value is neither ordinal nor a fraction ("second and third",
    ///   "half and ..."),
    /// - another token follows and it classifies as numeric ("cat and").
    pub fn accepts_glue<S: AsRef<str>>(&self, tokens: &[S], idx: usize, run: &Run) -> bool {
        let Some(prev) = run.last() else {
            return false;
        };
        if prev.is_ordinal() || prev.tag() == Tag::Fraction {
            return false;
        }

        tokens.get(idx + 1).is_some_and(|next| self.classify(next.as_ref()).is_some())
    }
}
