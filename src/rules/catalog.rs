//! Priority-ordered pattern catalog.
//!
//! Each entry pairs a pattern over the tag alphabet with the [`Combinator`]
//! applied where it matches. The reducer walks the catalog top to bottom and
//! fires the first entry that occurs anywhere in the run, at its right-most
//! occurrence.
//!
//! ```text
//! pattern   example                        result
//! ts        twenty three                   23
//! bdb       million eighteen thousand      1018000
//! sb        one hundred                    100
//! dt        nineteen eighty                1980 (done)
//! sf        three fourths                  0.75
//! sB        one hundredth                  0.01
//! tS        twenty first                   21st
//! s&f       two and a half                 2.5
//! &         hundred and fifty              hundred fifty
//! ```

use once_cell::sync::Lazy;

use crate::numeral::{Tag, TagMask};
use crate::rules::Combinator;

/// One catalog entry.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Rewrite {
    pub pattern: &'static str,
    pub combinator: Combinator,
    /// Tags the pattern needs; runs missing any of them skip the entry.
    pub mask: TagMask,
}

impl Rewrite {
    pub fn new(pattern: &'static str, combinator: Combinator) -> Self {
        let mask = pattern.chars().filter_map(Tag::from_symbol).fold(TagMask::empty(), |acc, tag| acc | tag.mask());
        Rewrite { pattern, combinator, mask }
    }
}

pub(crate) static CATALOG: Lazy<Vec<Rewrite>> = Lazy::new(|| {
    vec![
        // tens
        rewrite!("ts" => Combine),
        // big
        rewrite!("bdb" => CombineToLowest),
        rewrite!("db" => Combine),
        rewrite!("sb" => Combine),
        rewrite!("btb" => CombineToLowest),
        rewrite!("tb" => Combine),
        rewrite!("bd" => Combine),
        rewrite!("bsb" => CombineToLowest),
        rewrite!("bs" => Combine),
        rewrite!("bt" => Combine),
        rewrite!("bbb" => CombineToLowest),
        rewrite!("bb" => Combine),
        // colloquial years
        rewrite!("dd" => YearOrDone),
        rewrite!("dt" => YearOrDone),
        rewrite!("td" => YearOrDone),
        // fractions
        rewrite!("df" => Multiply),
        rewrite!("sf" => Multiply),
        rewrite!("tf" => Multiply),
        rewrite!("bf" => Multiply),
        // ordinals that may be unit fractions ("a tenth" vs "fifteen tenth")
        rewrite!("dD" => FractionOrDone),
        rewrite!("dS" => FractionOrDone),
        rewrite!("dT" => FractionOrDone),
        rewrite!("dB" => FractionOrCombine),
        rewrite!("sD" => FractionOrDone),
        rewrite!("sS" => FractionOrDone),
        rewrite!("sT" => FractionOrDone),
        rewrite!("sB" => FractionOrCombine),
        // remaining ordinals
        rewrite!("tS" => Add),
        rewrite!("tB" => Multiply),
        rewrite!("bS" => Add),
        rewrite!("bB" => Combine),
        // glue
        rewrite!("d&f" => AddAnd),
        rewrite!("s&f" => AddAnd),
        rewrite!("t&f" => AddAnd),
        rewrite!("b&f" => AddAnd),
        rewrite!("&" => Drop),
    ]
});

/// First catalog entry (in priority order) present in `pattern`, with the
/// start index of its right-most occurrence.
///
/// `present` is the tag mask of the run the pattern was built from.
pub(crate) fn find_rewrite(pattern: &str, present: TagMask) -> Option<(&'static Rewrite, usize)> {
    CATALOG
        .iter()
        .filter(|rewrite| present.contains(rewrite.mask))
        .find_map(|rewrite| pattern.rfind(rewrite.pattern).map(|idx| (rewrite, idx)))
}
