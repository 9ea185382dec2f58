//! Rewrite operations over a run buffer.
//!
//! Every combinator works on the buffer in place at a match index `idx`
//! and either shrinks the buffer or retags one value as [`Tag::Done`].
//! Merges compute their result on copies first, so a failed (overflowing)
//! merge leaves the buffer untouched.

use thiserror::Error;

use crate::numeral::{Numeral, Tag};

/// A merge would leave the `i64` range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("arithmetic overflow while merging values at index {index}")]
pub(crate) struct Overflow {
    pub index: usize,
}

/// Closed set of rewrite operations referenced by the pattern catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Combinator {
    /// Remove the value at `idx`.
    Drop,
    /// Retag the value at `idx` as inert.
    Done,
    /// `a + b`.
    Add,
    /// `a * b`.
    Multiply,
    /// Add when the left numerator is larger, multiply otherwise.
    Combine,
    /// In a window of three, combine the pair next to the smaller outer value.
    CombineToLowest,
    /// Two-digit pair read as a year ("nineteen eighty"), else mark the
    /// right value done.
    YearOrDone,
    /// "one fourth" is a fraction, otherwise mark the left value done.
    FractionOrDone,
    /// "one hundredth" is a fraction, otherwise combine.
    FractionOrCombine,
    /// Sum across a glue value: `a & b` -> `a + b`.
    AddAnd,
}

impl Combinator {
    pub fn name(self) -> &'static str {
        match self {
            Combinator::Drop => "drop",
            Combinator::Done => "done",
            Combinator::Add => "add",
            Combinator::Multiply => "multiply",
            Combinator::Combine => "combine",
            Combinator::CombineToLowest => "combine_to_lowest",
            Combinator::YearOrDone => "year_or_done",
            Combinator::FractionOrDone => "fraction_or_done",
            Combinator::FractionOrCombine => "fraction_or_combine",
            Combinator::AddAnd => "add_and",
        }
    }

    /// Apply this combinator to `items` at `idx`.
    ///
    /// `idx` must leave room for the combinator's window (one value for
    /// `Drop`/`Done`, three for `CombineToLowest`/`AddAnd`, two otherwise).
    /// The catalog only dispatches at indices where its pattern matched, so
    /// the window always exists.
    pub(crate) fn apply(self, items: &mut Vec<Numeral>, idx: usize) -> Result<(), Overflow> {
        match self {
            Combinator::Drop => {
                drop_at(items, idx);
                Ok(())
            }
            Combinator::Done => {
                done(items, idx);
                Ok(())
            }
            Combinator::Add => add(items, idx),
            Combinator::Multiply => multiply(items, idx),
            Combinator::Combine => combine(items, idx),
            Combinator::CombineToLowest => combine_to_lowest(items, idx),
            Combinator::YearOrDone => year_or_done(items, idx),
            Combinator::FractionOrDone => fraction_or(items, idx, Combinator::Done),
            Combinator::FractionOrCombine => fraction_or(items, idx, Combinator::Combine),
            Combinator::AddAnd => add_and(items, idx),
        }
    }
}

fn drop_at(items: &mut Vec<Numeral>, idx: usize) {
    items.remove(idx);
}

fn done(items: &mut [Numeral], idx: usize) {
    items[idx].tag = Tag::Done;
}

fn add(items: &mut Vec<Numeral>, idx: usize) -> Result<(), Overflow> {
    let merged = items[idx].checked_add(items[idx + 1]).ok_or(Overflow { index: idx })?;
    items[idx] = merged;
    drop_at(items, idx + 1);
    Ok(())
}

fn multiply(items: &mut Vec<Numeral>, idx: usize) -> Result<(), Overflow> {
    let merged = items[idx].checked_mul(items[idx + 1]).ok_or(Overflow { index: idx })?;
    items[idx] = merged;
    drop_at(items, idx + 1);
    Ok(())
}

fn combine(items: &mut Vec<Numeral>, idx: usize) -> Result<(), Overflow> {
    if items[idx].numerator > items[idx + 1].numerator { add(items, idx) } else { multiply(items, idx) }
}

fn combine_to_lowest(items: &mut Vec<Numeral>, idx: usize) -> Result<(), Overflow> {
    if items[idx].numerator <= items[idx + 2].numerator { combine(items, idx) } else { combine(items, idx + 1) }
}

fn year_or_done(items: &mut Vec<Numeral>, idx: usize) -> Result<(), Overflow> {
    let (century, rest) = (items[idx], items[idx + 1]);

    if century.numerator > 10 && century.numerator <= 20 && rest.numerator >= 10 && rest.numerator < 100 {
        let hundreds = Numeral { numerator: century.numerator * 100, ..century };
        let year = hundreds.checked_add(rest).ok_or(Overflow { index: idx })?;
        items[idx] = Numeral { tag: Tag::Done, ..year };
        drop_at(items, idx + 1);
        return Ok(());
    }

    done(items, idx + 1);
    Ok(())
}

fn fraction_or(items: &mut Vec<Numeral>, idx: usize, fallback: Combinator) -> Result<(), Overflow> {
    // "a zeroth" has no fraction reading.
    if items[idx].numerator == 1 && items[idx + 1].numerator > 0 {
        let denominator = items[idx + 1].numerator;
        let unit = Numeral::fraction(denominator);
        let merged = items[idx].checked_mul(unit).ok_or(Overflow { index: idx })?;
        items[idx] = merged;
        drop_at(items, idx + 1);
        return Ok(());
    }

    fallback.apply(items, idx)
}

fn add_and(items: &mut Vec<Numeral>, idx: usize) -> Result<(), Overflow> {
    let merged = items[idx].checked_add(items[idx + 2]).ok_or(Overflow { index: idx })?;
    items[idx] = merged;
    items.drain(idx + 1..=idx + 2);
    Ok(())
}
