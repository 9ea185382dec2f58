//! The reduction grammar: literal numerals, the pattern catalog and the
//! combinators the catalog dispatches to.

pub(crate) mod catalog;
pub(crate) mod combinators;
pub(crate) mod literal;

pub use combinators::Combinator;

#[cfg(test)]
mod tests;
