//! Convert English number phrases embedded in free text into exact values.
//!
//! ```
//! use numerals::{parse_to_int, parse_to_string};
//!
//! assert_eq!(parse_to_string("nine hundred and ninety nine red balloons"), "999 red balloons");
//! assert_eq!(parse_to_int("fourteen ninety two"), Ok(1492));
//! ```
//!
//! Each word is classified into a tagged [`Numeral`]; consecutive numeric
//! words form a [`Run`], which is reduced by a fixed-priority rewrite grammar
//! until nothing else applies. Non-numeric words pass through unchanged.

#[macro_use]
mod macros;
mod api;
mod engine;
mod error;
mod numeral;
mod rules;
mod tokenize;
mod vocabulary;

pub use api::{
    ParseReport, parse_to_float, parse_to_float_with, parse_to_int, parse_to_int_with, parse_to_string,
    parse_to_string_with, parse_verbose, parse_verbose_with, reduce_tokens, reduce_tokens_with,
};
pub use engine::{RewriteStep, Run, RunTrace};
pub use error::{Error, Result};
pub use numeral::{Numeral, Tag, ordinal_suffix};
pub use rules::Combinator;
pub use tokenize::tokenize;
pub use vocabulary::Vocabulary;
