use crate::engine::{self, RunTrace};
use crate::tokenize::tokenize;
use crate::{Result, Vocabulary};
use once_cell::sync::Lazy;
use std::time::{Duration, Instant};

/// Vocabulary behind the convenience functions. It is never toggled; callers
/// that need to exclude words own their own [`Vocabulary`].
static DEFAULT_VOCABULARY: Lazy<Vocabulary> = Lazy::new(Vocabulary::english);

/// Result from [`parse_verbose`] and [`parse_verbose_with`].
#[derive(Debug, Clone)]
pub struct ParseReport {
    /// The parsed input text.
    pub text: String,
    /// Same value [`parse_to_string`] returns.
    pub output: String,
    /// One trace per numeric run, in input order.
    pub runs: Vec<RunTrace>,
    /// Total elapsed time spent tokenizing, classifying and reducing.
    pub elapsed: Duration,
}

/// Replace every number phrase in `text` with its value, leaving other words
/// untouched. Words are re-joined with single spaces.
///
/// # Example
/// ```
/// use numerals::parse_to_string;
///
/// let out = parse_to_string("I've got three apples and two and a half bananas");
/// assert_eq!(out, "I've got 3 apples and 2.5 bananas");
/// ```
pub fn parse_to_string(text: &str) -> String {
    parse_to_string_with(text, &DEFAULT_VOCABULARY)
}

/// [`parse_to_string`] with a caller-supplied vocabulary.
pub fn parse_to_string_with(text: &str, vocabulary: &Vocabulary) -> String {
    reduce_tokens_with(&tokenize(text), vocabulary).join(" ")
}

/// Like [`parse_to_string`] for input the caller already split into words.
pub fn reduce_tokens<S: AsRef<str>>(tokens: &[S]) -> Vec<String> {
    reduce_tokens_with(tokens, &DEFAULT_VOCABULARY)
}

/// [`reduce_tokens`] with a caller-supplied vocabulary.
pub fn reduce_tokens_with<S: AsRef<str>>(tokens: &[S], vocabulary: &Vocabulary) -> Vec<String> {
    let mut assembler = engine::Assembler::new(vocabulary);
    assembler.feed_all(tokens);
    assembler.finish().0
}

/// Read `text` as exactly one number.
///
/// Every word must be numeric ([`crate::Error::NonNumericInput`]) and the
/// words must reduce to a single value ([`crate::Error::NoNumberFound`],
/// [`crate::Error::AmbiguousNumber`]).
///
/// ```
/// assert_eq!(numerals::parse_to_float("eight and three quarters"), Ok(8.75));
/// ```
pub fn parse_to_float(text: &str) -> Result<f64> {
    parse_to_float_with(text, &DEFAULT_VOCABULARY)
}

/// [`parse_to_float`] with a caller-supplied vocabulary.
pub fn parse_to_float_with(text: &str, vocabulary: &Vocabulary) -> Result<f64> {
    engine::collect_run(vocabulary, &tokenize(text))?.scalar_value()
}

/// Read `text` as exactly one number, truncating any fractional part.
///
/// ```
/// assert_eq!(numerals::parse_to_int("fourteen ninety two"), Ok(1492));
/// ```
pub fn parse_to_int(text: &str) -> Result<i64> {
    parse_to_int_with(text, &DEFAULT_VOCABULARY)
}

/// [`parse_to_int`] with a caller-supplied vocabulary.
pub fn parse_to_int_with(text: &str, vocabulary: &Vocabulary) -> Result<i64> {
    engine::collect_run(vocabulary, &tokenize(text))?.integer_value()
}

/// [`parse_to_string`] plus a per-run reduction trace.
pub fn parse_verbose(text: &str) -> ParseReport {
    parse_verbose_with(text, &DEFAULT_VOCABULARY)
}

/// Parse `text` with `vocabulary` and return the rewrite trace of every run.
///
/// The default [`parse_to_string_with`] path does not allocate these traces.
pub fn parse_verbose_with(text: &str, vocabulary: &Vocabulary) -> ParseReport {
    let started = Instant::now();
    let tokens = tokenize(text);

    let mut assembler = engine::Assembler::traced(vocabulary);
    assembler.feed_all(&tokens);
    let (output, runs) = assembler.finish();

    ParseReport { text: text.to_string(), output: output.join(" "), runs, elapsed: started.elapsed() }
}
