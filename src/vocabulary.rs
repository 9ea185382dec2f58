//! English number-word vocabulary.
//!
//! The static table maps lowercase words to tagged [`Numeral`]s. A
//! [`Vocabulary`] owns a working copy of it behind a reader/writer lock so
//! that lookups from many threads never block each other, while the one
//! administrative operation, toggling an ambiguous word, takes the write
//! side.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use once_cell::sync::Lazy;

use crate::Error;
use crate::numeral::{Numeral, Tag};

/// Words that double as ordinary English and can be switched off.
///
/// "second" is also a unit of time; "a" is also the article.
static AMBIGUOUS: &[(&str, Numeral)] =
    &[("second", Numeral::ordinal(2, Tag::SingleOrdinal)), ("a", Numeral::cardinal(1, Tag::Direct))];

/// Map of every known word (ambiguous words included) to its value.
static ENGLISH: Lazy<HashMap<&'static str, Numeral>> = Lazy::new(|| {
    let mut words: HashMap<&'static str, Numeral> = HashMap::new();

    for (word, n) in [
        ("zero", 0),
        ("ten", 10),
        ("eleven", 11),
        ("twelve", 12),
        ("thirteen", 13),
        ("fourteen", 14),
        ("forteen", 14),
        ("fifteen", 15),
        ("sixteen", 16),
        ("seventeen", 17),
        ("eighteen", 18),
        ("nineteen", 19),
        ("ninteen", 19),
    ] {
        words.insert(word, Numeral::cardinal(n, Tag::Direct));
    }

    for (word, n) in
        [("one", 1), ("two", 2), ("three", 3), ("four", 4), ("five", 5), ("six", 6), ("seven", 7), ("eight", 8), ("nine", 9)]
    {
        words.insert(word, Numeral::cardinal(n, Tag::Single));
    }

    for (word, n) in [
        ("twenty", 20),
        ("thirty", 30),
        ("forty", 40),
        ("fourty", 40),
        ("fifty", 50),
        ("sixty", 60),
        ("seventy", 70),
        ("eighty", 80),
        ("ninety", 90),
    ] {
        words.insert(word, Numeral::cardinal(n, Tag::Tens));
    }

    for (word, n) in [
        ("hundred", 100),
        ("thousand", 1_000),
        ("million", 1_000_000),
        ("billion", 1_000_000_000),
        ("trillion", 1_000_000_000_000),
    ] {
        words.insert(word, Numeral::cardinal(n, Tag::Big));
    }

    for (word, denominator) in [
        ("half", 2),
        ("halve", 2),
        ("halfs", 2),
        ("halves", 2),
        ("thirds", 3),
        ("fourths", 4),
        ("quarter", 4),
        ("quarters", 4),
        ("fifths", 5),
        ("sixths", 6),
        ("sevenths", 7),
        ("eighths", 8),
        ("nineths", 9),
        ("ninths", 9),
        ("tenths", 10),
        ("elevenths", 11),
        ("twelfths", 12),
        ("thirteenths", 13),
        ("fourteenths", 14),
        ("fifteenths", 15),
        ("sixteenths", 16),
        ("seventeenths", 17),
        ("eighteenths", 18),
        ("nineteenths", 19),
        ("twentieths", 20),
        ("thirtieths", 30),
        ("fortieths", 40),
        ("fourtieths", 40),
        ("fiftieths", 50),
        ("sixtieths", 60),
        ("seventieths", 70),
        ("eightieths", 80),
        ("ninetieths", 90),
        ("hundredths", 100),
        ("thousandths", 1_000),
        ("millionths", 1_000_000),
        ("billionths", 1_000_000_000),
        ("trillionths", 1_000_000_000_000),
    ] {
        words.insert(word, Numeral::fraction(denominator));
    }

    for (word, n) in [
        ("zeroth", 0),
        ("tenth", 10),
        ("eleventh", 11),
        ("twelfth", 12),
        ("thirteenth", 13),
        ("fourteenth", 14),
        ("fifteenth", 15),
        ("sixteenth", 16),
        ("seventeenth", 17),
        ("eighteenth", 18),
        ("nineteenth", 19),
    ] {
        words.insert(word, Numeral::ordinal(n, Tag::DirectOrdinal));
    }

    for (word, n) in
        [("first", 1), ("third", 3), ("fourth", 4), ("fifth", 5), ("sixth", 6), ("seventh", 7), ("eighth", 8), ("ninth", 9)]
    {
        words.insert(word, Numeral::ordinal(n, Tag::SingleOrdinal));
    }

    for (word, n) in [
        ("twentieth", 20),
        ("thirtieth", 30),
        ("fortieth", 40),
        ("fourtieth", 40),
        ("fiftieth", 50),
        ("sixtieth", 60),
        ("seventieth", 70),
        ("eightieth", 80),
        ("ninetieth", 90),
    ] {
        words.insert(word, Numeral::ordinal(n, Tag::TensOrdinal));
    }

    for (word, n) in [
        ("hundredth", 100),
        ("thousandth", 1_000),
        ("millionth", 1_000_000),
        ("billionth", 1_000_000_000),
        ("trillionth", 1_000_000_000_000),
    ] {
        words.insert(word, Numeral::ordinal(n, Tag::BigOrdinal));
    }

    words.insert("and", Numeral::glue());
    words.insert("&", Numeral::glue());

    words.extend(AMBIGUOUS.iter().copied());
    words
});

/// Word-to-number table with a runtime toggle for ambiguous words.
///
/// ```
/// use numerals::{Vocabulary, parse_to_string_with};
///
/// let vocabulary = Vocabulary::english();
/// vocabulary.set_ambiguous_word_enabled("second", false).unwrap();
/// assert_eq!(parse_to_string_with("One second ago", &vocabulary), "1 second ago");
/// ```
#[derive(Debug)]
pub struct Vocabulary {
    words: RwLock<HashMap<&'static str, Numeral>>,
}

impl Vocabulary {
    /// The full English table with every ambiguous word enabled.
    pub fn english() -> Self {
        Vocabulary { words: RwLock::new(ENGLISH.clone()) }
    }

    /// Case-insensitive lookup.
    pub fn lookup(&self, word: &str) -> Option<Numeral> {
        let key = word.to_lowercase();
        let words = self.words.read().unwrap_or_else(PoisonError::into_inner);
        words.get(key.as_str()).copied()
    }

    /// Whether `word` currently resolves to a number.
    pub fn is_enabled(&self, word: &str) -> bool {
        self.lookup(word).is_some()
    }

    /// Include or exclude an ambiguous word such as `"second"`.
    ///
    /// Only words listed as ambiguous can be toggled; anything else returns
    /// [`Error::UnknownAmbiguousWord`].
    pub fn set_ambiguous_word_enabled(&self, word: &str, enabled: bool) -> Result<(), Error> {
        let key = word.to_lowercase();
        let Some(&(word, numeral)) = AMBIGUOUS.iter().find(|(w, _)| *w == key) else {
            return Err(Error::UnknownAmbiguousWord { word: key });
        };

        let mut words = self.words.write().unwrap_or_else(PoisonError::into_inner);
        if enabled {
            words.insert(word, numeral);
        } else {
            words.remove(word);
        }
        tracing::debug!(word, enabled, "vocabulary toggle");
        Ok(())
    }

    /// Words that [`Vocabulary::set_ambiguous_word_enabled`] accepts.
    pub fn ambiguous_words() -> impl Iterator<Item = &'static str> {
        AMBIGUOUS.iter().map(|(word, _)| *word)
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Vocabulary::english()
    }
}
