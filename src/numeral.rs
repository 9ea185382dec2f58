//! Numeric values and their classification tags.
//!
//! A [`Numeral`] is a small rational (`numerator / denominator`) tagged with a
//! [`Tag`] and an ordinal flag. Tags play two roles:
//!
//! - each tag is one character of the pattern alphabet the reducer matches
//!   against (`& d s t b f D S T B`, with `_` for inert values);
//! - the declaration order is a total order, and merged values take the
//!   larger tag of the pair.
//!
//! ```text
//! Glue < Direct < Single < Tens < Big < Fraction
//!      < DirectOrdinal < SingleOrdinal < TensOrdinal < BigOrdinal < Done
//! ```

use std::fmt;

/// Classification bucket of a [`Numeral`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tag {
    /// "and" / "&": not a quantity, only joins neighbours.
    Glue,
    /// 0 and 10..=19 ("ten", "fifteen", "a").
    Direct,
    /// 1..=9.
    Single,
    /// 20..=99.
    Tens,
    /// Multipliers and anything >= 100.
    Big,
    Fraction,
    DirectOrdinal,
    SingleOrdinal,
    TensOrdinal,
    BigOrdinal,
    /// Inert: excluded from any further pattern matching.
    Done,
}

impl Tag {
    /// Pattern alphabet character for this tag.
    pub const fn symbol(self) -> char {
        match self {
            Tag::Glue => '&',
            Tag::Direct => 'd',
            Tag::Single => 's',
            Tag::Tens => 't',
            Tag::Big => 'b',
            Tag::Fraction => 'f',
            Tag::DirectOrdinal => 'D',
            Tag::SingleOrdinal => 'S',
            Tag::TensOrdinal => 'T',
            Tag::BigOrdinal => 'B',
            Tag::Done => '_',
        }
    }

    /// Inverse of [`Tag::symbol`]. The wildcard `_` has no tag.
    pub const fn from_symbol(symbol: char) -> Option<Tag> {
        match symbol {
            '&' => Some(Tag::Glue),
            'd' => Some(Tag::Direct),
            's' => Some(Tag::Single),
            't' => Some(Tag::Tens),
            'b' => Some(Tag::Big),
            'f' => Some(Tag::Fraction),
            'D' => Some(Tag::DirectOrdinal),
            'S' => Some(Tag::SingleOrdinal),
            'T' => Some(Tag::TensOrdinal),
            'B' => Some(Tag::BigOrdinal),
            _ => None,
        }
    }

    pub(crate) fn mask(self) -> TagMask {
        match self {
            Tag::Glue => TagMask::GLUE,
            Tag::Direct => TagMask::DIRECT,
            Tag::Single => TagMask::SINGLE,
            Tag::Tens => TagMask::TENS,
            Tag::Big => TagMask::BIG,
            Tag::Fraction => TagMask::FRACTION,
            Tag::DirectOrdinal => TagMask::DIRECT_ORDINAL,
            Tag::SingleOrdinal => TagMask::SINGLE_ORDINAL,
            Tag::TensOrdinal => TagMask::TENS_ORDINAL,
            Tag::BigOrdinal => TagMask::BIG_ORDINAL,
            Tag::Done => TagMask::empty(),
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

bitflags::bitflags! {
    /// Set of tags present in a run (or required by a catalog entry).
    ///
    /// `Done` has no bit: inert values never take part in a match.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TagMask: u16 {
        const GLUE           = 1 << 0;
        const DIRECT         = 1 << 1;
        const SINGLE         = 1 << 2;
        const TENS           = 1 << 3;
        const BIG            = 1 << 4;
        const FRACTION       = 1 << 5;
        const DIRECT_ORDINAL = 1 << 6;
        const SINGLE_ORDINAL = 1 << 7;
        const TENS_ORDINAL   = 1 << 8;
        const BIG_ORDINAL    = 1 << 9;
    }
}

impl TagMask {
    /// Mask of every tag in `numerals`.
    pub(crate) fn of(numerals: &[Numeral]) -> TagMask {
        numerals.iter().fold(TagMask::empty(), |acc, n| acc | n.tag.mask())
    }
}

/// A tagged rational value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Numeral {
    pub(crate) numerator: i64,
    pub(crate) denominator: i64,
    pub(crate) tag: Tag,
    pub(crate) ordinal: bool,
}

impl Numeral {
    pub const fn new(numerator: i64, denominator: i64, tag: Tag, ordinal: bool) -> Self {
        Numeral { numerator, denominator, tag, ordinal }
    }

    /// Whole cardinal value (`n / 1`).
    pub const fn cardinal(n: i64, tag: Tag) -> Self {
        Numeral::new(n, 1, tag, false)
    }

    /// Whole ordinal value (`n / 1`, rendered with a suffix).
    pub const fn ordinal(n: i64, tag: Tag) -> Self {
        Numeral::new(n, 1, tag, true)
    }

    /// Unit fraction `1 / denominator`.
    pub const fn fraction(denominator: i64) -> Self {
        Numeral::new(1, denominator, Tag::Fraction, false)
    }

    /// The glue sentinel. Its zero denominator marks "not a quantity".
    pub const fn glue() -> Self {
        Numeral::new(0, 0, Tag::Glue, false)
    }

    pub fn numerator(&self) -> i64 {
        self.numerator
    }

    pub fn denominator(&self) -> i64 {
        self.denominator
    }

    pub fn tag(&self) -> Tag {
        self.tag
    }

    pub fn is_ordinal(&self) -> bool {
        self.ordinal
    }

    pub fn is_glue(&self) -> bool {
        self.tag == Tag::Glue
    }

    /// `numerator / denominator` as a float. Glue has no value and yields NaN.
    pub fn value(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    /// Rational sum; `None` on overflow. Tag is the larger of the two and
    /// the ordinal flag follows `other`.
    pub(crate) fn checked_add(self, other: Numeral) -> Option<Numeral> {
        let numerator = self
            .numerator
            .checked_mul(other.denominator)?
            .checked_add(other.numerator.checked_mul(self.denominator)?)?;
        let denominator = self.denominator.checked_mul(other.denominator)?;
        Some(Numeral { numerator, denominator, tag: self.tag.max(other.tag), ordinal: other.ordinal })
    }

    /// Rational product; same tagging rules as [`Numeral::checked_add`].
    pub(crate) fn checked_mul(self, other: Numeral) -> Option<Numeral> {
        let numerator = self.numerator.checked_mul(other.numerator)?;
        let denominator = self.denominator.checked_mul(other.denominator)?;
        Some(Numeral { numerator, denominator, tag: self.tag.max(other.tag), ordinal: other.ordinal })
    }
}

/// English ordinal suffix for `n`: 1st, 2nd, 3rd, but 11th, 12th, 13th.
pub fn ordinal_suffix(n: i64) -> &'static str {
    let last = n % 10;
    let last_two = n % 100;
    match last {
        1 if last_two != 11 => "st",
        2 if last_two != 12 => "nd",
        3 if last_two != 13 => "rd",
        _ => "th",
    }
}

impl fmt::Display for Numeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ordinal {
            return write!(f, "{}{}", self.numerator, ordinal_suffix(self.numerator));
        }

        if self.denominator != 1 {
            let fixed = format!("{:.6}", self.value());
            let trimmed = if fixed.contains('.') { fixed.trim_end_matches('0').trim_end_matches('.') } else { &fixed };
            return f.write_str(trimmed);
        }

        write!(f, "{}", self.numerator)
    }
}
