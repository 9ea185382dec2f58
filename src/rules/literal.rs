//! Literal numerals written with digits: `42`, `1,200`, `2.5`, `21st`.

use crate::numeral::{Numeral, Tag};

/// Continued-fraction expansion stops once the denominator would pass this.
const MAX_DENOMINATOR: i64 = 1_000_000_000_000;
const MAX_TERMS: usize = 64;

/// Interpret `text` as a digit literal.
///
/// Thousands separators are ignored and one trailing `st`/`nd`/`rd`/`th`
/// marks an integer ordinal (the suffix is not checked against the digit, so
/// `1th` is accepted). Decimals are never ordinal: `2.5th` reads as `2.5`.
/// Returns `None` when the text is not a number.
pub(crate) fn classify_literal(text: &str) -> Option<Numeral> {
    let cleaned = text.replace(',', "");
    if !cleaned.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }

    let (body, ordinal) = split_ordinal_suffix(&cleaned);

    if let Ok(n) = body.parse::<i64>() {
        return Some(Numeral::new(n, 1, integer_tag(n, ordinal), ordinal));
    }

    let value = body.parse::<f64>().ok().filter(|v| v.is_finite())?;
    let (numerator, denominator) = rational_from_f64(value)?;
    Some(Numeral::new(numerator, denominator, Tag::Fraction, false))
}

fn split_ordinal_suffix(text: &str) -> (&str, bool) {
    match regex!(r"(?s)^(.*)(?:st|nd|rd|th)$").captures(text) {
        Some(caps) => (caps.get(1).map_or("", |m| m.as_str()), true),
        None => (text, false),
    }
}

fn integer_tag(n: i64, ordinal: bool) -> Tag {
    match (n, ordinal) {
        (1..=9, false) => Tag::Single,
        (20..=99, false) => Tag::Tens,
        (100.., false) => Tag::Big,
        (_, false) => Tag::Direct,
        (1..=9, true) => Tag::SingleOrdinal,
        (20..=99, true) => Tag::TensOrdinal,
        (100.., true) => Tag::BigOrdinal,
        (_, true) => Tag::DirectOrdinal,
    }
}

/// Fraction that converts back to exactly `value`, or the last convergent
/// whose denominator stays within bounds.
pub(crate) fn rational_from_f64(value: f64) -> Option<(i64, i64)> {
    if !value.is_finite() || value.abs() >= i64::MAX as f64 {
        return None;
    }

    // Convergents h/k, seeded with h(-2)/k(-2) = 0/1 and h(-1)/k(-1) = 1/0.
    let (mut h_prev, mut h) = (0i64, 1i64);
    let (mut k_prev, mut k) = (1i64, 0i64);
    let mut x = value;

    for _ in 0..MAX_TERMS {
        let term = x.floor();
        let a = term as i64;
        let h_next = a.checked_mul(h)?.checked_add(h_prev)?;
        let k_next = a.checked_mul(k)?.checked_add(k_prev)?;
        if k_next > MAX_DENOMINATOR {
            break;
        }
        (h_prev, h, k_prev, k) = (h, h_next, k, k_next);

        let remainder = x - term;
        if h as f64 / k as f64 == value || remainder == 0.0 {
            break;
        }
        x = 1.0 / remainder;
    }

    if k == 0 { None } else { Some((h, k)) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_bucket_by_magnitude() {
        let cases = [
            ("0", 0, Tag::Direct),
            ("7", 7, Tag::Single),
            ("15", 15, Tag::Direct),
            ("42", 42, Tag::Tens),
            ("100", 100, Tag::Big),
            ("1,200", 1200, Tag::Big),
            ("0033", 33, Tag::Tens),
            ("-4", -4, Tag::Direct),
        ];
        for (input, value, tag) in cases {
            let n = classify_literal(input).unwrap_or_else(|| panic!("{input} should be a literal"));
            assert_eq!(n.numerator(), value, "{input}");
            assert_eq!(n.denominator(), 1, "{input}");
            assert_eq!(n.tag(), tag, "{input}");
            assert!(!n.is_ordinal(), "{input}");
        }
    }

    #[test]
    fn ordinal_suffixes_mark_ordinals() {
        let cases = [
            ("1st", 1, Tag::SingleOrdinal),
            ("2nd", 2, Tag::SingleOrdinal),
            ("13th", 13, Tag::DirectOrdinal),
            ("0th", 0, Tag::DirectOrdinal),
            ("21st", 21, Tag::TensOrdinal),
            ("100th", 100, Tag::BigOrdinal),
            ("1th", 1, Tag::SingleOrdinal),
        ];
        for (input, value, tag) in cases {
            let n = classify_literal(input).unwrap_or_else(|| panic!("{input} should be a literal"));
            assert_eq!(n.numerator(), value, "{input}");
            assert_eq!(n.tag(), tag, "{input}");
            assert!(n.is_ordinal(), "{input}");
        }
    }

    #[test]
    fn decimals_become_exact_fractions() {
        let half = classify_literal("2.5").unwrap();
        assert_eq!((half.numerator(), half.denominator()), (5, 2));
        assert_eq!(half.tag(), Tag::Fraction);

        let tenth = classify_literal("0.1").unwrap();
        assert_eq!((tenth.numerator(), tenth.denominator()), (1, 10));

        let whole = classify_literal("100,000.0").unwrap();
        assert_eq!(whole.value(), 100000.0);
        assert_eq!(whole.tag(), Tag::Fraction);

        let suffixed = classify_literal("2.5th").unwrap();
        assert_eq!(suffixed.tag(), Tag::Fraction);
        assert!(!suffixed.is_ordinal());
        assert_eq!(suffixed.to_string(), "2.5");
    }

    #[test]
    fn decimals_keep_full_precision() {
        let cases = [("1000000.0000001", 1000000.0000001), ("0.000000000001", 1e-12)];
        for (input, expected) in cases {
            let n = classify_literal(input).unwrap_or_else(|| panic!("{input} should be a literal"));
            assert_eq!(n.value(), expected, "{input}");
        }
    }

    #[test]
    fn rejects_non_numbers() {
        for input in ["foo", "north", "th", "1/2", "07/10", "inf", "NaN", "", "o'clock", "1st2"] {
            assert!(classify_literal(input).is_none(), "{input} should not be a literal");
        }
    }

    #[test]
    fn rendering_round_trips_through_classification() {
        for input in ["0", "9", "17", "42", "1492", "7275578887", "2.5", "0.25", "0.0625", "2.5th", "1st", "22nd", "113th"] {
            let first = classify_literal(input).unwrap();
            let again = classify_literal(&first.to_string()).unwrap();
            assert_eq!(first.value(), again.value(), "{input}");
            assert_eq!(first.is_ordinal(), again.is_ordinal(), "{input}");
        }
    }

    #[test]
    fn continued_fractions_find_small_denominators() {
        assert_eq!(rational_from_f64(0.75), Some((3, 4)));
        assert_eq!(rational_from_f64(-2.5), Some((-5, 2)));
        assert_eq!(rational_from_f64(3.0), Some((3, 1)));
        assert_eq!(rational_from_f64(0.125), Some((1, 8)));
        assert_eq!(rational_from_f64(f64::INFINITY), None);
    }
}
