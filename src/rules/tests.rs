use crate::numeral::{Numeral, Tag};
use crate::rules::Combinator;
use crate::rules::catalog::{CATALOG, find_rewrite};

fn n(value: i64, tag: Tag) -> Numeral {
    Numeral::cardinal(value, tag)
}

fn ord(value: i64, tag: Tag) -> Numeral {
    Numeral::ordinal(value, tag)
}

#[test]
fn done_retags_without_changing_value() {
    let mut items = vec![n(20, Tag::Tens)];
    Combinator::Done.apply(&mut items, 0).unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].value(), 20.0);
    assert_eq!(items[0].tag(), Tag::Done);
}

#[test]
fn drop_preserves_order_of_the_rest() {
    let mut items = vec![n(1, Tag::Single), n(2, Tag::Single), n(3, Tag::Single)];
    Combinator::Drop.apply(&mut items, 1).unwrap();
    assert_eq!(items.iter().map(|i| i.numerator()).collect::<Vec<_>>(), vec![1, 3]);
}

#[test]
fn add_merges_and_takes_larger_tag() {
    let mut items = vec![n(20, Tag::Tens), n(3, Tag::Single)];
    Combinator::Add.apply(&mut items, 0).unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].value(), 23.0);
    assert_eq!(items[0].tag(), Tag::Tens);

    let mut items = vec![n(100, Tag::Big), Numeral::fraction(2)];
    Combinator::Add.apply(&mut items, 0).unwrap();
    assert_eq!(items[0].value(), 100.5);
    assert_eq!(items[0].tag(), Tag::Fraction);
}

#[test]
fn multiply_merges_values() {
    let mut items = vec![n(3, Tag::Single), n(100, Tag::Big)];
    Combinator::Multiply.apply(&mut items, 0).unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].value(), 300.0);
    assert_eq!(items[0].tag(), Tag::Big);

    let mut items = vec![n(100, Tag::Big), Numeral::fraction(4)];
    Combinator::Multiply.apply(&mut items, 0).unwrap();
    assert_eq!(items[0].value(), 25.0);
    assert_eq!(items[0].tag(), Tag::Fraction);
}

#[test]
fn combine_adds_big_before_small_and_multiplies_otherwise() {
    let mut items = vec![n(3, Tag::Single), n(100, Tag::Big)];
    Combinator::Combine.apply(&mut items, 0).unwrap();
    assert_eq!(items[0].value(), 300.0);

    let mut items = vec![n(100, Tag::Big), n(3, Tag::Single)];
    Combinator::Combine.apply(&mut items, 0).unwrap();
    assert_eq!(items[0].value(), 103.0);
    assert_eq!(items[0].tag(), Tag::Big);
}

#[test]
fn combine_to_lowest_fuses_pair_next_to_smaller_outer_value() {
    let mut items = vec![n(1000, Tag::Big), n(3, Tag::Single), n(100, Tag::Big)];
    Combinator::CombineToLowest.apply(&mut items, 0).unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].value(), 1000.0);
    assert_eq!(items[1].value(), 300.0);
    assert_eq!(items[1].tag(), Tag::Big);

    let mut items = vec![n(100, Tag::Big), n(3, Tag::Single), n(1000, Tag::Big)];
    Combinator::CombineToLowest.apply(&mut items, 0).unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].value(), 103.0);
    assert_eq!(items[1].value(), 1000.0);
}

#[test]
fn year_or_done_reads_colloquial_years() {
    let mut items = vec![n(19, Tag::Direct), n(88, Tag::Tens)];
    Combinator::YearOrDone.apply(&mut items, 0).unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].value(), 1988.0);
    assert_eq!(items[0].tag(), Tag::Done);

    let mut items = vec![n(20, Tag::Tens), n(15, Tag::Direct)];
    Combinator::YearOrDone.apply(&mut items, 0).unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].value(), 2015.0);
    assert_eq!(items[0].tag(), Tag::Done);
}

#[test]
fn year_or_done_marks_right_value_when_not_a_year() {
    let mut items = vec![n(30, Tag::Tens), n(0, Tag::Direct)];
    Combinator::YearOrDone.apply(&mut items, 0).unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].tag(), Tag::Tens);
    assert_eq!(items[1].tag(), Tag::Done);

    let mut items = vec![n(10, Tag::Direct), n(11, Tag::Direct)];
    Combinator::YearOrDone.apply(&mut items, 0).unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[1].tag(), Tag::Done);
}

#[test]
fn fraction_or_done() {
    let mut items = vec![n(1, Tag::Single), ord(4, Tag::SingleOrdinal)];
    Combinator::FractionOrDone.apply(&mut items, 0).unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].value(), 0.25);
    assert_eq!(items[0].tag(), Tag::Fraction);
    assert!(!items[0].is_ordinal());

    let mut items = vec![n(2, Tag::Single), ord(4, Tag::SingleOrdinal)];
    Combinator::FractionOrDone.apply(&mut items, 0).unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].value(), 2.0);
    assert_eq!(items[0].tag(), Tag::Done);
    assert_eq!(items[1].value(), 4.0);
    assert_eq!(items[1].tag(), Tag::SingleOrdinal);
    assert!(items[1].is_ordinal());
}

#[test]
fn fraction_or_combine() {
    let mut items = vec![n(1, Tag::Direct), ord(4, Tag::SingleOrdinal)];
    Combinator::FractionOrCombine.apply(&mut items, 0).unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].value(), 0.25);
    assert_eq!(items[0].tag(), Tag::Fraction);
    assert!(!items[0].is_ordinal());

    let mut items = vec![n(20, Tag::Tens), ord(4, Tag::SingleOrdinal)];
    Combinator::FractionOrCombine.apply(&mut items, 0).unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].value(), 24.0);
    assert_eq!(items[0].tag(), Tag::SingleOrdinal);
    assert!(items[0].is_ordinal());
}

#[test]
fn fraction_or_done_ignores_zeroth() {
    let mut items = vec![n(1, Tag::Direct), ord(0, Tag::DirectOrdinal)];
    Combinator::FractionOrDone.apply(&mut items, 0).unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].tag(), Tag::Done);
}

#[test]
fn add_and_sums_across_glue() {
    let mut items = vec![n(2, Tag::Single), Numeral::glue(), Numeral::fraction(2)];
    Combinator::AddAnd.apply(&mut items, 0).unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].value(), 2.5);
    assert_eq!(items[0].tag(), Tag::Fraction);
}

#[test]
fn overflow_leaves_buffer_untouched() {
    let mut items = vec![n(i64::MAX / 2, Tag::Big), n(1000, Tag::Big)];
    let before = items.clone();
    let err = Combinator::Multiply.apply(&mut items, 0).unwrap_err();
    assert_eq!(err.index, 0);
    assert_eq!(items, before);
}

#[test]
fn catalog_patterns_use_known_symbols() {
    for rewrite in CATALOG.iter() {
        assert!(!rewrite.pattern.is_empty());
        for symbol in rewrite.pattern.chars() {
            assert!(Tag::from_symbol(symbol).is_some(), "unknown symbol `{symbol}` in `{}`", rewrite.pattern);
        }
    }
}

#[test]
fn catalog_has_no_duplicates_and_no_unlisted_bt() {
    let mut seen = std::collections::HashSet::new();
    for rewrite in CATALOG.iter() {
        assert!(seen.insert(rewrite.pattern), "duplicate pattern `{}`", rewrite.pattern);
    }
    assert!(!seen.contains("bT"));
    assert_eq!(CATALOG.first().map(|r| r.pattern), Some("ts"));
    assert_eq!(CATALOG.last().map(|r| r.pattern), Some("&"));
}

#[test]
fn find_rewrite_prefers_priority_then_rightmost() {
    // `ts` outranks `sb` even though `sb` appears first.
    let pattern = "sbts";
    let (rewrite, idx) = find_rewrite(pattern, crate::numeral::TagMask::all()).unwrap();
    assert_eq!(rewrite.pattern, "ts");
    assert_eq!(idx, 2);

    // Two occurrences: the right-most wins.
    let (rewrite, idx) = find_rewrite("tsbts", crate::numeral::TagMask::all()).unwrap();
    assert_eq!(rewrite.pattern, "ts");
    assert_eq!(idx, 3);

    assert!(find_rewrite("_s_", crate::numeral::TagMask::SINGLE).is_none());
}
