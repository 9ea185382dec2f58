//! Whitespace tokenizer.

/// Split `text` into words.
///
/// Hyphens separate words ("twenty-one" -> "twenty", "one") and commas are
/// removed first so thousands separators do not split literals.
pub fn tokenize(text: &str) -> Vec<String> {
    let without_commas = text.replace(',', "");
    regex!(r"[\s\-]+").split(&without_commas).filter(|word| !word.is_empty()).map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_whitespace_and_hyphens() {
        assert_eq!(tokenize("twenty-one  thousand\tfour"), vec!["twenty", "one", "thousand", "four"]);
        assert_eq!(tokenize("  -leading and trailing- "), vec!["leading", "and", "trailing"]);
    }

    #[test]
    fn strips_commas() {
        assert_eq!(tokenize("3,000,000 apples, pears"), vec!["3000000", "apples", "pears"]);
    }

    #[test]
    fn empty_input_has_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" - ").is_empty());
    }
}
