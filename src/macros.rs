#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

/// Declare one catalog entry: `rewrite!("pattern" => Combinator)`.
///
/// The tag mask is derived from the pattern symbols when the entry is built.
#[macro_export]
macro_rules! rewrite {
    ($pattern:literal => $combinator:ident) => {
        $crate::rules::catalog::Rewrite::new($pattern, $crate::rules::Combinator::$combinator)
    };
}
