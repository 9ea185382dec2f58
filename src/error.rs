use thiserror::Error;

/// Errors returned by scalar extraction and vocabulary administration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Scalar extraction found no number at all.
    #[error("the input contains no number values")]
    NoNumberFound,

    /// More than one value remained after full reduction.
    #[error("the input contains more than one number ({count} values after reduction)")]
    AmbiguousNumber { count: usize },

    /// Scalar extraction requires every token to be numeric.
    #[error("the input contains a non-number: {token:?}")]
    NonNumericInput { token: String },

    /// Only ambiguous words can be toggled in a [`crate::Vocabulary`].
    #[error("{word:?} is not an ambiguous vocabulary word")]
    UnknownAmbiguousWord { word: String },
}

pub type Result<T> = std::result::Result<T, Error>;
