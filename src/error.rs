use thiserror::Error;

/// Failure cases of position and membership lookups.
///
/// `remove`, `index_of` and `index_in` report absence through
/// [`ListError::NotFound`]; the exploratory lookups `find`/`rfind` return
/// `None` instead. Both shapes are part of the contract, pick by whether
/// absence is an error for the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ListError {
    /// No element equal to the probe value exists in the searched range.
    #[error("value not found")]
    NotFound,

    /// A signed position fell outside `[-len, len)`.
    #[error("position {index} out of range for list of length {len}")]
    OutOfRange { index: isize, len: usize },

    /// A search window whose start lies past its end, after the end has
    /// been clamped to the list length.
    #[error("search range starts at {start} but ends at {end}")]
    InvalidRange { start: usize, end: usize },
}
