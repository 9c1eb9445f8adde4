use thiserror::Error;

/// Errors produced by the spectral core.
///
/// All of these are recoverable by the caller (re-prompt for valid input);
/// none is fatal and none hides a NaN/Infinity — invalid inputs are rejected
/// before any formula is evaluated.
#[derive(Debug, Error, PartialEq)]
pub enum SpectraError {
    /// Non-physical quantum numbers (n1 ≥ n2, n < 1, Z < 1, l ∉ [0, n), …).
    #[error("invalid quantum input: {0}")]
    InvalidInput(String),

    /// Unknown element symbol.
    #[error("unknown element symbol '{0}'")]
    UnknownElement(String),

    /// Unknown spectral series name.
    #[error("unknown spectral series '{0}'")]
    UnknownSeries(String),

    /// A derived quantity came out non-physical (e.g. E ≤ 0 in the
    /// approximate-energy formula), so the dependent value is undefined.
    #[error("degenerate computation: {0}")]
    Degenerate(String),
}

impl SpectraError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        SpectraError::InvalidInput(msg.into())
    }
}
