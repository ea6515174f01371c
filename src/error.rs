use thiserror::Error;

/// A specialized Result type for spline construction.
pub type SplineResult<T> = Result<T, SplineError>;

/// Errors reported while building a spline. Evaluation itself never fails;
/// every failure surfaces at construction time.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SplineError {
    /// The supplied points cannot define a spline.
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// Description of what is wrong with the input.
        reason: String,
    },

    /// The derivative solver hit a vanishing pivot during elimination.
    ///
    /// The clamped system is diagonally dominant, so for inputs that pass the
    /// [SplineError::InvalidInput] checks this is unreachable.
    #[error("singular system: zero pivot in row {row}")]
    SingularSystem {
        /// Elimination row where the pivot vanished.
        row: usize,
    },
}

impl SplineError {
    pub(crate) fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}
