use thiserror::Error;

/// Top-level error type for the Lumis ray tracer.
#[derive(Debug, Error)]
pub enum LumisError {
    #[error(transparent)]
    Algebra(#[from] AlgebraError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Output(#[from] OutputError),
}

/// Errors raised by structurally invalid vector and matrix operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AlgebraError {
    #[error("dimension mismatch in {operation}: expected {expected}, found {found}")]
    DimensionMismatch {
        operation: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("{kind} index {index} is out of range (length {len})")]
    IndexOutOfRange {
        kind: &'static str,
        index: usize,
        len: usize,
    },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Errors related to rendering an image.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to build render thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("invalid render parameters: {0}")]
    InvalidParameters(String),
}

/// Errors related to writing rendered images.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to write image: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for results using [`LumisError`].
pub type Result<T> = std::result::Result<T, LumisError>;
