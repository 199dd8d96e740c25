use thiserror::Error;

/// All errors returned by `denseml-core`.
///
/// Every variant is a precondition violation detected before any result is
/// built, so an `Err` never comes with a partially computed matrix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// Element-wise operands do not have identical shapes.
    #[error("shape mismatch: {left:?} vs {right:?}")]
    ShapeMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },

    /// Matrix product where the left column count differs from the right
    /// row count.
    #[error("dimension mismatch: cannot multiply {left:?} by {right:?}")]
    DimensionMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },

    /// A reshape would change the number of elements.
    #[error("size mismatch: cannot reinterpret {from:?} as {to:?}")]
    SizeMismatch {
        from: (usize, usize),
        to: (usize, usize),
    },

    /// A `(row, col)` index lies outside the matrix.
    #[error("index ({row}, {col}) out of range for {rows}x{cols} matrix")]
    IndexOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// A matrix was requested with a zero row or column count, or with a
    /// data buffer that does not fill the requested shape.
    #[error("invalid shape {rows}x{cols}: {reason}")]
    InvalidShape {
        rows: usize,
        cols: usize,
        reason: &'static str,
    },

    /// A sampling parameter is out of its domain.
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: &'static str },
}

/// Convenience alias used throughout `denseml-core`.
pub type Result<T> = std::result::Result<T, MatrixError>;
