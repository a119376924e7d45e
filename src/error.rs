use thiserror::Error;

/// Errors raised by matrix operations.
///
/// Both variants indicate a programming error in the caller; nothing in the
/// simulation recovers from them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("dimension mismatch in {op}: {}x{} vs {}x{}", lhs.0, lhs.1, rhs.0, rhs.1)]
    DimensionMismatch {
        op: &'static str,
        lhs: (usize, usize),
        rhs: (usize, usize),
    },

    #[error("index ({row}, {col}) out of range for {rows}x{cols} matrix")]
    OutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
