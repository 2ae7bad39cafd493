use thiserror::Error;

/// Caller-contract violations at the model boundary.
///
/// Neither variant can arise from internal logic once inputs are validated;
/// both mark bad input from the hosting shell and should be surfaced rather
/// than swallowed.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum CubeError {
    /// A face symbol other than U, D, L, R, F, or B.
    #[error("unrecognized face identifier {0:?}")]
    InvalidFace(char),
    /// A sticker coordinate outside the 3×3 grid.
    #[error("sticker index out of range: row {row}, col {col}")]
    IndexOutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
}
