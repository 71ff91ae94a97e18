//! This module contains the error and result definitions used in this crate.

use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// An enumeration of the errors that can occur when constructing or mutating
/// a [Board](../struct.Board.html).
///
/// Note that [BoardError::InconsistentAssignment] is an expected outcome in
/// the solver and the generator, where it signals a dead search branch or a
/// failed generation attempt rather than a programming error. Out-of-range
/// coordinates, on the other hand, are precondition violations and panic.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BoardError {

    /// Indicates that the size specified for a created board is invalid.
    /// This is the case if it is zero, not a perfect square, or larger than
    /// the supported maximum of 64.
    InvalidSize,

    /// Indicates that an assignment contradicts the current board state,
    /// either directly or through the elimination cascade it triggered. The
    /// payload identifies the cell at which the contradiction surfaced.
    InconsistentAssignment {

        /// The column (x-coordinate) of the contradicting cell.
        column: usize,

        /// The row (y-coordinate) of the contradicting cell.
        row: usize,

        /// The value whose assignment or elimination was contradictory.
        value: usize
    }
}

impl Display for BoardError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidSize =>
                write!(f, "board size must be a positive perfect square"),
            BoardError::InconsistentAssignment { column, row, value } =>
                write!(f,
                    "inconsistent assignment of value {} at column {}, row {}",
                    value, column, row)
        }
    }
}

impl Error for BoardError { }

/// Syntactic sugar for `Result<V, BoardError>`.
pub type BoardResult<V> = Result<V, BoardError>;
