use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant};

/// The range (or single index) an operation was asked to work with, as written by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Index(isize),
    Range(isize, isize),
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Position::Index(i) => write!(f, "[{}]", i),
            Position::Range(i, j) => write!(f, "[{}:{}]", i, j),
        }
    }
}

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("end less than start {position}")]
pub struct RangeInvertedError {
    pub position: Position,
}

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("slice index {position} is negative")]
pub struct IndexNegativeError {
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexOutOfRangeError {
    pub position: Position,
    pub len: usize,
}

impl Display for IndexOutOfRangeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "index out of range {} with length {}", self.position, self.len)
    }
}

impl std::error::Error for IndexOutOfRangeError {}

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("can't expand slice by {count} elements")]
pub struct NegativeExpansionError {
    pub count: isize,
}

/// An expansion would make the result larger than a [`Vec`] can hold.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("expanding a slice of length {len} by {count} elements overflows its capacity")]
pub struct CapacityOverflowError {
    pub len: usize,
    pub count: usize,
}

/// Every way a positional argument to a splice can be wrong.
#[derive(Debug, Display, Error, From, IsVariant, Clone, PartialEq, Eq)]
pub enum RangeError {
    RangeInverted(RangeInvertedError),
    IndexNegative(IndexNegativeError),
    IndexOutOfRange(IndexOutOfRangeError),
    NegativeExpansion(NegativeExpansionError),
    CapacityOverflow(CapacityOverflowError),
}
