use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant};

use super::{Kind, Shape};
use crate::collections::slice::{IndexOutOfRangeError, RangeError};

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("not a {expected}: {found}")]
pub struct InvalidKindError {
    pub expected: Shape,
    pub found: Kind,
}

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("expected a value of kind {expected}, found {found}")]
pub struct TypeMismatchError {
    pub expected: Kind,
    pub found: Kind,
}

/// Which argument of a two operand function an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    First,
    Second,
}

impl Display for Operand {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Operand::First => write!(f, "first"),
            Operand::Second => write!(f, "second"),
        }
    }
}

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("{operand} operand is {source}")]
pub struct InvalidOperandError {
    pub operand: Operand,
    pub source: InvalidKindError,
}

/// A comparator's declared signature can't describe a less-than function.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq, IsVariant)]
pub enum SignatureError {
    #[display("comparator must take two arguments, got {found}")]
    Arity { found: usize },
    #[display("comparator's arguments must be identical, got {first} and {second}")]
    ParamMismatch { first: Kind, second: Kind },
    #[display("comparator must have one result, got {found}")]
    ResultCount { found: usize },
    #[display("comparator result must be bool, got {found}")]
    ResultKind { found: Kind },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementTypeIncompatibleError {
    pub param: Kind,
    pub elem: Kind,
    /// The offending element, when the container's element kind is [`Kind::Any`] and elements
    /// were checked one at a time.
    pub index: Option<usize>,
}

impl Display for ElementTypeIncompatibleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.index {
            Some(i) => write!(
                f,
                "element {} has kind {}, which can't be passed as {}",
                i, self.elem, self.param
            ),
            None => write!(
                f,
                "slice element kind must be any, {} or a pointer to or from it, got {}",
                self.param, self.elem
            ),
        }
    }
}

impl std::error::Error for ElementTypeIncompatibleError {}

/// Two values without a natural ordering between them.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("can't compare {left} and {right}")]
pub struct IncomparableError {
    pub left: Kind,
    pub right: Kind,
}

#[derive(Debug, Display, Error, From, IsVariant, Clone, PartialEq, Eq)]
pub enum SetError {
    TypeMismatch(TypeMismatchError),
    IndexOutOfRange(IndexOutOfRangeError),
}

#[derive(Debug, Display, Error, From, IsVariant, Clone, PartialEq, Eq)]
pub enum SearchError {
    InvalidKind(InvalidKindError),
    TypeMismatch(TypeMismatchError),
}

#[derive(Debug, Display, Error, From, IsVariant, Clone, PartialEq, Eq)]
pub enum SpliceError {
    InvalidKind(InvalidKindError),
    Range(RangeError),
}

#[derive(Debug, Display, Error, From, IsVariant, Clone, PartialEq, Eq)]
pub enum UnifyError {
    InvalidOperand(InvalidOperandError),
    TypeMismatch(TypeMismatchError),
}

#[derive(Debug, Display, Error, From, IsVariant, Clone, PartialEq, Eq)]
pub enum SortError {
    InvalidKind(InvalidKindError),
    Signature(SignatureError),
    ElementTypeIncompatible(ElementTypeIncompatibleError),
}
