use std::fmt::{self, Display, Formatter};

use derive_more::IsVariant;

use super::{DynMap, DynPtr, DynSlice, Value};

/// A runtime description of a value's type.
///
/// Kinds are compared structurally, so `Slice(Int)` equals any other `Slice(Int)`. [`Kind::Any`]
/// is the placeholder for containers that hold values of mixed kinds; code that meets it has to
/// look at each value individually.
#[derive(Debug, Clone, PartialEq, Eq, Hash, IsVariant)]
pub enum Kind {
    Bool,
    /// Any signed integer, stored as `i64`.
    Int,
    /// Any unsigned integer, stored as `u64`.
    Uint,
    /// Any float, stored as `f64`.
    Float,
    Str,
    Unit,
    /// A single level of indirection to a value of the inner kind.
    Ptr(Box<Kind>),
    Slice(Box<Kind>),
    Map(Box<Kind>, Box<Kind>),
    Any,
}

impl Kind {
    pub fn ptr(pointee: Kind) -> Kind {
        Kind::Ptr(Box::new(pointee))
    }

    pub fn slice(elem: Kind) -> Kind {
        Kind::Slice(Box::new(elem))
    }

    pub fn map(key: Kind, value: Kind) -> Kind {
        Kind::Map(Box::new(key), Box::new(value))
    }

    /// Returns the kind one dereference away, if this is a [`Kind::Ptr`].
    pub fn pointee(&self) -> Option<&Kind> {
        match self {
            Kind::Ptr(inner) => Some(inner),
            _ => None,
        }
    }

    /// Returns the zero value for this kind: `false`, `0`, the empty string, a nil pointer, an
    /// empty container or [`Value::Nil`] for [`Kind::Any`].
    pub fn zero(&self) -> Value {
        match self {
            Kind::Bool => Value::Bool(false),
            Kind::Int => Value::Int(0),
            Kind::Uint => Value::Uint(0),
            Kind::Float => Value::Float(0.0),
            Kind::Str => Value::Str(String::new()),
            Kind::Unit => Value::Unit,
            Kind::Ptr(pointee) => Value::Ptr(DynPtr::nil((**pointee).clone())),
            Kind::Slice(elem) => Value::Slice(DynSlice::new((**elem).clone())),
            Kind::Map(key, value) => Value::Map(DynMap::new((**key).clone(), (**value).clone())),
            Kind::Any => Value::Nil,
        }
    }

    /// Returns true if a value of kind `other` can be stored where this kind is expected.
    ///
    /// Everything is assignable to [`Kind::Any`]; otherwise the kinds have to be identical.
    pub fn accepts(&self, other: &Kind) -> bool {
        self.is_any() || self == other
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Bool => write!(f, "bool"),
            Kind::Int => write!(f, "int"),
            Kind::Uint => write!(f, "uint"),
            Kind::Float => write!(f, "float"),
            Kind::Str => write!(f, "str"),
            Kind::Unit => write!(f, "()"),
            Kind::Ptr(pointee) => write!(f, "*{}", pointee),
            Kind::Slice(elem) => write!(f, "[{}]", elem),
            Kind::Map(key, value) => write!(f, "map[{}]{}", key, value),
            Kind::Any => write!(f, "any"),
        }
    }
}

/// The broad shapes an operation can demand of its operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Slice,
    Map,
}

impl Display for Shape {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Slice => write!(f, "slice"),
            Shape::Map => write!(f, "map"),
        }
    }
}
