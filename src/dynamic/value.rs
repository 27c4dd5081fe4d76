use std::hash::{Hash, Hasher};
use std::mem;

use derive_more::IsVariant;

use super::{DynMap, DynSlice, Kind};

/// A value whose type is only known at runtime.
///
/// Equality is deep: containers compare element by element and pointers compare their targets,
/// never their addresses. Floats compare numerically, except that every NaN equals every other
/// NaN. That keeps [`Eq`] and [`Hash`] consistent, so any value can be used as a set element.
#[derive(Debug, Clone, IsVariant)]
pub enum Value {
    /// The zero value of [`Kind::Any`].
    Nil,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    Str(String),
    Unit,
    Ptr(DynPtr),
    Slice(DynSlice),
    Map(DynMap),
}

impl Value {
    /// Wraps a statically typed value.
    pub fn of<T: Typed>(value: T) -> Value {
        value.into_value()
    }

    /// Returns the kind of this particular value. [`Value::Nil`] reports [`Kind::Any`].
    pub fn kind(&self) -> Kind {
        match self {
            Value::Nil => Kind::Any,
            Value::Bool(_) => Kind::Bool,
            Value::Int(_) => Kind::Int,
            Value::Uint(_) => Kind::Uint,
            Value::Float(_) => Kind::Float,
            Value::Str(_) => Kind::Str,
            Value::Unit => Kind::Unit,
            Value::Ptr(ptr) => Kind::ptr(ptr.pointee().clone()),
            Value::Slice(slice) => Kind::slice(slice.elem().clone()),
            Value::Map(map) => Kind::map(map.key().clone(), map.value().clone()),
        }
    }

    /// Unpacks into a statically typed value, if the kinds line up.
    pub fn to_typed<T: Typed>(&self) -> Option<T> {
        T::from_value(self)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_owned())
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Uint(a), Value::Uint(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Unit, Value::Unit) => true,
            (Value::Ptr(a), Value::Ptr(b)) => a == b,
            (Value::Slice(a), Value::Slice(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        mem::discriminant(self).hash(state);
        match self {
            Value::Nil | Value::Unit => {},
            Value::Bool(b) => b.hash(state),
            Value::Int(i) => i.hash(state),
            Value::Uint(u) => u.hash(state),
            Value::Float(f) => canonical_bits(*f).hash(state),
            Value::Str(s) => s.hash(state),
            Value::Ptr(ptr) => ptr.hash(state),
            Value::Slice(slice) => slice.hash(state),
            // Map entries have no order to hash in; the length is consistent with equality.
            Value::Map(map) => map.len().hash(state),
        }
    }
}

// Collapses -0.0 into 0.0 and every NaN into one representation, matching `eq` above.
fn canonical_bits(value: f64) -> u64 {
    if value.is_nan() {
        f64::NAN.to_bits()
    } else if value == 0.0 {
        0.0_f64.to_bits()
    } else {
        value.to_bits()
    }
}

/// A single level of indirection, which may be nil.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DynPtr {
    pointee: Kind,
    target: Option<Box<Value>>,
}

impl DynPtr {
    /// Creates a nil pointer to a value of kind `pointee`.
    pub const fn nil(pointee: Kind) -> DynPtr {
        DynPtr { pointee, target: None }
    }

    /// Creates a pointer to `value`, typed by the value's own kind.
    pub fn to(value: Value) -> DynPtr {
        DynPtr {
            pointee: value.kind(),
            target: Some(Box::new(value)),
        }
    }

    pub const fn pointee(&self) -> &Kind {
        &self.pointee
    }

    pub const fn is_nil(&self) -> bool {
        self.target.is_none()
    }

    /// Returns the value pointed to, or [`None`] for a nil pointer.
    pub fn target(&self) -> Option<&Value> {
        self.target.as_deref()
    }
}

/// A Rust type with a fixed [`Kind`], which can move in and out of a [`Value`].
pub trait Typed: Sized {
    fn kind() -> Kind;

    fn into_value(self) -> Value;

    /// Copies the value back out, returning [`None`] if its kind doesn't match or it doesn't fit.
    fn from_value(value: &Value) -> Option<Self>;
}

macro_rules! impl_typed_int {
    ($variant:ident, $store:ty, $($int:ty),+) => {
        $(
            impl Typed for $int {
                fn kind() -> Kind {
                    Kind::$variant
                }

                fn into_value(self) -> Value {
                    Value::$variant(self as $store)
                }

                fn from_value(value: &Value) -> Option<Self> {
                    match value {
                        Value::$variant(v) => <$int>::try_from(*v).ok(),
                        _ => None,
                    }
                }
            }
        )+
    };
}

impl_typed_int!(Int, i64, i8, i16, i32, i64, isize);
impl_typed_int!(Uint, u64, u8, u16, u32, u64, usize);

impl Typed for bool {
    fn kind() -> Kind {
        Kind::Bool
    }

    fn into_value(self) -> Value {
        Value::Bool(self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl Typed for f64 {
    fn kind() -> Kind {
        Kind::Float
    }

    fn into_value(self) -> Value {
        Value::Float(self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }
}

impl Typed for f32 {
    fn kind() -> Kind {
        Kind::Float
    }

    fn into_value(self) -> Value {
        Value::Float(self as f64)
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Float(f) => Some(*f as f32),
            _ => None,
        }
    }
}

impl Typed for String {
    fn kind() -> Kind {
        Kind::Str
    }

    fn into_value(self) -> Value {
        Value::Str(self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Str(s) => Some(s.clone()),
            _ => None,
        }
    }
}

impl Typed for () {
    fn kind() -> Kind {
        Kind::Unit
    }

    fn into_value(self) -> Value {
        Value::Unit
    }

    fn from_value(value: &Value) -> Option<Self> {
        value.is_unit().then_some(())
    }
}

/// Boxes map to non-nil pointers.
impl<T: Typed> Typed for Box<T> {
    fn kind() -> Kind {
        Kind::ptr(T::kind())
    }

    fn into_value(self) -> Value {
        Value::Ptr(DynPtr {
            pointee: T::kind(),
            target: Some(Box::new((*self).into_value())),
        })
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Ptr(ptr) if *ptr.pointee() == T::kind() => {
                ptr.target().and_then(T::from_value).map(Box::new)
            },
            _ => None,
        }
    }
}

impl<T: Typed> Typed for Vec<T> {
    fn kind() -> Kind {
        Kind::slice(T::kind())
    }

    fn into_value(self) -> Value {
        Value::Slice(DynSlice::of(self))
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Slice(slice) => slice.to_typed().ok(),
            _ => None,
        }
    }
}
