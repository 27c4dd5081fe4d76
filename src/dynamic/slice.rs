use std::fmt::{self, Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::slice;

use super::{DynMap, InvalidKindError, Kind, SetError, Shape, TypeMismatchError, Typed, Value};
use crate::collections::slice::{IndexOutOfRangeError, Position};
use crate::util::fmt::DebugDisplay;

/// An ordered, growable container of [`Value`]s that all share one element [`Kind`].
///
/// The element kind is fixed when the slice is created. Every way of putting a value in checks it
/// against that kind, so code reading a `DynSlice` can trust [`elem`](DynSlice::elem). A slice of
/// [`Kind::Any`] accepts values of every kind.
///
/// `DynSlice` derefs to `[Value]` for read access. There is deliberately no `DerefMut`, because
/// writing through it would skip the kind check.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the DynSlice.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `len` | `O(1)` |
/// | `set` | `O(1)` |
/// | `push` | `O(1)`* |
/// | `swap` | `O(1)` |
/// | `make_like` | `O(n)` |
///
/// \* Amortized, as with [`Vec::push`].
#[derive(Clone, PartialEq, Eq)]
pub struct DynSlice {
    elem: Kind,
    items: Vec<Value>,
}

impl DynSlice {
    /// Creates an empty slice of the provided element kind.
    pub const fn new(elem: Kind) -> DynSlice {
        DynSlice {
            elem,
            items: Vec::new(),
        }
    }

    /// Creates a slice from `values`, checking each one against `elem`.
    ///
    /// # Examples
    /// ```
    /// # use slice_kit::dynamic::{DynSlice, Kind, Value};
    /// let slice = DynSlice::from_values(Kind::Any, [Value::Int(1), Value::from("a")]).unwrap();
    /// assert_eq!(slice.len(), 2);
    /// assert!(DynSlice::from_values(Kind::Int, [Value::from("a")]).is_err());
    /// ```
    pub fn from_values<I>(elem: Kind, values: I) -> Result<DynSlice, TypeMismatchError>
    where
        I: IntoIterator<Item = Value>,
    {
        let values = values.into_iter();
        let mut slice = DynSlice {
            elem,
            items: Vec::with_capacity(values.size_hint().0),
        };
        for value in values {
            slice.push(value)?;
        }
        Ok(slice)
    }

    /// Creates a slice from a [`Vec`] of statically typed values.
    ///
    /// # Examples
    /// ```
    /// # use slice_kit::dynamic::{DynSlice, Kind};
    /// let slice = DynSlice::of(vec![1_u8, 2, 3]);
    /// assert_eq!(*slice.elem(), Kind::Uint);
    /// assert_eq!(slice.to_typed::<u8>().unwrap(), [1, 2, 3]);
    /// ```
    pub fn of<T: Typed>(values: Vec<T>) -> DynSlice {
        DynSlice {
            elem: T::kind(),
            items: values.into_iter().map(T::into_value).collect(),
        }
    }

    /// Creates a slice of `len` zero values of the same element kind as this one.
    pub fn make_like(&self, len: usize) -> DynSlice {
        DynSlice {
            elem: self.elem.clone(),
            items: (0..len).map(|_| self.elem.zero()).collect(),
        }
    }

    /// Wraps values that are already known to match `elem`.
    pub(crate) fn from_parts(elem: Kind, items: Vec<Value>) -> DynSlice {
        debug_assert!(items.iter().all(|item| elem.accepts(&item.kind())));
        DynSlice { elem, items }
    }

    pub const fn elem(&self) -> &Kind {
        &self.elem
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    pub fn iter(&self) -> slice::Iter<'_, Value> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.items
    }

    pub fn into_values(self) -> Vec<Value> {
        self.items
    }

    /// Replaces the value at `index`, returning the previous one.
    pub fn set(&mut self, index: usize, value: Value) -> Result<Value, SetError> {
        self.check_kind(&value)?;
        let len = self.len();
        let position = Position::Index(isize::try_from(index).unwrap_or(isize::MAX));
        match self.items.get_mut(index) {
            Some(slot) => Ok(std::mem::replace(slot, value)),
            None => Err(IndexOutOfRangeError { position, len }.into()),
        }
    }

    /// Appends `value` to the end of the slice.
    pub fn push(&mut self, value: Value) -> Result<(), TypeMismatchError> {
        self.check_kind(&value)?;
        self.items.push(value);
        Ok(())
    }

    /// Exchanges the values at `a` and `b`.
    ///
    /// # Panics
    /// Panics if either index is out of bounds.
    pub fn swap(&mut self, a: usize, b: usize) {
        self.items.swap(a, b);
    }

    /// Copies the values out into a [`Vec`] of a static type.
    ///
    /// Fails if `T`'s kind isn't the element kind, or if a value doesn't fit in `T`.
    pub fn to_typed<T: Typed>(&self) -> Result<Vec<T>, TypeMismatchError> {
        let expected = T::kind();
        if self.elem != expected {
            return Err(TypeMismatchError {
                expected,
                found: self.elem.clone(),
            });
        }

        self.items
            .iter()
            .map(|item| {
                T::from_value(item).ok_or_else(|| TypeMismatchError {
                    expected: expected.clone(),
                    found: item.kind(),
                })
            })
            .collect()
    }

    fn check_kind(&self, value: &Value) -> Result<(), TypeMismatchError> {
        let found = value.kind();
        if self.elem.accepts(&found) {
            Ok(())
        } else {
            Err(TypeMismatchError {
                expected: self.elem.clone(),
                found,
            })
        }
    }
}

impl Deref for DynSlice {
    type Target = [Value];

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl<'a> IntoIterator for &'a DynSlice {
    type Item = &'a Value;
    type IntoIter = slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for DynSlice {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl Hash for DynSlice {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.elem.hash(state);
        self.items.hash(state);
    }
}

impl Debug for DynSlice {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynSlice")
            .field("elem", &DebugDisplay(&self.elem))
            .field("items", &self.items)
            .finish()
    }
}

impl Value {
    /// Returns the slice inside this value, or an error naming the kind that was found instead.
    pub fn as_slice(&self) -> Result<&DynSlice, InvalidKindError> {
        match self {
            Value::Slice(slice) => Ok(slice),
            other => Err(InvalidKindError {
                expected: Shape::Slice,
                found: other.kind(),
            }),
        }
    }

    pub fn as_slice_mut(&mut self) -> Result<&mut DynSlice, InvalidKindError> {
        match self {
            Value::Slice(slice) => Ok(slice),
            other => Err(InvalidKindError {
                expected: Shape::Slice,
                found: other.kind(),
            }),
        }
    }

    /// Returns the map inside this value, or an error naming the kind that was found instead.
    pub fn as_map(&self) -> Result<&DynMap, InvalidKindError> {
        match self {
            Value::Map(map) => Ok(map),
            other => Err(InvalidKindError {
                expected: Shape::Map,
                found: other.kind(),
            }),
        }
    }
}

impl From<DynSlice> for Value {
    fn from(value: DynSlice) -> Self {
        Value::Slice(value)
    }
}
