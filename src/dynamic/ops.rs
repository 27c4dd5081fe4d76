use std::collections::HashSet;

use log::debug;

use super::{
    DynMap, DynSlice, InvalidKindError, InvalidOperandError, Kind, Operand, SearchError,
    SpliceError, TypeMismatchError, UnifyError, Value,
};
use crate::collections::slice::{check_cut, check_delete, check_expand, join, splice_in};

/// Returns the index of the first element deeply equal to `item`, or [`None`] if there isn't one.
///
/// `item` has to have exactly the slice's element kind, unless the element kind is
/// [`Kind::Any`], in which case an item of any kind is accepted and simply compared against each
/// element.
///
/// Equality is [`Value`]'s deep equality, so a NaN item finds a NaN element, and `-0.0` finds
/// `0.0`.
///
/// # Examples
/// ```
/// # use slice_kit::dynamic::{self, DynSlice, Value};
/// let container = Value::Slice(DynSlice::of(vec![String::from("a"), String::from("b")]));
/// assert_eq!(dynamic::index(&container, &Value::from("b")), Ok(Some(1)));
/// assert!(dynamic::index(&container, &Value::Int(1)).unwrap_err().is_type_mismatch());
/// ```
pub fn index(container: &Value, item: &Value) -> Result<Option<usize>, SearchError> {
    let slice = as_slice(container, "index")?;

    let found = item.kind();
    if !slice.elem().accepts(&found) {
        debug!("index: element kind {} doesn't match item kind {}", slice.elem(), found);
        return Err(TypeMismatchError {
            expected: slice.elem().clone(),
            found,
        }
        .into());
    }

    Ok(slice.iter().position(|candidate| candidate == item))
}

/// Returns true if the slice in `container` holds an element deeply equal to `item`.
pub fn contains(container: &Value, item: &Value) -> Result<bool, SearchError> {
    index(container, item).map(|i| i.is_some())
}

/// Returns a new slice without the element at index `i`.
///
/// # Examples
/// ```
/// # use slice_kit::dynamic::{self, DynSlice, Value};
/// let container = Value::of(vec![String::from("1"), String::from("2"), String::from("3")]);
/// let deleted = dynamic::delete_at(&container, 2).unwrap();
/// assert_eq!(deleted.to_typed::<Vec<String>>().unwrap(), ["1", "2"]);
/// assert!(dynamic::delete_at(&container, 3).is_err());
/// ```
pub fn delete_at(container: &Value, i: i64) -> Result<Value, SpliceError> {
    let slice = as_slice(container, "delete_at")?;
    let (start, end) = check_delete(to_isize(i), slice.len())
        .inspect_err(|e| debug!("delete_at: {}", e))?;
    Ok(rebuild(slice, join(slice.as_slice(), start, end)))
}

/// Returns a new slice without the elements in `[i, j)`.
pub fn cut(container: &Value, i: i64, j: i64) -> Result<Value, SpliceError> {
    let slice = as_slice(container, "cut")?;
    let (start, end) = check_cut(to_isize(i), to_isize(j), slice.len())
        .inspect_err(|e| debug!("cut: {}", e))?;
    Ok(rebuild(slice, join(slice.as_slice(), start, end)))
}

/// Returns a new slice with `count` zero values inserted immediately before index `i`.
///
/// # Examples
/// ```
/// # use slice_kit::dynamic::{self, DynSlice, Value};
/// let container = Value::of(vec![String::from("a"), String::from("b"), String::from("c")]);
/// let expanded = dynamic::expand(&container, 0, 6).unwrap();
/// let strings = expanded.to_typed::<Vec<String>>().unwrap();
/// assert_eq!(strings.len(), 9);
/// assert_eq!(strings[6..], ["a", "b", "c"]);
/// ```
pub fn expand(container: &Value, i: i64, count: i64) -> Result<Value, SpliceError> {
    let slice = as_slice(container, "expand")?;
    let (at, count) = check_expand::<Value>(to_isize(i), to_isize(count), slice.len())
        .inspect_err(|e| debug!("expand: {}", e))?;
    let elem = slice.elem();
    let items = splice_in(slice.as_slice(), at, count, || elem.zero())
        .inspect_err(|e| debug!("expand: {}", e))?;
    Ok(rebuild(slice, items))
}

/// Returns a new slice of the elements for which `keep` returns true.
pub fn retain<F>(container: &Value, mut keep: F) -> Result<Value, InvalidKindError>
where
    F: FnMut(&Value) -> bool,
{
    let slice = container.as_slice()?;
    let kept = slice.iter().filter(|item| keep(item)).cloned().collect();
    Ok(rebuild(slice, kept))
}

/// Splits the slice in `container` into the elements that don't match `pred` and the elements that
/// do. Both halves keep the element kind and the original order.
pub fn pop_where<F>(container: &Value, mut pred: F) -> Result<(Value, Value), InvalidKindError>
where
    F: FnMut(&Value) -> bool,
{
    let slice = container.as_slice()?;
    let (popped, rest): (Vec<_>, Vec<_>) = slice.iter().cloned().partition(|item| pred(item));
    Ok((rebuild(slice, rest), rebuild(slice, popped)))
}

/// Reduces the slice in `container` to the set of its distinct elements, represented as a map
/// from each element to [`Value::Unit`].
///
/// # Examples
/// ```
/// # use slice_kit::dynamic::{self, Value};
/// let container = Value::of(vec![String::from("a"), String::from("b"), String::from("a")]);
/// let set = dynamic::unique(&container).unwrap();
/// assert_eq!(set.len(), 2);
/// assert!(set.contains_key(&Value::from("a")));
/// ```
pub fn unique(container: &Value) -> Result<DynMap, InvalidKindError> {
    let slice = container.as_slice().inspect_err(|e| debug!("unique: {}", e))?;
    let mut set = DynMap::set_of(slice.elem().clone());
    for item in slice {
        set.insert_member(item.clone());
    }
    Ok(set)
}

/// Returns every distinct element of the slices `a` and `b`, as a slice of `a`'s element kind.
///
/// The operands are checked in order, `a` then `b`, and their element kinds must be identical.
/// The result holds each element once; its order is first-seen, but only membership is promised.
pub fn unify(a: &Value, b: &Value) -> Result<Value, UnifyError> {
    let first = a.as_slice().map_err(|source| operand_error(Operand::First, source))?;
    let second = b.as_slice().map_err(|source| operand_error(Operand::Second, source))?;

    if first.elem() != second.elem() {
        debug!("unify: element kinds {} and {} differ", first.elem(), second.elem());
        return Err(TypeMismatchError {
            expected: first.elem().clone(),
            found: second.elem().clone(),
        }
        .into());
    }

    let mut seen = HashSet::with_capacity(first.len() + second.len());
    let items = first
        .iter()
        .chain(second)
        .filter(|item| seen.insert(*item))
        .cloned()
        .collect();
    Ok(rebuild(first, items))
}

/// Returns the keys of the map in `container` as a slice of the map's key kind, in unspecified
/// order.
pub fn map_keys(container: &Value) -> Result<DynSlice, InvalidKindError> {
    let map = container.as_map().inspect_err(|e| debug!("map_keys: {}", e))?;
    Ok(DynSlice::from_parts(map.key().clone(), map.keys().cloned().collect()))
}

/// Copies the slice in `container` into a slice of [`Kind::Any`]. [`Value::Nil`] gives [`None`].
pub fn to_any_slice(container: &Value) -> Result<Option<DynSlice>, InvalidKindError> {
    if container.is_nil() {
        return Ok(None);
    }
    let slice = container.as_slice()?;
    Ok(Some(DynSlice::from_parts(Kind::Any, slice.to_vec())))
}

fn as_slice<'a>(container: &'a Value, op: &str) -> Result<&'a DynSlice, InvalidKindError> {
    container.as_slice().inspect_err(|e| debug!("{}: {}", op, e))
}

fn operand_error(operand: Operand, source: InvalidKindError) -> InvalidOperandError {
    debug!("unify: {} operand rejected: {}", operand, source);
    InvalidOperandError { operand, source }
}

// A new slice of the same element kind as `like`.
fn rebuild(like: &DynSlice, items: Vec<Value>) -> Value {
    Value::Slice(DynSlice::from_parts(like.elem().clone(), items))
}

fn to_isize(value: i64) -> isize {
    isize::try_from(value).unwrap_or(if value < 0 { isize::MIN } else { isize::MAX })
}
