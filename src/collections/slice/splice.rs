use std::mem;

use super::error::{
    CapacityOverflowError, IndexNegativeError, IndexOutOfRangeError, NegativeExpansionError,
    Position, RangeError, RangeInvertedError,
};

/// Removes the element at index `i`, returning the remaining elements as a new [`Vec`].
///
/// This is [`cut`] with the range `[i, i + 1)`, but errors report the single index.
///
/// # Examples
/// ```
/// # use slice_kit::collections::slice::delete_at;
/// let items = ["1", "2", "3"];
/// assert_eq!(delete_at(&items, 1).unwrap(), ["1", "3"]);
/// assert!(delete_at(&items, 3).unwrap_err().is_index_out_of_range());
/// ```
pub fn delete_at<T: Clone>(slice: &[T], i: usize) -> Result<Vec<T>, RangeError> {
    let i = to_signed(i);
    let (start, end) = check_delete(i, slice.len())?;
    Ok(join(slice, start, end))
}

/// Removes the half-open range `[i, j)`, returning the remaining elements as a new [`Vec`].
///
/// `cut(slice, slice.len(), slice.len())` is accepted and removes nothing.
///
/// # Examples
/// ```
/// # use slice_kit::collections::slice::cut;
/// assert_eq!(cut(&[0, 1, 2, 3, 4], 1, 3).unwrap(), [0, 3, 4]);
/// assert_eq!(cut(&[0, 1], 2, 2).unwrap(), [0, 1]);
/// assert!(cut(&[0, 1], 1, 0).unwrap_err().is_range_inverted());
/// ```
pub fn cut<T: Clone>(slice: &[T], i: usize, j: usize) -> Result<Vec<T>, RangeError> {
    let (start, end) = check_cut(to_signed(i), to_signed(j), slice.len())?;
    Ok(join(slice, start, end))
}

/// Inserts `count` default values immediately before index `i`.
///
/// # Examples
/// ```
/// # use slice_kit::collections::slice::expand;
/// let expanded = expand(&[String::from("a"), String::from("b")], 1, 2).unwrap();
/// assert_eq!(expanded, ["a", "", "", "b"]);
/// ```
pub fn expand<T: Clone + Default>(slice: &[T], i: usize, count: usize) -> Result<Vec<T>, RangeError> {
    expand_with(slice, i, count, T::default)
}

/// Inserts `count` values produced by `fill` immediately before index `i`.
///
/// Unlike [`cut`], `i` has to refer to an existing element; expanding an empty slice always fails.
/// A `count` too large for the result to be allocated is a [`CapacityOverflowError`], not a panic.
pub fn expand_with<T, F>(slice: &[T], i: usize, count: usize, fill: F) -> Result<Vec<T>, RangeError>
where
    T: Clone,
    F: FnMut() -> T,
{
    let (at, count) = check_expand::<T>(to_signed(i), to_signed(count), slice.len())?;
    splice_in(slice, at, count, fill)
}

/// Returns a new [`Vec`] of the elements for which `keep` returns true, in their original order.
pub fn retain<T, F>(slice: &[T], mut keep: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    slice.iter().filter(|item| keep(item)).cloned().collect()
}

/// Splits `slice` into the elements that don't match `pred` and the elements that do, both in
/// their original order.
///
/// # Examples
/// ```
/// # use slice_kit::collections::slice::pop_where;
/// let (rest, popped) = pop_where(&["a", "b", "", "c"], |s| s.is_empty());
/// assert_eq!(rest, ["a", "b", "c"]);
/// assert_eq!(popped, [""]);
/// ```
pub fn pop_where<T, F>(slice: &[T], mut pred: F) -> (Vec<T>, Vec<T>)
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    let mut rest = Vec::with_capacity(slice.len());
    let mut popped = Vec::new();
    for item in slice {
        if pred(item) {
            popped.push(item.clone());
        } else {
            rest.push(item.clone());
        }
    }
    (rest, popped)
}

/// Validates a single index for deletion against a collection of length `len`, returning the
/// range to remove.
pub(crate) fn check_delete(i: isize, len: usize) -> Result<(usize, usize), RangeError> {
    let end = i.saturating_add(1);
    check_positions(Position::Index(i), i, end, len)
}

/// Validates `[i, j)` for removal against a collection of length `len`.
pub(crate) fn check_cut(i: isize, j: isize, len: usize) -> Result<(usize, usize), RangeError> {
    check_positions(Position::Range(i, j), i, j, len)
}

fn check_positions(
    position: Position,
    i: isize,
    j: isize,
    len: usize,
) -> Result<(usize, usize), RangeError> {
    if i > j {
        return Err(RangeInvertedError { position }.into());
    }
    if i < 0 || j < 0 {
        return Err(IndexNegativeError { position }.into());
    }

    // Both are non-negative from here on.
    let (start, end) = (i as usize, j as usize);
    // The empty range at the very end is the only way to name index `len`.
    let empty_tail = start == len && end == len;
    if (start >= len && !empty_tail) || end > len {
        return Err(IndexOutOfRangeError { position, len }.into());
    }

    Ok((start, end))
}

/// Validates an expansion of `count` elements of type `T` before index `i`.
pub(crate) fn check_expand<T>(i: isize, count: isize, len: usize) -> Result<(usize, usize), RangeError> {
    let position = Position::Index(i);
    if i < 0 {
        return Err(IndexNegativeError { position }.into());
    }
    if count < 0 {
        return Err(NegativeExpansionError { count }.into());
    }
    if i as usize >= len {
        return Err(IndexOutOfRangeError { position, len }.into());
    }

    let (at, count) = (i as usize, count as usize);
    // A Vec can't hold more than isize::MAX bytes.
    let max = isize::MAX as usize / mem::size_of::<T>().max(1);
    match len.checked_add(count) {
        Some(total) if total <= max => Ok((at, count)),
        _ => Err(CapacityOverflowError { len, count }.into()),
    }
}

/// Concatenates `slice[..start]` and `slice[end..]`. Positions must already be validated.
pub(crate) fn join<T: Clone>(slice: &[T], start: usize, end: usize) -> Vec<T> {
    let mut out = Vec::with_capacity(slice.len() - (end - start));
    out.extend_from_slice(&slice[..start]);
    out.extend_from_slice(&slice[end..]);
    out
}

/// Concatenates `slice[..at]`, `count` filled values and `slice[at..]`. Positions must already be
/// validated with [`check_expand`]; an allocation that still fails is reported rather than
/// aborting.
pub(crate) fn splice_in<T, F>(
    slice: &[T],
    at: usize,
    count: usize,
    mut fill: F,
) -> Result<Vec<T>, RangeError>
where
    T: Clone,
    F: FnMut() -> T,
{
    let len = slice.len();
    let mut out = Vec::new();
    out.try_reserve_exact(len + count)
        .map_err(|_| CapacityOverflowError { len, count })?;
    out.extend_from_slice(&slice[..at]);
    out.extend((0..count).map(|_| fill()));
    out.extend_from_slice(&slice[at..]);
    Ok(out)
}

// Slice lengths never exceed isize::MAX, so anything bigger is out of range regardless.
fn to_signed(value: usize) -> isize {
    isize::try_from(value).unwrap_or(isize::MAX)
}
