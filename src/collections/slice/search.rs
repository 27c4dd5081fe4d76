/// Returns the index of the first element equal to `item`, or [`None`] if there isn't one.
///
/// # Time Complexity
/// `O(n)` comparisons, each of which costs whatever [`PartialEq`] costs for `T`.
///
/// # Examples
/// ```
/// # use slice_kit::collections::slice::index;
/// let items = ["a", "b", "a"];
/// assert_eq!(index(&items, &"a"), Some(0));
/// assert_eq!(index(&items, &"c"), None);
/// ```
pub fn index<T: PartialEq>(slice: &[T], item: &T) -> Option<usize> {
    slice.iter().position(|candidate| candidate == item)
}

/// Returns true if any element of `slice` is equal to `item`.
pub fn contains<T: PartialEq>(slice: &[T], item: &T) -> bool {
    index(slice, item).is_some()
}
