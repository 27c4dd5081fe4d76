use std::collections::HashSet;
use std::hash::{BuildHasher, Hash, RandomState};

/// Reduces `slice` to the set of its distinct elements.
///
/// # Examples
/// ```
/// # use slice_kit::collections::set::unique;
/// let set = unique(&["a", "b", "a"]);
/// assert_eq!(set.len(), 2);
/// assert!(set.contains("a") && set.contains("b"));
/// ```
pub fn unique<T: Hash + Eq + Clone>(slice: &[T]) -> HashSet<T> {
    unique_with_hasher(slice, RandomState::new())
}

/// Reduces `slice` to the set of its distinct elements, using the provided `hasher`.
pub fn unique_with_hasher<T, B>(slice: &[T], hasher: B) -> HashSet<T, B>
where
    T: Hash + Eq + Clone,
    B: BuildHasher,
{
    let mut set = HashSet::with_capacity_and_hasher(slice.len(), hasher);
    set.extend(slice.iter().cloned());
    set
}

/// Returns every distinct element of `a` and `b`, each exactly once.
///
/// Elements appear in the order they are first seen, walking `a` and then `b`. Callers that only
/// care about membership are free to ignore the order.
///
/// # Examples
/// ```
/// # use slice_kit::collections::set::unify;
/// assert_eq!(unify(&[1, 2, 2], &[3, 1]), [1, 2, 3]);
/// ```
pub fn unify<T: Hash + Eq + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let mut seen = HashSet::with_capacity(a.len() + b.len());
    a.iter()
        .chain(b)
        .filter(|item| seen.insert(*item))
        .cloned()
        .collect()
}

/// Returns true if `a` and `b` hold the same strings in the same order.
///
/// Despite the name, this is sequence equality and not set equality: `["a", "b"]` and
/// `["b", "a"]` are not equal. Presence matters too, so [`None`] is only equal to [`None`], never
/// to an empty slice.
///
/// # Examples
/// ```
/// # use slice_kit::collections::set::sets_equal;
/// let empty: [&str; 0] = [];
/// assert!(sets_equal(Some(&["a", "b"][..]), Some(&["a", "b"][..])));
/// assert!(!sets_equal(Some(&["a", "b"][..]), Some(&["b", "a"][..])));
/// assert!(!sets_equal(None, Some(&empty[..])));
/// ```
pub fn sets_equal<S: AsRef<str>>(a: Option<&[S]>, b: Option<&[S]>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.as_ref() == y.as_ref())
        },
        _ => false,
    }
}
