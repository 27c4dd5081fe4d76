use log::{debug, trace};

use super::compare::OrderClass;
use super::{
    ComparatorBinding, DynFunc, DynSlice, ElementTypeIncompatibleError, Kind, SortError, Value,
};
use crate::collections::slice::{self as slices, Sortable};

/// Sorts the slice inside `container` in place, using `func` as the less-than comparison.
///
/// `func` must take two parameters of the same kind and return a single bool. That kind has to
/// match the slice's element kind directly or through one pointer in either direction, unless
/// either side is [`Kind::Any`]. All of this is checked before the first comparison, so on error
/// the container is untouched. With [`DynFunc::natural_less`], the elements also have to be
/// orderable against each other, as for [`sort_natural`].
///
/// The sort isn't stable.
///
/// # Examples
/// ```
/// # use slice_kit::dynamic::{self, DynFunc, DynSlice, Value};
/// let mut container = Value::Slice(DynSlice::of(vec![3_i64, 1, 2]));
/// dynamic::sort(&mut container, &DynFunc::from_less(|a: &i64, b: &i64| a < b)).unwrap();
/// assert_eq!(container.to_typed::<Vec<i64>>(), Some(vec![1, 2, 3]));
/// ```
pub fn sort(container: &mut Value, func: &DynFunc) -> Result<(), SortError> {
    let slice = container.as_slice_mut().inspect_err(|e| debug!("sort: {}", e))?;
    let binding = ComparatorBinding::bind(slice, func)?;
    if func.is_natural() {
        check_orderable(slice)?;
    }
    trace!(
        "sorting {} elements of {} as {} ({:?})",
        slice.len(),
        slice.elem(),
        binding.param(),
        binding.indirection()
    );

    slices::sort(&mut DynSortable { slice, func, binding: &binding });
    Ok(())
}

/// Sorts the slice inside `container` by the natural ordering of its elements.
///
/// Every element has to be a bool, a number or a string, and they all have to be the same one of
/// those three; numbers of different kinds may be mixed. See [`compare::less`](super::compare::less).
/// This is [`sort()`] with [`DynFunc::natural_less`].
pub fn sort_natural(container: &mut Value) -> Result<(), SortError> {
    sort(container, &DynFunc::natural_less())
}

// Every element has to belong to the same order class for the natural ordering to be total.
fn check_orderable(slice: &DynSlice) -> Result<(), ElementTypeIncompatibleError> {
    let mut class = None;
    for (i, item) in slice.iter().enumerate() {
        let elem = item.kind();
        let consistent = match (class, OrderClass::of(&elem)) {
            (_, None) => false,
            (None, Some(found)) => {
                class = Some(found);
                true
            },
            (Some(expected), Some(found)) => expected == found,
        };
        if !consistent {
            debug!("sort: element {} of kind {} can't be ordered naturally", i, elem);
            return Err(ElementTypeIncompatibleError {
                param: Kind::Any,
                elem,
                index: Some(i),
            });
        }
    }
    Ok(())
}

/// Adapts a bound slice and comparator into a [`Sortable`].
struct DynSortable<'a> {
    slice: &'a mut DynSlice,
    func: &'a DynFunc,
    binding: &'a ComparatorBinding,
}

impl Sortable for DynSortable<'_> {
    fn len(&self) -> usize {
        self.slice.len()
    }

    fn less(&mut self, i: usize, j: usize) -> bool {
        let a = self.binding.adjust(&self.slice[i]);
        let b = self.binding.adjust(&self.slice[j]);
        matches!(self.func.call(&[&*a, &*b]).first(), Some(Value::Bool(true)))
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.slice.swap(i, j);
    }
}
