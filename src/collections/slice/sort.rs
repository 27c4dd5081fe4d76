/// Below this many elements, a range is finished off with insertion sort.
const INSERTION_THRESHOLD: usize = 12;

/// A collection that can be sorted through indices alone.
///
/// This is the classic three method contract: the sorter never sees the elements themselves, it
/// only asks how many there are, whether one is less than another and to swap two of them. That
/// makes it possible to sort things that can't hand out `&mut T`, such as a runtime-typed
/// container that needs to adjust each element before comparing it.
pub trait Sortable {
    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns true if there are no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if the element at `i` should sort before the element at `j`.
    fn less(&mut self, i: usize, j: usize) -> bool;

    /// Exchanges the elements at `i` and `j`.
    fn swap(&mut self, i: usize, j: usize);
}

/// Sorts `data` in place.
///
/// The algorithm is an introsort: median-of-three quicksort, insertion sort for short ranges and
/// heapsort once the recursion depth passes `2 * log2(n)`. It isn't stable, so elements that
/// compare equal may be reordered.
///
/// # Time Complexity
/// `O(n log n)` calls to [`less`](Sortable::less) and [`swap`](Sortable::swap) in the worst case.
pub fn sort<S: Sortable + ?Sized>(data: &mut S) {
    let len = data.len();
    let depth = 2 * (usize::BITS - len.leading_zeros()) as usize;
    quick_sort(data, 0, len, depth);
}

/// Sorts `slice` in place, according to `less`, which should return true if its first argument
/// belongs before its second.
///
/// # Examples
/// ```
/// # use slice_kit::collections::slice::sort_by;
/// let mut items = [3, 1, 2];
/// sort_by(&mut items, |a, b| a < b);
/// assert_eq!(items, [1, 2, 3]);
/// ```
pub fn sort_by<T, F>(slice: &mut [T], less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    sort(&mut SliceSortable { slice, less });
}

/// Adapts a slice and a less-than closure into a [`Sortable`].
pub struct SliceSortable<'a, T, F> {
    pub slice: &'a mut [T],
    pub less: F,
}

impl<T, F> Sortable for SliceSortable<'_, T, F>
where
    F: FnMut(&T, &T) -> bool,
{
    fn len(&self) -> usize {
        self.slice.len()
    }

    fn less(&mut self, i: usize, j: usize) -> bool {
        (self.less)(&self.slice[i], &self.slice[j])
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.slice.swap(i, j);
    }
}

// Sorts [lo, hi).
fn quick_sort<S: Sortable + ?Sized>(data: &mut S, mut lo: usize, mut hi: usize, mut depth: usize) {
    while hi - lo > INSERTION_THRESHOLD {
        if depth == 0 {
            heap_sort(data, lo, hi);
            return;
        }
        depth -= 1;

        let pivot = partition(data, lo, hi);
        // Recurse into the smaller side and loop on the larger one to bound the stack.
        if pivot - lo < hi - pivot {
            quick_sort(data, lo, pivot, depth);
            lo = pivot + 1;
        } else {
            quick_sort(data, pivot + 1, hi, depth);
            hi = pivot;
        }
    }

    if hi - lo > 1 {
        insertion_sort(data, lo, hi);
    }
}

// Returns the final position of the pivot. Everything before it is less than it.
fn partition<S: Sortable + ?Sized>(data: &mut S, lo: usize, hi: usize) -> usize {
    let mid = lo + (hi - lo) / 2;
    median_of_three(data, lo, mid, hi - 1);
    data.swap(lo, mid);

    let mut store = lo + 1;
    for k in (lo + 1)..hi {
        if data.less(k, lo) {
            data.swap(k, store);
            store += 1;
        }
    }
    data.swap(lo, store - 1);
    store - 1
}

// Orders a, b and c so that b holds the median.
fn median_of_three<S: Sortable + ?Sized>(data: &mut S, a: usize, b: usize, c: usize) {
    if data.less(b, a) {
        data.swap(a, b);
    }
    if data.less(c, b) {
        data.swap(b, c);
        if data.less(b, a) {
            data.swap(a, b);
        }
    }
}

fn insertion_sort<S: Sortable + ?Sized>(data: &mut S, lo: usize, hi: usize) {
    for i in (lo + 1)..hi {
        let mut j = i;
        while j > lo && data.less(j, j - 1) {
            data.swap(j, j - 1);
            j -= 1;
        }
    }
}

fn heap_sort<S: Sortable + ?Sized>(data: &mut S, lo: usize, hi: usize) {
    let len = hi - lo;
    for root in (0..len / 2).rev() {
        sift_down(data, root, len, lo);
    }
    for end in (1..len).rev() {
        data.swap(lo, lo + end);
        sift_down(data, 0, end, lo);
    }
}

// Max-heap sift over the heap stored at [first, first + len).
fn sift_down<S: Sortable + ?Sized>(data: &mut S, mut root: usize, len: usize, first: usize) {
    loop {
        let mut child = 2 * root + 1;
        if child >= len {
            return;
        }
        if child + 1 < len && data.less(first + child, first + child + 1) {
            child += 1;
        }
        if !data.less(first + root, first + child) {
            return;
        }
        data.swap(first + root, first + child);
        root = child;
    }
}
