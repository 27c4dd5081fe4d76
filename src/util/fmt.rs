use std::fmt::{self, Debug, Display, Formatter};

/// Formats a value with its [`Display`] impl inside a [`Debug`] impl, so that kinds read as
/// `[int]` rather than `Slice(Int)`.
pub struct DebugDisplay<'a, T: Display>(pub &'a T);

impl<T: Display> Debug for DebugDisplay<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(self.0, f)
    }
}
