#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A value paired with the priority it was queued under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Entry<T, P> {
    /// The queued value, carried opaquely
    pub value: T,

    /// The priority that decides the entry's position in the heap
    pub priority: P,
}

impl<T, P> Entry<T, P> {
    /// Creates a new entry
    pub fn new(value: T, priority: P) -> Self {
        Entry { value, priority }
    }

    /// Splits the entry into its `(value, priority)` pair
    pub fn into_pair(self) -> (T, P) {
        (self.value, self.priority)
    }

    /// Borrows the entry as a `(value, priority)` pair
    pub fn as_pair(&self) -> (&T, &P) {
        (&self.value, &self.priority)
    }
}

impl<T, P> From<(T, P)> for Entry<T, P> {
    fn from((value, priority): (T, P)) -> Self {
        Entry::new(value, priority)
    }
}
