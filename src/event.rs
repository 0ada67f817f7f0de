use crate::Id;

/// One store mutation, as observed by every index in the tree.
///
/// The store has already been updated by the time an event is dispatched, so
/// each variant lends whichever sides of the mutation an index needs for its
/// bookkeeping. Indexes never read the store while applying an event.
#[derive(Debug)]
pub enum Event<'a, T> {
    /// A fresh item was inserted under a fresh identifier.
    Add { id: Id, new: &'a T },
    /// The value under `id` was replaced.
    Update { id: Id, old: &'a T, new: &'a T },
    /// The item under `id` was removed.
    Remove { id: Id, old: &'a T },
}

impl<T> Clone for Event<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Event<'_, T> {}
