use crate::{Event, Store};

/// The observer contract every index implements.
///
/// An index receives each store mutation as an [`Event`] and folds it into
/// whatever derived state it answers queries from. `apply` must accept every
/// event shape; if it panics, the surrounding collection is left with
/// half-applied bookkeeping and is considered poisoned, no recovery is
/// attempted.
///
/// The read side is [`Index::Query`], a view type borrowing the index's
/// private state alongside a shared borrow of the backing [`Store`]. The
/// store is what lets lookup handles answer with full (id, value) envelopes
/// rather than bare ids; aggregates ignore it and hand out their value
/// directly. `S` is the item type of the collection the store belongs to,
/// which is independent of `T`: combinators like
/// [`premap`](crate::premap) change what an index observes, but every handle
/// in the tree still resolves against the one root store.
pub trait Index<T> {
    /// Read-only view over this index's state, resolving ids against a store
    /// of `S` items.
    type Query<'a, S>
    where
        Self: 'a,
        S: 'a;

    /// Fold one store mutation into the local state.
    fn apply(&mut self, event: Event<'_, T>);

    /// Borrow the query handle, backed by `store` for envelope resolution.
    fn query<'a, S>(&'a self, store: &'a Store<S>) -> Self::Query<'a, S>;
}
