use std::collections::BTreeSet;

use crate::{Event, Id, Index, Store};

/// Tracks only which ids are in scope.
///
/// Mostly useful as the inner index of [`grouped`](crate::grouped), where it
/// answers "which ids belong to this group". Observes items of any type.
#[derive(Debug, Clone, Default)]
pub struct KeysIndex {
    ids: BTreeSet<Id>,
}

/// Index over the set of ids in scope.
pub fn keys() -> KeysIndex {
    KeysIndex::default()
}

impl<T> Index<T> for KeysIndex {
    type Query<'a, S> = KeysQuery<'a, S> where Self: 'a, S: 'a;

    fn apply(&mut self, event: Event<'_, T>) {
        match event {
            Event::Add { id, .. } => {
                self.ids.insert(id);
            }
            Event::Update { .. } => {}
            Event::Remove { id, .. } => {
                if !self.ids.remove(&id) {
                    panic!("Internal invariants broken, removed id was never added to the keys index");
                }
            }
        }
    }

    fn query<'a, S>(&'a self, store: &'a Store<S>) -> KeysQuery<'a, S> {
        KeysQuery {
            ids: &self.ids,
            store,
        }
    }
}

/// Read-only view over a [`KeysIndex`].
#[derive(Debug)]
pub struct KeysQuery<'a, S> {
    ids: &'a BTreeSet<Id>,
    store: &'a Store<S>,
}

impl<'a, S> KeysQuery<'a, S> {
    pub fn contains(&self, id: Id) -> bool {
        self.ids.contains(&id)
    }

    pub fn count(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Ids in scope, ascending.
    pub fn iter(&self) -> impl Iterator<Item = Id> + 'a {
        self.ids.iter().copied()
    }

    /// (id, value) envelopes for the ids in scope, id-ascending.
    pub fn items(&self) -> impl Iterator<Item = (Id, &'a S)> + 'a {
        let store = self.store;
        self.ids.iter().map(move |id| (*id, store.resolve(*id)))
    }
}
