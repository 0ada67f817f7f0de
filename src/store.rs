use slab::Slab;

use crate::{HashMap, Id};

/// Owning map from [`Id`] to item value.
///
/// Values live in a contiguous slab; a hash lookup maps each issued id to its
/// current slot. Slots are reused after removal, ids are not.
#[derive(Debug, Clone)]
pub struct Store<T> {
    slots: Slab<(Id, T)>,
    lookup: HashMap<Id, usize>,
    next_id: u64,
}

impl<T> Store<T> {
    pub fn new() -> Self {
        Store {
            slots: Slab::new(),
            lookup: HashMap::default(),
            next_id: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let mut lookup = HashMap::default();
        lookup.reserve(capacity);
        Store {
            slots: Slab::with_capacity(capacity),
            lookup,
            next_id: 0,
        }
    }

    /// Place `value` under a fresh id.
    pub fn insert(&mut self, value: T) -> Id {
        let id = Id::new(self.next_id);
        self.next_id += 1;
        let slot = self.slots.insert((id, value));
        self.lookup.insert(id, slot);
        id
    }

    pub fn get(&self, id: Id) -> Option<&T> {
        let slot = *self.lookup.get(&id)?;
        Some(&self.slots[slot].1)
    }

    pub fn contains(&self, id: Id) -> bool {
        self.lookup.contains_key(&id)
    }

    /// Overwrite the value under `id`, returning the one it displaces.
    ///
    /// Replacing through an id that is not present is a contract violation
    /// and panics.
    pub fn replace(&mut self, id: Id, value: T) -> T {
        let slot = match self.lookup.get(&id) {
            Some(slot) => *slot,
            None => panic!("unable to replace item, no entry for id {id}"),
        };
        std::mem::replace(&mut self.slots[slot].1, value)
    }

    pub fn remove(&mut self, id: Id) -> Option<T> {
        let slot = self.lookup.remove(&id)?;
        let (_, value) = self.slots.remove(slot);
        Some(value)
    }

    /// Resolve an id recorded by an index. Every id an index hands out is
    /// live in the store, so a miss here is bookkeeping corruption.
    pub(crate) fn resolve(&self, id: Id) -> &T {
        match self.get(id) {
            Some(value) => value,
            None => panic!("Internal invariants broken, indexed id {id} missing from the store"),
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Unordered enumeration of the live (id, value) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Id, &T)> + '_ {
        self.slots.iter().map(|(_, (id, value))| (*id, value))
    }

    pub fn reserve(&mut self, additional: usize) {
        self.slots.reserve(additional);
        self.lookup.reserve(additional);
    }

    /// Empty the store, yielding every item. The id counter keeps counting:
    /// ids issued before a drain are never reissued after it.
    pub(crate) fn drain(&mut self) -> impl Iterator<Item = (Id, T)> + '_ {
        self.lookup.clear();
        self.slots.drain()
    }
}

impl<T> Default for Store<T> {
    fn default() -> Self {
        Self::new()
    }
}
