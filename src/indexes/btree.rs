use std::collections::{BTreeMap, BTreeSet};
use std::ops::RangeBounds;

use crate::{Event, Id, Index, Store};

const BROKEN: &str =
    "Internal invariants broken, id missing from the ordered index despite being in the store";

/// Ordered index: a total-order map from key to the set of ids currently
/// carrying that key.
///
/// Duplicate keys are kept as a set of ids and enumerate id-ascending.
#[derive(Debug, Clone)]
pub struct BTreeIndex<K> {
    map: BTreeMap<K, BTreeSet<Id>>,
    len: usize,
}

/// Ordered index over the observed values. Compose under
/// [`premap`](crate::premap) to index one field of a larger item.
pub fn btree<K: Ord + Clone>() -> BTreeIndex<K> {
    BTreeIndex {
        map: BTreeMap::new(),
        len: 0,
    }
}

impl<K: Ord + Clone> BTreeIndex<K> {
    fn add(&mut self, key: &K, id: Id) {
        self.map.entry(key.clone()).or_default().insert(id);
        self.len += 1;
    }

    fn remove(&mut self, key: &K, id: Id) {
        let ids = self.map.get_mut(key).expect(BROKEN);
        if ids.len() > 1 {
            if !ids.remove(&id) {
                panic!("{}", BROKEN);
            }
        } else {
            // Last id under this key, drop the key itself.
            self.map.remove(key);
        }
        self.len -= 1;
    }
}

impl<K: Ord + Clone> Index<K> for BTreeIndex<K> {
    type Query<'a, S> = BTreeQuery<'a, K, S> where Self: 'a, S: 'a;

    fn apply(&mut self, event: Event<'_, K>) {
        match event {
            Event::Add { id, new } => self.add(new, id),
            Event::Update { id, old, new } => {
                // Only touch the tree when the key actually moved.
                if old != new {
                    self.remove(old, id);
                    self.add(new, id);
                }
            }
            Event::Remove { id, old } => self.remove(old, id),
        }
    }

    fn query<'a, S>(&'a self, store: &'a Store<S>) -> BTreeQuery<'a, K, S> {
        BTreeQuery {
            map: &self.map,
            len: self.len,
            store,
        }
    }
}

/// Read-only view over a [`BTreeIndex`].
#[derive(Debug)]
pub struct BTreeQuery<'a, K, S> {
    map: &'a BTreeMap<K, BTreeSet<Id>>,
    len: usize,
    store: &'a Store<S>,
}

impl<'a, K: Ord, S> BTreeQuery<'a, K, S> {
    /// Items currently carrying `key`, as (id, value) envelopes in
    /// id-ascending order. Empty if the key is absent.
    pub fn get(&self, key: &K) -> impl Iterator<Item = (Id, &'a S)> + 'a {
        let store = self.store;
        self.map
            .get(key)
            .into_iter()
            .flat_map(move |ids| ids.iter().map(move |id| (*id, store.resolve(*id))))
    }

    /// Bare ids currently carrying `key`, ascending.
    pub fn get_ids(&self, key: &K) -> impl Iterator<Item = Id> + 'a {
        self.map
            .get(key)
            .into_iter()
            .flat_map(|ids| ids.iter().copied())
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    /// Number of ids in the index (not distinct keys).
    pub fn count(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The item under the smallest key, as an (id, value) envelope. Key ties
    /// resolve to the smallest id.
    pub fn min(&self) -> Option<(Id, &'a S)> {
        let (_, ids) = self.map.first_key_value()?;
        let id = *ids.iter().next()?;
        Some((id, self.store.resolve(id)))
    }

    /// The item under the greatest key, as an (id, value) envelope. Key ties
    /// resolve to the greatest id.
    pub fn max(&self) -> Option<(Id, &'a S)> {
        let (_, ids) = self.map.last_key_value()?;
        let id = *ids.iter().next_back()?;
        Some((id, self.store.resolve(id)))
    }

    /// (id, key) pairs whose key falls in `range`, ascending by key then id.
    pub fn range<R>(&self, range: R) -> impl Iterator<Item = (Id, &'a K)> + 'a
    where
        R: RangeBounds<K> + 'a,
    {
        self.map
            .range(range)
            .flat_map(|(key, ids)| ids.iter().map(move |id| (*id, key)))
    }

    /// All (id, key) pairs, ascending by key then id.
    pub fn iter(&self) -> impl Iterator<Item = (Id, &'a K)> + 'a {
        self.map
            .iter()
            .flat_map(|(key, ids)| ids.iter().map(move |id| (*id, key)))
    }
}
