use std::collections::BTreeSet;
use std::hash::Hash;

use crate::{Event, HashMap, Id, Index, Store};

const BROKEN: &str =
    "Internal invariants broken, key missing from the hashed index despite being in the store";

/// Hashed unique index: a bijection between keys and ids.
///
/// Adding a key that is already present is a uniqueness violation and
/// panics, as is an update that collides with an existing key.
#[derive(Debug, Clone)]
pub struct HashTableUniqueIndex<K> {
    map: HashMap<K, Id>,
}

/// Unique hashed lookup over the observed values.
pub fn hashtable_unique<K: Eq + Hash + Clone>() -> HashTableUniqueIndex<K> {
    HashTableUniqueIndex {
        map: HashMap::default(),
    }
}

impl<K: Eq + Hash + Clone> HashTableUniqueIndex<K> {
    fn add(&mut self, key: &K, id: Id) {
        let displaced = self.map.insert(key.clone(), id);
        if displaced.is_some() {
            panic!("Unable to insert item, uniqueness constraint violated in hashed unique index");
        }
    }
}

impl<K: Eq + Hash + Clone> Index<K> for HashTableUniqueIndex<K> {
    type Query<'a, S> = HashTableUniqueQuery<'a, K, S> where Self: 'a, S: 'a;

    fn apply(&mut self, event: Event<'_, K>) {
        match event {
            Event::Add { id, new } => self.add(new, id),
            Event::Update { id, old, new } => {
                if old != new {
                    self.map.remove(old).expect(BROKEN);
                    self.add(new, id);
                }
            }
            Event::Remove { old, .. } => {
                self.map.remove(old).expect(BROKEN);
            }
        }
    }

    fn query<'a, S>(&'a self, store: &'a Store<S>) -> HashTableUniqueQuery<'a, K, S> {
        HashTableUniqueQuery {
            map: &self.map,
            store,
        }
    }
}

/// Read-only view over a [`HashTableUniqueIndex`].
#[derive(Debug)]
pub struct HashTableUniqueQuery<'a, K, S> {
    map: &'a HashMap<K, Id>,
    store: &'a Store<S>,
}

impl<'a, K: Eq + Hash, S> HashTableUniqueQuery<'a, K, S> {
    /// The item carrying `key`, as an (id, value) envelope.
    pub fn get(&self, key: &K) -> Option<(Id, &'a S)> {
        let id = self.get_id(key)?;
        Some((id, self.store.resolve(id)))
    }

    /// The bare id carrying `key`, if any.
    pub fn get_id(&self, key: &K) -> Option<Id> {
        self.map.get(key).copied()
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    pub fn count(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// All (id, key) pairs, unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (Id, &'a K)> + 'a {
        self.map.iter().map(|(key, id)| (*id, key))
    }
}

/// Hashed non-unique index: each key maps to the set of ids carrying it.
#[derive(Debug, Clone)]
pub struct HashTableMultiIndex<K> {
    map: HashMap<K, BTreeSet<Id>>,
    len: usize,
}

/// Non-unique hashed lookup over the observed values.
pub fn hashtable_multi<K: Eq + Hash + Clone>() -> HashTableMultiIndex<K> {
    HashTableMultiIndex {
        map: HashMap::default(),
        len: 0,
    }
}

impl<K: Eq + Hash + Clone> HashTableMultiIndex<K> {
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
            self.map.remove(key);
        }
        self.len -= 1;
    }
}

impl<K: Eq + Hash + Clone> Index<K> for HashTableMultiIndex<K> {
    type Query<'a, S> = HashTableMultiQuery<'a, K, S> where Self: 'a, S: 'a;

    fn apply(&mut self, event: Event<'_, K>) {
        match event {
            Event::Add { id, new } => self.add(new, id),
            Event::Update { id, old, new } => {
                if old != new {
                    self.remove(old, id);
                    self.add(new, id);
                }
            }
            Event::Remove { id, old } => self.remove(old, id),
        }
    }

    fn query<'a, S>(&'a self, store: &'a Store<S>) -> HashTableMultiQuery<'a, K, S> {
        HashTableMultiQuery {
            map: &self.map,
            len: self.len,
            store,
        }
    }
}

/// Read-only view over a [`HashTableMultiIndex`].
#[derive(Debug)]
pub struct HashTableMultiQuery<'a, K, S> {
    map: &'a HashMap<K, BTreeSet<Id>>,
    len: usize,
    store: &'a Store<S>,
}

impl<'a, K: Eq + Hash, S> HashTableMultiQuery<'a, K, S> {
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

    /// All (id, key) pairs, unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (Id, &'a K)> + 'a {
        self.map
            .iter()
            .flat_map(|(key, ids)| ids.iter().map(move |id| (*id, key)))
    }
}
