use crate::{Event, Id, Index, Store};

const BROKEN: &str = "Internal invariants broken, item missing right after a store write";

/// An item store wired to a tree of secondary indexes.
///
/// Every mutation goes through two steps, in order: the store is updated,
/// then a single [`Event`] carrying both sides of the change is dispatched
/// to the root index, which fans it out to the whole tree. Both steps finish
/// before the call returns, so queries always observe a consistent pair of
/// store and indexes. Mutation takes `&mut self` and querying takes `&self`;
/// the borrow checker is what keeps the two from interleaving.
///
/// ```
/// use composable_indexes::{hashtable_unique, premap, Collection};
///
/// let mut sensors = Collection::new(premap(|s: &(String, f64)| s.0.clone(), hashtable_unique()));
/// let id = sensors.insert(("outdoor".to_string(), 21.5));
/// sensors.adjust(id, |(name, _)| (name.clone(), 19.0));
///
/// // Lookups resolve to full (id, value) envelopes.
/// let found = sensors.query(|by_name| {
///     by_name
///         .get(&"outdoor".to_string())
///         .map(|(id, sensor)| (id, sensor.1))
/// });
/// assert_eq!(found, Some((id, 19.0)));
/// ```
#[derive(Debug)]
pub struct Collection<T, R> {
    store: Store<T>,
    root: R,
}

impl<T, R: Index<T>> Collection<T, R> {
    /// Bind `root` to an empty store.
    ///
    /// The index tree must not have observed any events yet; it fills up as
    /// the collection is mutated.
    pub fn new(root: R) -> Self {
        Collection {
            store: Store::new(),
            root,
        }
    }

    pub fn with_capacity(root: R, capacity: usize) -> Self {
        Collection {
            store: Store::with_capacity(capacity),
            root,
        }
    }

    /// Insert `value` under a fresh id.
    pub fn insert(&mut self, value: T) -> Id {
        let id = self.store.insert(value);
        let new = self.store.get(id).expect(BROKEN);
        self.root.apply(Event::Add { id, new });
        id
    }

    pub fn get(&self, id: Id) -> Option<&T> {
        self.store.get(id)
    }

    pub fn contains(&self, id: Id) -> bool {
        self.store.contains(id)
    }

    /// Replace the value under `id`.
    ///
    /// Panics if `id` is not present in the collection.
    pub fn update(&mut self, id: Id, value: T) {
        let old = self.store.replace(id, value);
        let new = self.store.get(id).expect(BROKEN);
        self.root.apply(Event::Update { id, old: &old, new });
    }

    /// Rewrite the value under `id` with `f`, which receives the current
    /// value.
    ///
    /// Panics if `id` is not present in the collection.
    pub fn adjust(&mut self, id: Id, f: impl FnOnce(&T) -> T) {
        let new = match self.store.get(id) {
            Some(current) => f(current),
            None => panic!("unable to adjust item, no entry for id {id}"),
        };
        self.update(id, new);
    }

    /// Remove the item under `id`, if any.
    pub fn remove(&mut self, id: Id) -> Option<T> {
        let old = self.store.remove(id)?;
        self.root.apply(Event::Remove { id, old: &old });
        Some(old)
    }

    /// Remove everything. Every index observes one remove per live item, in
    /// unspecified order.
    pub fn clear(&mut self) {
        for (id, old) in self.store.drain() {
            self.root.apply(Event::Remove { id, old: &old });
        }
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Unordered enumeration of the live (id, value) pairs, straight off the
    /// store. For diagnostics and tests; real read traffic belongs in
    /// [`query`](Self::query).
    pub fn iter(&self) -> impl Iterator<Item = (Id, &T)> + '_ {
        self.store.iter()
    }

    /// Run `read` against the root index's query handle.
    ///
    /// The handle borrows the index tree and, by shared borrow, the store,
    /// which is how lookups answer with (id, value) envelopes. Neither the
    /// handle nor anything borrowed through it can outlive the borrow of the
    /// collection, so no mutation can happen while a query is in flight.
    pub fn query<'c, F, Out>(&'c self, read: F) -> Out
    where
        F: FnOnce(R::Query<'c, T>) -> Out,
    {
        read(self.root.query(&self.store))
    }
}
