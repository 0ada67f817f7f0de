use std::hash::Hash;
use std::marker::PhantomData;

use crate::{Event, HashMap, Index, Store};

const BROKEN: &str =
    "Internal invariants broken, id carries a group key with no live group";

/// One inner index per group key, created lazily on first touch.
///
/// The combinator counts members per group itself, so a group is dropped the
/// moment its last member leaves: enumeration never sees an empty group, no
/// matter what the inner index is.
pub struct Grouped<F, M, K, I, In> {
    group_of: F,
    make_inner: M,
    groups: HashMap<K, GroupEntry<I>>,
    _observes: PhantomData<fn(&In)>,
}

#[derive(Debug)]
struct GroupEntry<I> {
    members: usize,
    index: I,
}

/// Partition items by `group_of(&item)` and maintain `make_inner()` per
/// partition.
///
/// On an update that changes the group key, the old group observes a remove
/// before the new group observes an add, so no id is ever in two groups at
/// once.
pub fn grouped<F, M, K, I, In>(group_of: F, make_inner: M) -> Grouped<F, M, K, I, In>
where
    F: Fn(&In) -> K,
    M: Fn() -> I,
    K: Eq + Hash,
    I: Index<In>,
{
    Grouped {
        group_of,
        make_inner,
        groups: HashMap::default(),
        _observes: PhantomData,
    }
}

impl<F, M, K, I, In> Grouped<F, M, K, I, In>
where
    F: Fn(&In) -> K,
    M: Fn() -> I,
    K: Eq + Hash,
    I: Index<In>,
{
    fn add_to(&mut self, group: K, event: Event<'_, In>) {
        let make_inner = &self.make_inner;
        let entry = self.groups.entry(group).or_insert_with(|| GroupEntry {
            members: 0,
            index: make_inner(),
        });
        entry.members += 1;
        entry.index.apply(event);
    }

    fn remove_from(&mut self, group: &K, event: Event<'_, In>) {
        let entry = self.groups.get_mut(group).expect(BROKEN);
        entry.index.apply(event);
        entry.members -= 1;
        let emptied = entry.members == 0;
        if emptied {
            self.groups.remove(group);
        }
    }
}

impl<F, M, K, I, In> Index<In> for Grouped<F, M, K, I, In>
where
    F: Fn(&In) -> K,
    M: Fn() -> I,
    K: Eq + Hash,
    I: Index<In>,
{
    type Query<'a, S> = GroupedQuery<'a, K, I, In, S> where Self: 'a, S: 'a;

    fn apply(&mut self, event: Event<'_, In>) {
        match event {
            Event::Add { id, new } => {
                let group = (self.group_of)(new);
                self.add_to(group, Event::Add { id, new });
            }
            Event::Update { id, old, new } => {
                let old_group = (self.group_of)(old);
                let new_group = (self.group_of)(new);
                if old_group == new_group {
                    let entry = self.groups.get_mut(&old_group).expect(BROKEN);
                    entry.index.apply(Event::Update { id, old, new });
                } else {
                    self.remove_from(&old_group, Event::Remove { id, old });
                    self.add_to(new_group, Event::Add { id, new });
                }
            }
            Event::Remove { id, old } => {
                let group = (self.group_of)(old);
                self.remove_from(&group, Event::Remove { id, old });
            }
        }
    }

    fn query<'a, S>(&'a self, store: &'a Store<S>) -> GroupedQuery<'a, K, I, In, S> {
        GroupedQuery {
            groups: &self.groups,
            store,
            _observes: PhantomData,
        }
    }
}

/// Read-only view over a [`Grouped`] combinator.
pub struct GroupedQuery<'a, K, I, In, S> {
    groups: &'a HashMap<K, GroupEntry<I>>,
    store: &'a Store<S>,
    _observes: PhantomData<fn(&In)>,
}

impl<'a, K, I, In, S> GroupedQuery<'a, K, I, In, S>
where
    K: Eq + Hash,
    I: Index<In>,
{
    /// Query handle of the group under `key`; `None` if no live item maps to
    /// it.
    pub fn get(&self, key: &K) -> Option<I::Query<'a, S>> {
        self.groups
            .get(key)
            .map(|entry| entry.index.query(self.store))
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.groups.contains_key(key)
    }

    /// Number of non-empty groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Group keys with their query handles, unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a K, I::Query<'a, S>)> + 'a {
        let store = self.store;
        self.groups
            .iter()
            .map(move |(key, entry)| (key, entry.index.query(store)))
    }
}
