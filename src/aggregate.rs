//! Running aggregates: constant-size summaries maintained in O(1) per event
//! (O(log n) for the extremum indexes).
//!
//! Aggregates hand out their value directly as the query handle, so
//! `collection.query(|total| total)` reads them without an intermediate view
//! struct. None of them touch the backing store.

use std::collections::BTreeSet;
use std::fmt;
use std::ops::{AddAssign, SubAssign};

use crate::{Event, Id, Index, Store};

const BROKEN: &str =
    "Internal invariants broken, aggregate observed a remove it never saw added";

/// Number of items in scope.
#[derive(Debug, Clone, Copy, Default)]
pub struct CountIndex {
    n: usize,
}

/// Running count of the items in scope. Observes items of any type.
pub fn count() -> CountIndex {
    CountIndex::default()
}

impl<T> Index<T> for CountIndex {
    type Query<'a, S> = usize where Self: 'a, S: 'a;

    fn apply(&mut self, event: Event<'_, T>) {
        match event {
            Event::Add { .. } => self.n += 1,
            Event::Update { .. } => {}
            Event::Remove { .. } => self.n = self.n.checked_sub(1).expect(BROKEN),
        }
    }

    fn query<'a, S>(&'a self, _store: &'a Store<S>) -> usize {
        self.n
    }
}

/// Running sum of the observed values.
#[derive(Debug, Clone, Copy, Default)]
pub struct SumIndex<N> {
    total: N,
}

/// Running sum. An update contributes the new value minus the old.
pub fn sum<N>() -> SumIndex<N>
where
    N: Copy + Default + AddAssign + SubAssign,
{
    SumIndex {
        total: N::default(),
    }
}

impl<N> Index<N> for SumIndex<N>
where
    N: Copy + AddAssign + SubAssign,
{
    type Query<'a, S> = N where Self: 'a, S: 'a;

    fn apply(&mut self, event: Event<'_, N>) {
        match event {
            Event::Add { new, .. } => self.total += *new,
            Event::Update { old, new, .. } => {
                self.total -= *old;
                self.total += *new;
            }
            Event::Remove { old, .. } => self.total -= *old,
        }
    }

    fn query<'a, S>(&'a self, _store: &'a Store<S>) -> N {
        self.total
    }
}

/// Arithmetic mean of the observed values.
///
/// The sum side is a plain `f64` accumulator, so long histories of updates
/// see ordinary floating point rounding drift.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeanIndex {
    total: f64,
    n: usize,
}

/// Running mean over `f64` values. Queries as `None` while nothing is in
/// scope.
pub fn mean() -> MeanIndex {
    MeanIndex::default()
}

impl Index<f64> for MeanIndex {
    type Query<'a, S> = Option<f64> where Self: 'a, S: 'a;

    fn apply(&mut self, event: Event<'_, f64>) {
        match event {
            Event::Add { new, .. } => {
                self.total += *new;
                self.n += 1;
            }
            Event::Update { old, new, .. } => {
                self.total -= *old;
                self.total += *new;
            }
            Event::Remove { old, .. } => {
                self.total -= *old;
                self.n = self.n.checked_sub(1).expect(BROKEN);
            }
        }
    }

    fn query<'a, S>(&'a self, _store: &'a Store<S>) -> Option<f64> {
        (self.n > 0).then(|| self.total / self.n as f64)
    }
}

// Min and max share one bookkeeping scheme: an ordered multiset of
// (value, id) pairs, so removing the current extremum restores the next one
// without rescanning anything.
fn ordered_apply<K: Ord + Clone>(ordered: &mut BTreeSet<(K, Id)>, event: Event<'_, K>) {
    match event {
        Event::Add { id, new } => {
            ordered.insert((new.clone(), id));
        }
        Event::Update { id, old, new } => {
            if old != new {
                ordered_remove(ordered, old, id);
                ordered.insert((new.clone(), id));
            }
        }
        Event::Remove { id, old } => ordered_remove(ordered, old, id),
    }
}

fn ordered_remove<K: Ord + Clone>(ordered: &mut BTreeSet<(K, Id)>, key: &K, id: Id) {
    if !ordered.remove(&(key.clone(), id)) {
        panic!("{}", BROKEN);
    }
}

/// Smallest observed value.
#[derive(Debug, Clone)]
pub struct MinIndex<K> {
    ordered: BTreeSet<(K, Id)>,
}

/// Running minimum. Queries as `None` while nothing is in scope.
pub fn min<K: Ord + Clone>() -> MinIndex<K> {
    MinIndex {
        ordered: BTreeSet::new(),
    }
}

impl<K: Ord + Clone> Index<K> for MinIndex<K> {
    type Query<'a, S> = Option<(Id, &'a K)> where Self: 'a, S: 'a;

    fn apply(&mut self, event: Event<'_, K>) {
        ordered_apply(&mut self.ordered, event);
    }

    fn query<'a, S>(&'a self, _store: &'a Store<S>) -> Option<(Id, &'a K)> {
        self.ordered.iter().next().map(|(key, id)| (*id, key))
    }
}

/// Greatest observed value.
#[derive(Debug, Clone)]
pub struct MaxIndex<K> {
    ordered: BTreeSet<(K, Id)>,
}

/// Running maximum. Queries as `None` while nothing is in scope.
pub fn max<K: Ord + Clone>() -> MaxIndex<K> {
    MaxIndex {
        ordered: BTreeSet::new(),
    }
}

impl<K: Ord + Clone> Index<K> for MaxIndex<K> {
    type Query<'a, S> = Option<(Id, &'a K)> where Self: 'a, S: 'a;

    fn apply(&mut self, event: Event<'_, K>) {
        ordered_apply(&mut self.ordered, event);
    }

    fn query<'a, S>(&'a self, _store: &'a Store<S>) -> Option<(Id, &'a K)> {
        self.ordered.iter().next_back().map(|(key, id)| (*id, key))
    }
}

/// Fold with user-supplied inverse steps over arbitrary state.
pub struct FoldIndex<A, FA, FR> {
    state: A,
    on_add: FA,
    on_remove: FR,
}

/// Running fold. `on_add` must be exactly undone by `on_remove` for the same
/// value, otherwise the state silently diverges from the items in scope. An
/// update is applied as `on_remove(old)` then `on_add(new)`.
pub fn fold<T, A, FA, FR>(init: A, on_add: FA, on_remove: FR) -> FoldIndex<A, FA, FR>
where
    FA: Fn(&mut A, &T),
    FR: Fn(&mut A, &T),
{
    FoldIndex {
        state: init,
        on_add,
        on_remove,
    }
}

impl<T, A, FA, FR> Index<T> for FoldIndex<A, FA, FR>
where
    FA: Fn(&mut A, &T),
    FR: Fn(&mut A, &T),
{
    type Query<'a, S> = &'a A where Self: 'a, S: 'a;

    fn apply(&mut self, event: Event<'_, T>) {
        match event {
            Event::Add { new, .. } => (self.on_add)(&mut self.state, new),
            Event::Update { old, new, .. } => {
                (self.on_remove)(&mut self.state, old);
                (self.on_add)(&mut self.state, new);
            }
            Event::Remove { old, .. } => (self.on_remove)(&mut self.state, old),
        }
    }

    fn query<'a, S>(&'a self, _store: &'a Store<S>) -> &'a A {
        &self.state
    }
}

impl<A: fmt::Debug, FA, FR> fmt::Debug for FoldIndex<A, FA, FR> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FoldIndex")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
