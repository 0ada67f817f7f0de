use crate::{Event, Index, Store};

/// Gates forwarding on a predicate, so the inner index only ever sees items
/// that are in scope.
pub struct Filtered<P, I> {
    predicate: P,
    inner: I,
}

/// Forward only the items for which `predicate` holds.
///
/// An update that moves an item across the predicate boundary reaches the
/// inner index as an add (moved in) or a remove (moved out).
pub fn filtered<T, P, I>(predicate: P, inner: I) -> Filtered<P, I>
where
    P: Fn(&T) -> bool,
    I: Index<T>,
{
    Filtered { predicate, inner }
}

impl<T, P, I> Index<T> for Filtered<P, I>
where
    P: Fn(&T) -> bool,
    I: Index<T>,
{
    type Query<'a, S> = I::Query<'a, S> where Self: 'a, S: 'a;

    fn apply(&mut self, event: Event<'_, T>) {
        match event {
            Event::Add { id, new } => {
                if (self.predicate)(new) {
                    self.inner.apply(Event::Add { id, new });
                }
            }
            Event::Update { id, old, new } => {
                match ((self.predicate)(old), (self.predicate)(new)) {
                    (false, false) => {}
                    (false, true) => self.inner.apply(Event::Add { id, new }),
                    (true, false) => self.inner.apply(Event::Remove { id, old }),
                    (true, true) => self.inner.apply(Event::Update { id, old, new }),
                }
            }
            Event::Remove { id, old } => {
                if (self.predicate)(old) {
                    self.inner.apply(Event::Remove { id, old });
                }
            }
        }
    }

    fn query<'a, S>(&'a self, store: &'a Store<S>) -> I::Query<'a, S> {
        self.inner.query(store)
    }
}
