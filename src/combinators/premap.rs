use std::marker::PhantomData;

use crate::{Event, Index, Store};

/// Projects every event through a key-extraction function before handing it
/// to the inner index.
pub struct Premap<F, I, In, Out> {
    project: F,
    inner: I,
    _types: PhantomData<fn(&In) -> Out>,
}

/// Index the projection `project(&item)` instead of the whole item.
///
/// The projection runs exactly once per event side and is not memoized, so
/// it should stay cheap: a field access, a clone of a key, a cast. It must
/// be deterministic and side-effect-free. Queries pass straight through to
/// the inner index, which still resolves envelopes against the root store.
pub fn premap<F, I, In, Out>(project: F, inner: I) -> Premap<F, I, In, Out>
where
    F: Fn(&In) -> Out,
    I: Index<Out>,
{
    Premap {
        project,
        inner,
        _types: PhantomData,
    }
}

impl<F, I, In, Out> Index<In> for Premap<F, I, In, Out>
where
    F: Fn(&In) -> Out,
    I: Index<Out>,
{
    type Query<'a, S> = I::Query<'a, S> where Self: 'a, S: 'a;

    fn apply(&mut self, event: Event<'_, In>) {
        match event {
            Event::Add { id, new } => {
                let new = (self.project)(new);
                self.inner.apply(Event::Add { id, new: &new });
            }
            Event::Update { id, old, new } => {
                let old = (self.project)(old);
                let new = (self.project)(new);
                self.inner.apply(Event::Update {
                    id,
                    old: &old,
                    new: &new,
                });
            }
            Event::Remove { id, old } => {
                let old = (self.project)(old);
                self.inner.apply(Event::Remove { id, old: &old });
            }
        }
    }

    fn query<'a, S>(&'a self, store: &'a Store<S>) -> I::Query<'a, S> {
        self.inner.query(store)
    }
}
