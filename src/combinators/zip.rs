use crate::{Event, Index, Store};

/// Compose independent indexes over the same items.
///
/// A tuple of indexes is already an index, so `zip` just names the
/// composition: `zip((btree(), count()))` and `(btree(), count())` are the
/// same expression. The query handle is the tuple of the children's handles,
/// read positionally.
pub fn zip<Z>(children: Z) -> Z {
    children
}

// Events fan out to the tuple elements in declaration order; the query
// handle is the tuple of the children's handles, each backed by the same
// store.
macro_rules! impl_index_for_tuple {
    ($($child:ident : $pos:tt),+) => {
        impl<T, $($child: Index<T>),+> Index<T> for ($($child,)+) {
            type Query<'a, S> = ($($child::Query<'a, S>,)+) where Self: 'a, S: 'a;

            fn apply(&mut self, event: Event<'_, T>) {
                $(self.$pos.apply(event);)+
            }

            fn query<'a, S>(&'a self, store: &'a Store<S>) -> Self::Query<'a, S> {
                ($(self.$pos.query(store),)+)
            }
        }
    };
}

impl_index_for_tuple!(A: 0, B: 1);
impl_index_for_tuple!(A: 0, B: 1, C: 2);
impl_index_for_tuple!(A: 0, B: 1, C: 2, D: 3);
impl_index_for_tuple!(A: 0, B: 1, C: 2, D: 3, E: 4);
impl_index_for_tuple!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5);
impl_index_for_tuple!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6);
impl_index_for_tuple!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6, H: 7);
