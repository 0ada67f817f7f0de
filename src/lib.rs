//! In-memory collections with composable, automatically synchronized
//! secondary indexes.
//!
//! A [`Collection`] owns items keyed by an opaque, monotonically issued
//! [`Id`]. Next to the store lives a tree of indexes, declared once at
//! construction time: leaves are lookup structures ([`btree`],
//! [`hashtable_unique`], [`hashtable_multi`], [`keys`]) or running aggregates
//! ([`count`], [`sum`], [`mean`], [`min`], [`max`], [`fold`]), and interior
//! nodes transform the event stream ([`premap`], [`filtered`], [`grouped`],
//! or [`zip`], a plain tuple indexing several ways at once). Every mutation is
//! applied to the store and then fanned out to the whole tree before the call
//! returns, so queries read the maintained structures instead of scanning.
//!
//! ```
//! use composable_indexes::{btree, count, premap, Collection};
//!
//! struct Person {
//!     name: String,
//!     age: u32,
//! }
//!
//! let mut people = Collection::new((
//!     premap(|p: &Person| p.age, btree()),
//!     count(),
//! ));
//!
//! let ada = people.insert(Person { name: "Ada".into(), age: 36 });
//! people.insert(Person { name: "Grace".into(), age: 47 });
//!
//! let (youngest, total) = people.query(|(by_age, total)| {
//!     (by_age.min().map(|(id, _)| id), total)
//! });
//! assert_eq!(youngest, Some(ada));
//! assert_eq!(total, 2);
//! ```
//!
//! Custom indexes are ordinary [`Index`] implementations; anything that can
//! fold an [`Event`] into local state and answer from it composes with the
//! built-in tree.

pub mod aggregate;
pub mod combinators;
pub mod indexes;

mod collection;
mod event;
mod id;
mod index;
mod store;

pub use collection::Collection;
pub use event::Event;
pub use id::Id;
pub use index::Index;
pub use store::Store;

pub use aggregate::{count, fold, max, mean, min, sum};
pub use combinators::{filtered, grouped, premap, zip};
pub use indexes::{btree, hashtable_multi, hashtable_unique, keys};

#[cfg(feature = "rustc-hash")]
pub(crate) type HashMap<K, V> = rustc_hash::FxHashMap<K, V>;
#[cfg(not(feature = "rustc-hash"))]
pub(crate) type HashMap<K, V> = std::collections::HashMap<K, V>;
