//! Interior nodes of an index tree: combinators that transform the event
//! stream on its way to one or more child indexes.
//!
//! Product composition needs no named combinator: a tuple of indexes is
//! itself an index. Every event is broadcast to each element in declaration
//! order, and the query handle is the tuple of the children's handles, read
//! positionally:
//!
//! ```
//! use composable_indexes::{btree, count, Collection};
//!
//! let mut numbers: Collection<i32, _> = Collection::new((btree(), count()));
//! numbers.insert(7);
//! let (smallest, total) = numbers.query(|(by_value, total)| {
//!     (by_value.min().map(|(_, value)| *value), total)
//! });
//! assert_eq!(smallest, Some(7));
//! assert_eq!(total, 1);
//! ```
//!
//! Tuple arities 2 through 8 are supported; children are independent, one
//! child's state never depends on another's.

mod filtered;
mod grouped;
mod premap;
mod zip;

pub use filtered::{filtered, Filtered};
pub use grouped::{grouped, Grouped, GroupedQuery};
pub use premap::{premap, Premap};
pub use zip::zip;
