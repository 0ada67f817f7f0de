//! Primary lookup indexes.

mod btree;
mod hashtable;
mod keys;

pub use btree::{btree, BTreeIndex, BTreeQuery};
pub use hashtable::{
    hashtable_multi, hashtable_unique, HashTableMultiIndex, HashTableMultiQuery,
    HashTableUniqueIndex, HashTableUniqueQuery,
};
pub use keys::{keys, KeysIndex, KeysQuery};
