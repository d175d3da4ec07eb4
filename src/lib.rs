//! A radix tree (compressed trie) based map implementation.
//!
//! This crate provides a `RadixMap`, a key-value data structure in which
//! edges carry whole key fragments rather than single symbols, so lookups
//! walk at most one node per shared prefix.
//!
//! # Features
//!
//! - Lookups, inserts and removals in O(k) where k is the key length
//! - Prefix match, greedy match and longest-prefix match queries
//! - Ordered iteration, with iterators that double as tree positions
//! - Entry API for in-place updates
//!
//! Keys are anything implementing [`RadixKey`]; implementations for
//! `String` and `Vec<u8>` are provided. One deliberate deviation from the
//! std maps: [`RadixMap::insert`] never replaces an existing value.

mod entry;
mod iter;
mod key;
mod node;
mod radix_map;

pub use entry::{Entry, OccupiedEntry, VacantEntry};
pub use iter::{IntoIter, Iter, Keys, Matches, Values};
pub use key::RadixKey;
pub use radix_map::RadixMap;
