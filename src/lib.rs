//! Provides a generic prefix tree (trie) mapping keys composed of sequences
//! of atoms to values.
//!
//! Keys must support the [`crate::key::TrieKey`] trait. Atoms must support
//! the [`crate::trie::TrieAtom`] trait, that is be cloneable and totally
//! ordered. Values need no traits at all, except `Clone` to clone a trie and
//! `Default` to write through indexing.
//!
//! Strings are viewed as their `char`s and any slice, array or `Vec` as its
//! items, so the same [`crate::trie::Trie`] type serves autocomplete over
//! words as well as routing tables keyed by path segments. The common case
//! has a convenience alias, [`crate::trie::TrieString`].
//!
//! A trie whose atoms implement `Display` renders as a compact tree diagram:
//!
//! ```
//! use prefix_tree::trie::{Trie, TrieString};
//!
//! let mut trie: TrieString<u32> = Trie::new();
//! trie.insert("test", 1);
//! trie.insert("tess", 2);
//! trie.insert("tester", 3);
//!
//! assert!(trie.contains_prefix("tes"));
//! assert!(trie.contains("tester"));
//! println!("{trie}");
//! assert_eq!(trie.to_string(), "t-e-s-(s)\n     `-(t)-e-(r)");
//! ```
//!
//! Examples:
//! * trie : [`crate::trie`]
//! * rendering : [`crate::render`]
//! * keys : [`crate::key`]
//!
//! Typical usages for this data structure:
//!  - Autocomplete
//!  - Symbol tables
//!  - Routing tables keyed by path segments
//!  - ...

pub mod key;
mod node;
pub mod render;
pub mod trie;

#[cfg(test)]
mod proptests;

pub use key::TrieKey;
pub use trie::{Trie, TrieAtom, TrieString, TrieVec};
