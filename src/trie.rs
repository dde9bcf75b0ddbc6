//! Provides a prefix tree storing keys composed of sequences of atoms. A key
//! may have an associated value.
//!
//! Atoms must support the TrieAtom trait. Keys are anything implementing
//! [`crate::key::TrieKey`]: strings are read as `char` atoms, slices, arrays
//! and vectors as their items.
//!
//! Every operation takes the key by reference and walks it afresh, so the
//! same key value can be used again and again.
//!
//! Example 1
//! ```
//! use prefix_tree::trie::{Trie, TrieString};
//!
//! let mut trie: TrieString<usize> = Trie::new();
//! trie.insert("hello", 1);
//! trie.insert("help", 2);
//!
//! assert!(trie.contains("hello"));
//! assert!(!trie.contains("hel"));
//! assert!(trie.contains_prefix("hel"));
//! assert_eq!(trie.get("help"), Some(&2));
//! assert!(trie.erase("hello"));
//! assert!(!trie.contains_prefix("hell"));
//! assert!(trie.contains("help"));
//! ```
//!
//! Example 2
//! ```
//! use prefix_tree::trie::Trie;
//!
//! // Keys can be any ordered sequence: here, path segments.
//! let mut routes: Trie<&str, u16> = Trie::new();
//! routes.insert(&["api", "v1", "users"], 200);
//! routes.insert(&vec!["api", "v1", "groups"], 201);
//!
//! assert!(routes.contains_prefix(&["api", "v1"]));
//! assert_eq!(routes.get(&["api", "v1", "groups"]), Some(&201));
//! assert_eq!(routes.remove(&["api", "v1", "users"]), Some(200));
//! ```
//!
//! Example 3
//! ```
//! use prefix_tree::trie::{Trie, TrieString};
//!
//! // Indexing for writes creates a default value when none is stored yet.
//! let mut counts: TrieString<u32> = Trie::new();
//! for word in ["to", "be", "or", "not", "to", "be"] {
//!     counts[word] += 1;
//! }
//! assert_eq!(counts["to"], 2);
//! assert_eq!(counts["not"], 1);
//! assert_eq!(counts.count(), 4);
//! ```
//!
//! Typical usages for this data structure:
//!  - Autocomplete
//!  - Symbol tables
//!  - Routing tables keyed by path segments
//!  - Prefix matching keys

use std::ops::{Index, IndexMut};

use crate::key::TrieKey;
use crate::node::{Node, Removal};

/// Atoms which we wish to store in a Trie must implement
/// TrieAtom.
pub trait TrieAtom: Clone + Ord {}

// Blanket implementation which satisfies the compiler
impl<A> TrieAtom for A where A: Clone + Ord {}

/// A Trie keyed by the chars of a string.
pub type TrieString<V> = Trie<char, V>;

/// A Trie keyed by a sequence of atoms.
pub type TrieVec<A, V> = Trie<A, V>;

/// Stores a key of atoms as individual nodes.
#[derive(Debug, PartialEq, Eq)]
pub struct Trie<A, V> {
    pub(crate) head: Node<A, V>,
    count: usize,
}

impl<A, V> Default for Trie<A, V> {
    fn default() -> Self {
        Self {
            head: Node::default(),
            count: 0,
        }
    }
}

impl<A: TrieAtom, V> Trie<A, V> {
    /// Create a new Trie.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the Trie.
    pub fn clear(&mut self) {
        tracing::trace!(count = self.count, "clearing trie");
        self.head = Node::default();
        self.count = 0;
    }

    /// Does the Trie contain the supplied key?
    pub fn contains<K: TrieKey<A> + ?Sized>(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Does any key in the Trie start with the supplied prefix? The empty
    /// prefix is always present.
    pub fn contains_prefix<P: TrieKey<A> + ?Sized>(&self, prefix: &P) -> bool {
        self.head.walk(prefix).is_some()
    }

    /// How many keys does the Trie contain?
    #[inline(always)]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Is the Trie empty?
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Get a reference to a key's associated value.
    pub fn get<K: TrieKey<A> + ?Sized>(&self, key: &K) -> Option<&V> {
        self.head.walk(key)?.value.as_ref()
    }

    /// Get a mutable reference to a key's associated value.
    pub fn get_mut<K: TrieKey<A> + ?Sized>(&mut self, key: &K) -> Option<&mut V> {
        self.head.walk_mut(key)?.value.as_mut()
    }

    /// Get a mutable reference to a key's associated value, inserting the
    /// key with a default value first if it is not present.
    pub fn get_or_insert_default<K: TrieKey<A> + ?Sized>(&mut self, key: &K) -> &mut V
    where
        V: Default,
    {
        let node = self.head.make_path(key);
        if node.value.is_none() {
            self.count += 1;
        }
        node.value.get_or_insert_with(V::default)
    }

    /// Insert the key and value into the Trie. If the key is already present
    /// the value is updated to the new value. Returns the previously
    /// associated value.
    pub fn insert<K: TrieKey<A> + ?Sized>(&mut self, key: &K, value: V) -> Option<V> {
        let previous = self.head.make_path(key).value.replace(value);
        if previous.is_none() {
            self.count += 1;
        }
        previous
    }

    /// Remove the key from the Trie, returning its value if it was present.
    ///
    /// Nodes left with neither a value nor children are pruned, so no prefix
    /// of the removed key lingers unless another key still needs it.
    pub fn remove<K: TrieKey<A> + ?Sized>(&mut self, key: &K) -> Option<V> {
        let value = match self.head.plan_removal(key)? {
            Removal::Clear => self.head.walk_mut(key)?.value.take(),
            Removal::Detach(depth) => {
                tracing::trace!(depth, "pruning detached branch");
                self.head.detach(key, depth)
            }
        };
        if value.is_some() {
            self.count -= 1;
        }
        value
    }

    /// Remove the key from the Trie. Returns false, changing nothing, if the
    /// key was not present.
    pub fn erase<K: TrieKey<A> + ?Sized>(&mut self, key: &K) -> bool {
        self.remove(key).is_some()
    }
}

impl<A: TrieAtom, V: Clone> Clone for Trie<A, V> {
    fn clone(&self) -> Self {
        tracing::trace!(count = self.count, "cloning trie");
        Self {
            head: self.head.clone(),
            count: self.count,
        }
    }
}

/// Read access by key.
///
/// # Panics
///
/// Panics if the key is not present in the Trie.
impl<A, V, K> Index<&K> for Trie<A, V>
where
    A: TrieAtom,
    K: TrieKey<A> + ?Sized,
{
    type Output = V;

    fn index(&self, key: &K) -> &V {
        self.get(key).expect("key not present in trie")
    }
}

/// Write access by key. A missing key is inserted with a default value.
impl<A, V, K> IndexMut<&K> for Trie<A, V>
where
    A: TrieAtom,
    V: Default,
    K: TrieKey<A> + ?Sized,
{
    fn index_mut(&mut self, key: &K) -> &mut V {
        self.get_or_insert_default(key)
    }
}
