//! Adapts caller keys into sequences of atoms.
//!
//! Every [`crate::trie::Trie`] operation takes its key by reference and asks
//! it for a fresh iterator of atoms. Strings yield their `char`s, slices and
//! vectors yield clones of their items. The trie never needs to know which
//! kind of key it was handed.
//!
//! ```
//! use prefix_tree::key::TrieKey;
//!
//! let atoms: Vec<char> = "abc".atoms().collect();
//! assert_eq!(atoms, vec!['a', 'b', 'c']);
//!
//! let atoms: Vec<u8> = [1u8, 2, 3][..].atoms().collect();
//! assert_eq!(atoms, vec![1, 2, 3]);
//! ```

use std::iter::Cloned;
use std::slice;
use std::str::Chars;

/// A read-only view of a key as a sequence of atoms of type `A`.
///
/// `atoms` may be called any number of times; each call walks the key from
/// the start without copying it.
pub trait TrieKey<A> {
    /// Iterator over the atoms of the key.
    type Atoms<'a>: Iterator<Item = A>
    where
        Self: 'a;

    /// Walk the key from its first atom.
    fn atoms(&self) -> Self::Atoms<'_>;
}

impl TrieKey<char> for str {
    type Atoms<'a> = Chars<'a>;

    fn atoms(&self) -> Self::Atoms<'_> {
        self.chars()
    }
}

impl TrieKey<char> for String {
    type Atoms<'a> = Chars<'a>;

    fn atoms(&self) -> Self::Atoms<'_> {
        self.as_str().chars()
    }
}

impl<A: Clone> TrieKey<A> for [A] {
    type Atoms<'a>
        = Cloned<slice::Iter<'a, A>>
    where
        Self: 'a;

    fn atoms(&self) -> Self::Atoms<'_> {
        self.iter().cloned()
    }
}

impl<A: Clone, const N: usize> TrieKey<A> for [A; N] {
    type Atoms<'a>
        = Cloned<slice::Iter<'a, A>>
    where
        Self: 'a;

    fn atoms(&self) -> Self::Atoms<'_> {
        self.iter().cloned()
    }
}

impl<A: Clone> TrieKey<A> for Vec<A> {
    type Atoms<'a>
        = Cloned<slice::Iter<'a, A>>
    where
        Self: 'a;

    fn atoms(&self) -> Self::Atoms<'_> {
        self.iter().cloned()
    }
}

impl<A, K> TrieKey<A> for &K
where
    K: TrieKey<A> + ?Sized,
{
    type Atoms<'a>
        = K::Atoms<'a>
    where
        Self: 'a;

    fn atoms(&self) -> Self::Atoms<'_> {
        (**self).atoms()
    }
}
