//! Trie nodes.
//!
//! A node owns an optional value and its children, keyed by atom. Walking,
//! deep cloning and dropping are all done with explicit stacks so that very
//! long keys never exhaust the call stack.

use std::collections::{btree_map, BTreeMap};
use std::fmt;
use std::mem;

use crate::key::TrieKey;

pub(crate) struct Node<A, V> {
    pub(crate) value: Option<V>,
    pub(crate) children: BTreeMap<A, Node<A, V>>,
}

/// How a removal tidies the path it empties.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Removal {
    /// The terminal node stays (it has children, or it is the head).
    Clear,
    /// The branch below the node at this depth holds nothing else and goes.
    Detach(usize),
}

impl<A, V> Default for Node<A, V> {
    fn default() -> Self {
        Self {
            value: None,
            children: BTreeMap::new(),
        }
    }
}

impl<A: Ord, V> Node<A, V> {
    /// Follow `key` down from this node.
    pub(crate) fn walk<K: TrieKey<A> + ?Sized>(&self, key: &K) -> Option<&Self> {
        let mut node = self;
        for atom in key.atoms() {
            node = node.children.get(&atom)?;
        }
        Some(node)
    }

    pub(crate) fn walk_mut<K: TrieKey<A> + ?Sized>(&mut self, key: &K) -> Option<&mut Self> {
        let mut node = self;
        for atom in key.atoms() {
            node = node.children.get_mut(&atom)?;
        }
        Some(node)
    }

    /// Follow `key` down from this node, creating any node that is missing.
    pub(crate) fn make_path<K: TrieKey<A> + ?Sized>(&mut self, key: &K) -> &mut Self {
        let mut node = self;
        for atom in key.atoms() {
            node = node.children.entry(atom).or_default();
        }
        node
    }

    /// Work out how removing the value stored at `key` must prune the path.
    ///
    /// Returns `None` when `key` holds no value. Otherwise the shallowest
    /// removable node sits just below the deepest ancestor that still has to
    /// stay: the head, a node with a value, or a node with other children.
    pub(crate) fn plan_removal<K: TrieKey<A> + ?Sized>(&self, key: &K) -> Option<Removal> {
        let mut node = self;
        let mut depth = 0;
        let mut keep = 0;
        for atom in key.atoms() {
            if node.value.is_some() || node.children.len() > 1 {
                keep = depth;
            }
            node = node.children.get(&atom)?;
            depth += 1;
        }
        node.value.as_ref()?;
        if depth == 0 || !node.children.is_empty() {
            Some(Removal::Clear)
        } else {
            Some(Removal::Detach(keep))
        }
    }

    /// Cut the branch that starts at atom `depth` of `key` and return the
    /// value held at its far end.
    ///
    /// The branch must be a chain of valueless single-child nodes ending in a
    /// leaf, as established by [`Node::plan_removal`].
    pub(crate) fn detach<K: TrieKey<A> + ?Sized>(&mut self, key: &K, depth: usize) -> Option<V> {
        let mut atoms = key.atoms();
        let mut node = self;
        for atom in atoms.by_ref().take(depth) {
            node = node.children.get_mut(&atom)?;
        }
        let mut branch = node.children.remove(&atoms.next()?)?;
        loop {
            match branch.children.pop_first() {
                Some((_, next)) => branch = next,
                None => break branch.value.take(),
            }
        }
    }
}

struct CloneFrame<'a, A, V> {
    source: btree_map::Iter<'a, A, Node<A, V>>,
    copy: Node<A, V>,
}

impl<'a, A, V: Clone> CloneFrame<'a, A, V> {
    fn new(node: &'a Node<A, V>) -> Self {
        Self {
            source: node.children.iter(),
            copy: Node {
                value: node.value.clone(),
                children: BTreeMap::new(),
            },
        }
    }
}

impl<A: Clone + Ord, V: Clone> Clone for Node<A, V> {
    fn clone(&self) -> Self {
        let mut head = CloneFrame::new(self);
        let mut stack: Vec<(A, CloneFrame<'_, A, V>)> = Vec::new();
        loop {
            let current = match stack.last_mut() {
                Some((_, frame)) => frame,
                None => &mut head,
            };
            if let Some((atom, child)) = current.source.next() {
                stack.push((atom.clone(), CloneFrame::new(child)));
            } else if let Some((atom, done)) = stack.pop() {
                let parent = match stack.last_mut() {
                    Some((_, frame)) => frame,
                    None => &mut head,
                };
                parent.copy.children.insert(atom, done.copy);
            } else {
                return head.copy;
            }
        }
    }
}

impl<A: PartialEq, V: PartialEq> PartialEq for Node<A, V> {
    fn eq(&self, other: &Self) -> bool {
        let mut pairs = vec![(self, other)];
        while let Some((left, right)) = pairs.pop() {
            if left.value != right.value || left.children.len() != right.children.len() {
                return false;
            }
            for ((left_atom, left_child), (right_atom, right_child)) in
                left.children.iter().zip(right.children.iter())
            {
                if left_atom != right_atom {
                    return false;
                }
                pairs.push((left_child, right_child));
            }
        }
        true
    }
}

impl<A: Eq, V: Eq> Eq for Node<A, V> {}

/// One node in pre-order: its depth below the head, atom and value.
struct Entry<'a, A, V>(usize, Option<&'a A>, &'a Option<V>);

impl<A: fmt::Debug, V: fmt::Debug> fmt::Debug for Entry<'_, A, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Entry")
            .field(&self.0)
            .field(&self.1)
            .field(&self.2)
            .finish()
    }
}

// Flattened to a pre-order list so deep tries don't recurse.
impl<A: fmt::Debug, V: fmt::Debug> fmt::Debug for Node<A, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        let mut pending: Vec<(usize, Option<&A>, &Node<A, V>)> = vec![(0, None, self)];
        while let Some((depth, atom, node)) = pending.pop() {
            list.entry(&Entry(depth, atom, &node.value));
            for (atom, child) in node.children.iter().rev() {
                pending.push((depth + 1, Some(atom), child));
            }
        }
        list.finish()
    }
}

impl<A, V> Drop for Node<A, V> {
    fn drop(&mut self) {
        let mut pending: Vec<Node<A, V>> = mem::take(&mut self.children).into_values().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(mem::take(&mut node.children).into_values());
        }
    }
}
