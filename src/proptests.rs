use crate::node::Node;
use crate::trie::{Trie, TrieString};

use proptest::prelude::*;
use std::collections::BTreeMap;

/// Every node below the head must hold a value or lead to one, and the
/// number of values must match the count.
fn validate_trie<A: Ord + Clone, V>(t: &Trie<A, V>) {
    let mut values = usize::from(t.head.value.is_some());
    let mut stack: Vec<&Node<A, V>> = t.head.children.values().collect();
    while let Some(node) = stack.pop() {
        assert!(
            node.value.is_some() || !node.children.is_empty(),
            "valueless leaf survived pruning"
        );
        values += usize::from(node.value.is_some());
        stack.extend(node.children.values());
    }
    assert_eq!(values, t.count(), "count must track stored values");
}

#[derive(Clone, Debug)]
enum Op {
    Insert(String, u32),
    Erase(String),
    Bump(String),
}

fn key() -> impl Strategy<Value = String> {
    "[a-c]{0,5}"
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (key(), any::<u32>()).prop_map(|(k, v)| Op::Insert(k, v)),
        3 => key().prop_map(Op::Erase),
        1 => key().prop_map(Op::Bump),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_matches_btreemap_model(ops in prop::collection::vec(op(), 0..80), probes in prop::collection::vec(key(), 0..20)) {
        let mut trie: TrieString<u32> = Trie::new();
        let mut model: BTreeMap<String, u32> = BTreeMap::new();

        for op in ops {
            match op {
                Op::Insert(k, v) => {
                    prop_assert_eq!(trie.insert(k.as_str(), v), model.insert(k, v));
                }
                Op::Erase(k) => {
                    prop_assert_eq!(trie.erase(k.as_str()), model.remove(&k).is_some());
                }
                Op::Bump(k) => {
                    let v = trie.get_or_insert_default(k.as_str());
                    *v = v.wrapping_add(1);
                    let m = model.entry(k).or_default();
                    *m = m.wrapping_add(1);
                }
            }
            validate_trie(&trie);
        }

        prop_assert_eq!(trie.count(), model.len());
        for probe in probes.iter().chain(model.keys()) {
            prop_assert_eq!(trie.get(probe.as_str()), model.get(probe));
            prop_assert_eq!(trie.contains(probe.as_str()), model.contains_key(probe));
            let prefixed = model.keys().any(|k| k.starts_with(probe.as_str()));
            prop_assert_eq!(trie.contains_prefix(probe.as_str()), prefixed || probe.is_empty());
        }
    }

    #[test]
    fn prop_sequence_keys_behave_like_strings(keys in prop::collection::vec("[a-d]{0,6}", 0..30), erased in prop::collection::vec(any::<prop::sample::Index>(), 0..10)) {
        let mut chars: TrieString<usize> = Trie::new();
        let mut bytes: Trie<u8, usize> = Trie::new();
        for (i, k) in keys.iter().enumerate() {
            chars.insert(k.as_str(), i);
            bytes.insert(k.as_bytes(), i);
        }
        if !keys.is_empty() {
            for index in erased {
                let k = index.get(&keys);
                prop_assert_eq!(chars.erase(k.as_str()), bytes.erase(k.as_bytes()));
            }
        }
        validate_trie(&bytes);
        for k in &keys {
            prop_assert_eq!(chars.get(k.as_str()), bytes.get(k.as_bytes()));
            for end in 0..=k.len() {
                prop_assert_eq!(chars.contains_prefix(&k[..end]), bytes.contains_prefix(&k.as_bytes()[..end]));
            }
        }
        prop_assert_eq!(chars.count(), bytes.count());
    }

    #[test]
    fn prop_clones_are_independent(keys in prop::collection::vec(key(), 1..20), extra in key()) {
        let mut original: TrieString<usize> = Trie::new();
        for (i, k) in keys.iter().enumerate() {
            original.insert(k.as_str(), i);
        }
        let snapshot = original.to_string();
        let mut copy = original.clone();
        prop_assert_eq!(&copy, &original);

        copy.insert(extra.as_str(), usize::MAX);
        for k in &keys {
            copy.erase(k.as_str());
        }
        validate_trie(&copy);
        validate_trie(&original);
        prop_assert_eq!(original.to_string(), snapshot);
        for k in &keys {
            prop_assert!(original.contains(k.as_str()));
        }
    }

    #[test]
    fn prop_renders_one_top_line_per_first_atom(keys in prop::collection::vec("[a-e]{1,4}", 0..20)) {
        let mut trie: TrieString<()> = Trie::new();
        for k in &keys {
            trie.insert(k.as_str(), ());
        }
        let diagram = trie.to_string();
        let top: Vec<char> = diagram
            .lines()
            .filter_map(|line| line.chars().find(|c| c.is_ascii_lowercase()).filter(|_| !line.starts_with(' ')))
            .collect();
        let mut firsts: Vec<char> = keys.iter().filter_map(|k| k.chars().next()).collect();
        firsts.sort();
        firsts.dedup();
        prop_assert_eq!(top, firsts);
        prop_assert!(!diagram.ends_with('\n'));
    }
}
