// Copyright (c) 2025 Lehua Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Unit tests for the Lehua prefix trie.

use crate::data_structures::lehua_trie::{LehuaTrie, LehuaTrieError};

#[test]
fn test_sibling_keys_share_first_node() {
    let mut trie = LehuaTrie::new(10);
    trie.insert("az", 0).unwrap().insert("ah", 1).unwrap();

    assert_eq!(trie.retrieve("a"), &[0, 1]);
    assert_eq!(trie.retrieve("az"), &[0]);
    assert_eq!(trie.retrieve("ah"), &[1]);
    assert!(trie.retrieve("b").is_empty());
    assert!(trie.retrieve("azz").is_empty());
}

#[test]
fn test_bound_suppresses_later_values() {
    let mut trie = LehuaTrie::new(1);
    trie.insert("cat", 10).unwrap();
    trie.insert("car", 20).unwrap();

    assert_eq!(trie.retrieve("ca"), &[10]);
    assert_eq!(trie.retrieve("cat"), &[10]);
    assert_eq!(trie.retrieve("car"), &[20]);
}

#[test]
fn test_adjacent_duplicates_collapse() {
    let mut trie = LehuaTrie::new(5);
    trie.insert("cat", 10).unwrap();
    trie.insert("cat", 10).unwrap();

    assert_eq!(trie.retrieve("cat"), &[10]);
    assert_eq!(trie.retrieve("c"), &[10]);
}

#[test]
fn test_only_immediate_duplicate_is_checked() {
    let mut trie = LehuaTrie::new(5);
    trie.insert("k", 1).unwrap();
    trie.insert("k", 2).unwrap();
    trie.insert("k", 1).unwrap();

    assert_eq!(trie.retrieve("k"), &[1, 2, 1]);
}

#[test]
fn test_root_values_stay_empty() {
    let mut trie = LehuaTrie::new(3);
    trie.insert_all([("x", 1), ("y", 2), ("xy", 3)]).unwrap();

    assert!(trie.retrieve("").is_empty());
    assert!(trie.values().is_empty());
    assert_eq!(trie.retrieve("x"), &[1, 3]);
}

#[test]
fn test_empty_prefix_returns_own_values() {
    let mut trie = LehuaTrie::new(3);
    trie.insert("ab", 7).unwrap();

    let (c, child) = trie.edges().next().unwrap();
    assert_eq!(c, 'a');
    assert_eq!(child.retrieve(""), child.values());
    assert_eq!(child.retrieve(""), &[7]);
    assert_eq!(child.retrieve("b"), &[7]);
}

#[test]
fn test_empty_key_is_rejected() {
    let mut trie = LehuaTrie::new(3);
    trie.insert("a", 1).unwrap();
    let before = trie.clone();

    let err = trie.insert("", 2).unwrap_err();
    assert!(matches!(err, LehuaTrieError::EmptyKey));
    assert_eq!(trie, before);
}

#[test]
fn test_zero_bound_keeps_structure_only() {
    let mut trie = LehuaTrie::new(0);
    trie.insert("abc", 1).unwrap();

    assert!(trie.retrieve("abc").is_empty());
    assert!(trie.contains_prefix("abc"));
    assert_eq!(trie.node_count(), 4);
}

#[test]
fn test_unicode_keys() {
    let mut trie = LehuaTrie::new(4);
    trie.insert("héllo", "greeting").unwrap();
    trie.insert("hé", "short").unwrap();

    assert_eq!(trie.retrieve("hé"), &["greeting", "short"]);
    assert_eq!(trie.retrieve("héll"), &["greeting"]);
    assert!(trie.retrieve("he").is_empty());
}

#[test]
fn test_long_key_does_not_recurse() {
    let key: String = std::iter::repeat('z').take(1_000).collect();
    let mut trie = LehuaTrie::new(2);
    trie.insert(&key, 1).unwrap();

    assert_eq!(trie.retrieve(&key), &[1]);
    assert_eq!(trie.node_count(), 1_001);
    assert!(trie.check_structure().is_ok());
}

#[test]
fn test_long_key_json_round_trip() {
    for len in [61, 64, 250] {
        let key: String = ('a'..='z').cycle().take(len).collect();
        let mut trie = LehuaTrie::new(3);
        trie.insert(&key, 7).unwrap().insert("ab", 8).unwrap();

        let decoded = LehuaTrie::<i32>::from_json(&trie.to_json().unwrap()).unwrap();
        assert_eq!(decoded.retrieve(&key), &[7]);
        assert_eq!(decoded.retrieve("ab"), &[7, 8]);
        assert_eq!(decoded, trie);
    }
}

#[test]
fn test_deep_trie_json_round_trip() {
    let key: String = std::iter::repeat('q').take(10_000).collect();
    let mut trie = LehuaTrie::new(1);
    trie.insert(&key, 3u32).unwrap();

    let json = trie.to_json().unwrap();
    let decoded = LehuaTrie::<u32>::from_json(&json).unwrap();

    assert_eq!(decoded.node_count(), 10_001);
    assert_eq!(decoded.retrieve(&key), &[3]);
    assert_eq!(decoded, trie);
}

#[test]
fn test_deep_trie_drops_iteratively() {
    let key: String = std::iter::repeat('d').take(100_000).collect();
    let mut trie = LehuaTrie::new(1);
    trie.insert(&key, 0u8).unwrap();
    assert_eq!(trie.node_count(), 100_001);

    drop(trie);
}

#[test]
fn test_deep_trie_clone_and_eq() {
    let key: String = std::iter::repeat('c').take(100_000).collect();
    let mut trie = LehuaTrie::new(2);
    trie.insert(&key, 1u8).unwrap().insert("cb", 2).unwrap();

    let mut copy = trie.clone();
    assert_eq!(copy, trie);
    assert_eq!(copy.node_count(), trie.node_count());
    assert_eq!(copy.retrieve(&key), &[1]);

    copy.insert(&key, 9).unwrap();
    assert_ne!(copy, trie);
    assert_eq!(trie.retrieve(&key), &[1]);
    assert_eq!(copy.retrieve(&key), &[1, 9]);

    let debug = format!("{trie:?}");
    assert!(debug.contains("nodes: 100002"));
}

#[test]
fn test_clone_copies_branching_tree() {
    let mut trie = LehuaTrie::new(3);
    trie.insert_all([("cat", 1), ("car", 2), ("dog", 3), ("do", 4)])
        .unwrap();

    let copy = trie.clone();
    assert_eq!(copy, trie);
    for prefix in ["", "c", "ca", "cat", "car", "d", "do", "dog", "x"] {
        assert_eq!(copy.retrieve(prefix), trie.retrieve(prefix), "prefix {prefix:?}");
    }

    let mut other = LehuaTrie::new(3);
    other.insert_all([("cat", 1), ("car", 2), ("dog", 3)]).unwrap();
    assert_ne!(other, trie);
}

#[test]
fn test_accessors() {
    let mut trie: LehuaTrie<u8> = LehuaTrie::new(2);
    assert!(trie.is_empty());
    assert_eq!(trie.max_results(), 2);
    assert_eq!(trie.node_count(), 1);

    trie.insert("ab", 1).unwrap();
    assert!(!trie.is_empty());
    assert!(trie.contains_prefix(""));
    assert!(trie.contains_prefix("a"));
    assert!(!trie.contains_prefix("b"));
    assert_eq!(trie.children().count(), 1);
}

#[test]
fn test_json_shape() {
    let mut trie = LehuaTrie::new(2);
    trie.insert("a", 5).unwrap();

    let value: serde_json::Value = serde_json::from_str(&trie.to_json().unwrap()).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "maxResults": 2,
            "values": [],
            "edges": {
                "a": { "maxResults": 2, "values": [5], "edges": {} }
            }
        })
    );
}

#[test]
fn test_json_round_trip_is_independent() {
    let mut trie = LehuaTrie::new(3);
    trie.insert_all([("az", 0), ("ah", 1), ("hs", 2)]).unwrap();

    let mut restored = LehuaTrie::<i32>::from_json(&trie.to_json().unwrap()).unwrap();
    assert_eq!(restored, trie);

    restored.insert("b", 9).unwrap();
    assert!(trie.retrieve("b").is_empty());
    assert_eq!(restored.retrieve("b"), &[9]);
}

#[test]
fn test_from_json_rejects_schema_mismatches() {
    let cases = [
        r#"{"values": [], "edges": {}}"#,
        r#"{"maxResults": -1, "values": [], "edges": {}}"#,
        r#"{"maxResults": 1, "values": ["x"], "edges": {}}"#,
        r#"{"maxResults": 1, "values": [], "edges": {"ab": {"maxResults": 1, "values": [], "edges": {}}}}"#,
        r#"{"maxResults": 1, "values": [], "edges": {"a": {"maxResults": 1, "values": []}}}"#,
        r#"{"maxResults": 1, "values": [], "edges": {}, "extra": true}"#,
        "not json",
    ];

    for json in cases {
        let err = LehuaTrie::<i32>::from_json(json).unwrap_err();
        assert!(
            matches!(err, LehuaTrieError::Deserialization(_)),
            "expected deserialization error for {json}, got {err:?}"
        );
    }
}

#[test]
fn test_from_json_rejects_broken_invariants() {
    let too_many = r#"{"maxResults": 1, "values": [], "edges": {
        "a": {"maxResults": 1, "values": [1, 2], "edges": {}}
    }}"#;
    match LehuaTrie::<i32>::from_json(too_many).unwrap_err() {
        LehuaTrieError::InvalidStructure { path, .. } => assert_eq!(path, "a"),
        other => panic!("unexpected error: {other:?}"),
    }

    let mismatched = r#"{"maxResults": 2, "values": [], "edges": {
        "a": {"maxResults": 2, "values": [], "edges": {
            "b": {"maxResults": 3, "values": [], "edges": {}}
        }}
    }}"#;
    match LehuaTrie::<i32>::from_json(mismatched).unwrap_err() {
        LehuaTrieError::InvalidStructure { path, reason } => {
            assert_eq!(path, "ab");
            assert!(reason.contains("differs"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_trie_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<LehuaTrie<String>>();
}
