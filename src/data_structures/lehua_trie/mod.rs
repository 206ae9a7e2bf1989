// Copyright (c) 2025 Lehua Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Lehua Prefix Trie Implementation
//!
//! This module provides a bounded prefix trie that maps character sequences
//! to a short list of associated values. Every node keeps at most
//! `max_results` values, so a prefix lookup is a walk down the edges followed
//! by a slice borrow, with no subtree collection.
//!
//! # Insertion model
//!
//! Inserting `k1 k2 .. kn` with value `v` appends `v` to the node reached
//! after `k1`, the node reached after `k1 k2`, and so on down to the node for
//! the full key. The root is never written. At each node the value is stored
//! only if the node still has room and the last stored value differs from
//! `v`; only the immediately preceding entry is compared.
//!
//! # Wire shape
//!
//! The trie serializes as
//! `{ "maxResults": n, "values": [..], "edges": { "c": { .. } } }`,
//! recursively. [`LehuaTrie::from_json`] checks the structural invariants of
//! the decoded tree before handing it out.
//!
//! # Depth
//!
//! A key of length n builds a chain n nodes deep, and keys have no length
//! limit. Every whole-tree operation (drop, clone, equality, counting,
//! structure checks) walks an explicit work stack. Encoding and decoding go
//! through serde, which nests one call per level, so both grow the stack on
//! demand instead of relying on the thread's fixed stack.

mod error;
#[cfg(test)]
mod tests;

use std::fmt;

use hashbrown::hash_map::Iter as EdgeIter;
use hashbrown::HashMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize, Serializer};
use tracing::{debug, trace};

use crate::codec::JsonCodec;
use crate::error::codec::CodecError;
pub use error::LehuaTrieError;

/// Result type for Lehua Trie operations
pub type LehuaTrieResult<T> = Result<T, LehuaTrieError>;

/// A bounded, adjacent-deduplicating prefix trie.
///
/// The trie is its own node type: every child is a `LehuaTrie` owned by its
/// parent's edge map and inherits the parent's `max_results`.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LehuaTrie<V> {
    /// Upper bound on `values.len()`, shared by every node in the tree
    max_results: usize,

    /// Values stored at this node, in insertion order
    values: Vec<V>,

    /// Map of characters to child nodes
    #[serde(serialize_with = "serialize_edges")]
    edges: HashMap<char, LehuaTrie<V>>,
}

/// Free stack that must remain before descending into another level.
const STACK_RED_ZONE: usize = 64 * 1024;

/// Size of each stack segment allocated once the red zone is reached.
const STACK_SEGMENT: usize = 2 * 1024 * 1024;

fn serialize_edges<S, V>(edges: &HashMap<char, LehuaTrie<V>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    V: Serialize,
{
    stacker::maybe_grow(STACK_RED_ZONE, STACK_SEGMENT, || edges.serialize(serializer))
}

impl<V> LehuaTrie<V> {
    /// Creates a new empty trie whose nodes keep at most `max_results` values.
    pub fn new(max_results: usize) -> Self {
        Self {
            max_results,
            values: Vec::new(),
            edges: HashMap::new(),
        }
    }

    /// Returns the per-node bound on stored values.
    pub fn max_results(&self) -> usize {
        self.max_results
    }

    /// Returns the values stored at this node.
    pub fn values(&self) -> &[V] {
        &self.values
    }

    /// Iterates over the child nodes with the character leading to each.
    pub fn edges(&self) -> impl Iterator<Item = (char, &LehuaTrie<V>)> {
        self.edges.iter().map(|(c, child)| (*c, child))
    }

    /// Iterates over the child nodes.
    pub fn children(&self) -> impl Iterator<Item = &LehuaTrie<V>> {
        self.edges.values()
    }

    /// Retrieves the values stored at the node reached by consuming `prefix`.
    ///
    /// An empty prefix yields this node's own values. A prefix that leaves
    /// the tree yields an empty slice; lookups never fail.
    pub fn retrieve<P>(&self, prefix: P) -> &[V]
    where
        P: AsRef<str>,
    {
        match self.find_node(prefix.as_ref()) {
            Some(node) => &node.values,
            None => &[],
        }
    }

    /// Checks whether some inserted key starts with `prefix`.
    pub fn contains_prefix<P>(&self, prefix: P) -> bool
    where
        P: AsRef<str>,
    {
        self.find_node(prefix.as_ref()).is_some()
    }

    /// Returns `true` if nothing has been inserted below this node.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty() && self.values.is_empty()
    }

    /// Counts the nodes in the tree, this one included.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.edges.values());
        }
        count
    }

    /// Verifies the invariants that insertion maintains on its own: no node
    /// holds more than `max_results` values and every child shares its
    /// parent's bound.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the whole tree is consistent.
    /// * `Err(LehuaTrieError::InvalidStructure)` - Naming the first offending node.
    pub fn check_structure(&self) -> LehuaTrieResult<()> {
        let mut stack: Vec<(String, &Self)> = vec![(String::new(), self)];

        while let Some((path, node)) = stack.pop() {
            if node.values.len() > node.max_results {
                return Err(LehuaTrieError::InvalidStructure {
                    reason: format!(
                        "{} values exceed maxResults of {}",
                        node.values.len(),
                        node.max_results
                    ),
                    path,
                });
            }

            for (c, child) in &node.edges {
                let mut child_path = path.clone();
                child_path.push(*c);

                if child.max_results != node.max_results {
                    return Err(LehuaTrieError::InvalidStructure {
                        reason: format!(
                            "maxResults {} differs from parent's {}",
                            child.max_results, node.max_results
                        ),
                        path: child_path,
                    });
                }

                stack.push((child_path, child));
            }
        }

        Ok(())
    }

    fn detached(&self) -> Self
    where
        V: Clone,
    {
        Self {
            max_results: self.max_results,
            values: self.values.clone(),
            edges: HashMap::with_capacity(self.edges.len()),
        }
    }

    fn find_node(&self, prefix: &str) -> Option<&Self> {
        let mut node = self;
        for c in prefix.chars() {
            node = node.edges.get(&c)?;
        }
        Some(node)
    }
}

impl<V> LehuaTrie<V>
where
    V: PartialEq + Clone,
{
    /// Inserts `value` under every non-empty prefix of `key`.
    ///
    /// # Arguments
    ///
    /// * `key` - The key to insert. Must not be empty.
    /// * `value` - The value to associate with each prefix of the key.
    ///
    /// # Returns
    ///
    /// * `Ok(&mut Self)` - The trie itself, so insertions can be chained.
    /// * `Err(LehuaTrieError::EmptyKey)` - If `key` is empty. The trie is left untouched.
    pub fn insert<K>(&mut self, key: K, value: V) -> LehuaTrieResult<&mut Self>
    where
        K: AsRef<str>,
    {
        let key = key.as_ref();
        if key.is_empty() {
            return Err(LehuaTrieError::EmptyKey);
        }

        let max_results = self.max_results;
        let mut node = &mut *self;
        for c in key.chars() {
            node = node
                .edges
                .entry(c)
                .or_insert_with(|| LehuaTrie::new(max_results));
            node.push_value(&value);
        }

        trace!(key, "Inserted key into trie");
        Ok(self)
    }

    /// Inserts every `(key, value)` pair in order, stopping at the first error.
    pub fn insert_all<I, K>(&mut self, pairs: I) -> LehuaTrieResult<&mut Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
    {
        for (key, value) in pairs {
            self.insert(key, value)?;
        }
        Ok(self)
    }

    fn push_value(&mut self, value: &V) {
        if self.values.len() < self.max_results && self.values.last() != Some(value) {
            self.values.push(value.clone());
        }
    }
}

impl<V> LehuaTrie<V>
where
    V: Serialize,
{
    /// Encodes the trie as compact JSON.
    pub fn to_json(&self) -> Result<String, CodecError> {
        JsonCodec::<Self>::new().encode(self)
    }
}

impl<V> LehuaTrie<V>
where
    V: DeserializeOwned,
{
    /// Decodes a trie from JSON and checks its structure.
    ///
    /// # Returns
    ///
    /// * `Ok(LehuaTrie)` - An independent tree answering every prefix the encoded one did.
    /// * `Err(LehuaTrieError::Deserialization)` - If the JSON does not match the trie schema.
    /// * `Err(LehuaTrieError::InvalidStructure)` - If a decoded node breaks a trie invariant.
    pub fn from_json(json: &str) -> LehuaTrieResult<Self> {
        let trie: Self = JsonCodec::<Self>::new().decode(json)?;
        trie.check_structure()?;
        debug!(
            max_results = trie.max_results,
            nodes = trie.node_count(),
            "Decoded trie from JSON"
        );
        Ok(trie)
    }
}

impl<V> Drop for LehuaTrie<V> {
    fn drop(&mut self) {
        // Detach children before they are freed so no drop recurses
        let mut stack: Vec<Self> = self.edges.drain().map(|(_, child)| child).collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.edges.drain().map(|(_, child)| child));
        }
    }
}

/// A node being copied, with the source children still to visit.
struct CloneFrame<'a, V> {
    edge: char,
    pending: EdgeIter<'a, char, LehuaTrie<V>>,
    node: LehuaTrie<V>,
}

impl<V> Clone for LehuaTrie<V>
where
    V: Clone,
{
    fn clone(&self) -> Self {
        let mut root = self.detached();
        let mut root_pending = self.edges.iter();
        let mut stack: Vec<CloneFrame<'_, V>> = Vec::new();

        loop {
            let next = match stack.last_mut() {
                Some(frame) => frame.pending.next(),
                None => root_pending.next(),
            };

            match next {
                Some((edge, child)) => stack.push(CloneFrame {
                    edge: *edge,
                    pending: child.edges.iter(),
                    node: child.detached(),
                }),
                None => match stack.pop() {
                    Some(done) => {
                        let parent = match stack.last_mut() {
                            Some(frame) => &mut frame.node,
                            None => &mut root,
                        };
                        parent.edges.insert(done.edge, done.node);
                    }
                    None => return root,
                },
            }
        }
    }
}

impl<V> PartialEq for LehuaTrie<V>
where
    V: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self, other)];
        while let Some((left, right)) = stack.pop() {
            if left.max_results != right.max_results
                || left.values != right.values
                || left.edges.len() != right.edges.len()
            {
                return false;
            }

            for (c, child) in &left.edges {
                match right.edges.get(c) {
                    Some(other_child) => stack.push((child, other_child)),
                    None => return false,
                }
            }
        }
        true
    }
}

impl<V> Eq for LehuaTrie<V> where V: Eq {}

impl<V> fmt::Debug for LehuaTrie<V>
where
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut edges: Vec<char> = self.edges.keys().copied().collect();
        edges.sort_unstable();

        f.debug_struct("LehuaTrie")
            .field("max_results", &self.max_results)
            .field("values", &self.values)
            .field("edges", &edges)
            .field("nodes", &self.node_count())
            .finish()
    }
}
