// Copyright (c) 2025 Lehua Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Entity index.
//!
//! [`EntityIndex`] owns a score-sorted list of entities and a
//! [`LehuaTrie`] mapping name tokens to positions in that list. A name such
//! as `Hs_Sh` is lower-cased and split on the configured delimiter, and each
//! token is inserted with the entity's position, so a prefix of any token
//! finds the entity.

mod error;

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::codec::JsonCodec;
use crate::config::IndexConfig;
use crate::data_structures::lehua_trie::LehuaTrie;
use crate::entity::{sort_by_score, ScoredEntity};
use crate::error::LehuaResult;
pub use error::IndexError;

/// Score-sorted entities plus a prefix trie over their name tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityIndex {
    entities: Vec<ScoredEntity>,
    trie: LehuaTrie<usize>,
    lowercase: bool,
}

/// Serialized form of an [`EntityIndex`].
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct IndexSnapshot<'a> {
    entities: Cow<'a, [ScoredEntity]>,
    trie: Cow<'a, LehuaTrie<usize>>,
    lowercase: bool,
}

impl EntityIndex {
    /// Builds an index over `entities`.
    ///
    /// # Arguments
    ///
    /// * `entities` - The entities to index, in any order.
    /// * `config` - Tokenization and trie settings.
    ///
    /// # Returns
    ///
    /// * `Ok(EntityIndex)` - The populated index.
    /// * `Err(LehuaError::Index)` - If a token is longer than `config.max_key_len`.
    pub fn build(mut entities: Vec<ScoredEntity>, config: &IndexConfig) -> LehuaResult<Self> {
        sort_by_score(&mut entities);

        let mut trie = LehuaTrie::new(config.max_results);
        for (position, entity) in entities.iter().enumerate() {
            let name = normalize(&entity.name, config.lowercase);
            for token in name.split(config.delimiter.as_str()) {
                if token.is_empty() {
                    warn!(name = %entity.name, "Skipping empty token");
                    continue;
                }

                if config.max_key_len > 0 && token.chars().count() > config.max_key_len {
                    return Err(IndexError::KeyTooLong {
                        key: token.to_string(),
                        max_len: config.max_key_len,
                    }
                    .into());
                }

                trie.insert(token, position)?;
            }
        }

        info!(
            entities = entities.len(),
            nodes = trie.node_count(),
            max_results = config.max_results,
            "Built entity index"
        );

        Ok(Self {
            entities,
            trie,
            lowercase: config.lowercase,
        })
    }

    /// Returns the entities whose name has a token starting with `prefix`,
    /// at most `max_results` of them, lowest score first.
    pub fn query(&self, prefix: &str) -> Vec<&ScoredEntity> {
        let prefix = normalize(prefix, self.lowercase);
        let hits: Vec<&ScoredEntity> = self
            .trie
            .retrieve(prefix.as_ref())
            .iter()
            .filter_map(|&position| self.entities.get(position))
            .collect();

        debug!(prefix = %prefix, hits = hits.len(), "Queried entity index");
        hits
    }

    /// Returns the indexed entities in score order.
    pub fn entities(&self) -> &[ScoredEntity] {
        &self.entities
    }

    /// Returns the underlying trie of entity positions.
    pub fn trie(&self) -> &LehuaTrie<usize> {
        &self.trie
    }

    /// Encodes the index as indented JSON.
    pub fn to_json(&self) -> LehuaResult<String> {
        let snapshot = IndexSnapshot {
            entities: Cow::Borrowed(&self.entities),
            trie: Cow::Borrowed(&self.trie),
            lowercase: self.lowercase,
        };
        Ok(JsonCodec::<IndexSnapshot<'_>>::new().encode_pretty(&snapshot)?)
    }

    /// Decodes an index from JSON.
    ///
    /// # Returns
    ///
    /// * `Ok(EntityIndex)` - The restored index.
    /// * `Err(LehuaError::Codec)` - If the JSON does not match the snapshot schema.
    /// * `Err(LehuaError::Trie)` - If the trie breaks its structural invariants.
    /// * `Err(LehuaError::Index)` - If the trie refers to a missing entity position.
    pub fn from_json(json: &str) -> LehuaResult<Self> {
        let snapshot = JsonCodec::<IndexSnapshot<'static>>::new().decode(json)?;

        let entities = snapshot.entities.into_owned();
        let trie = snapshot.trie.into_owned();
        trie.check_structure()?;

        if let Some(position) = max_position(&trie).filter(|&p| p >= entities.len()) {
            return Err(IndexError::DanglingPosition {
                position,
                entities: entities.len(),
            }
            .into());
        }

        Ok(Self {
            entities,
            trie,
            lowercase: snapshot.lowercase,
        })
    }
}

fn normalize(text: &str, lowercase: bool) -> Cow<'_, str> {
    if lowercase {
        Cow::Owned(text.to_lowercase())
    } else {
        Cow::Borrowed(text)
    }
}

fn max_position(trie: &LehuaTrie<usize>) -> Option<usize> {
    let mut max = None;
    let mut stack = vec![trie];
    while let Some(node) = stack.pop() {
        max = max.max(node.values().iter().copied().max());
        stack.extend(node.children());
    }
    max
}
