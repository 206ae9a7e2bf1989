// Copyright (c) 2025 Lehua Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Scored entities.
//!
//! A [`ScoredEntity`] is a named record with an integer score. Entities are
//! ordered by score only, and an absent entity sorts before any present one.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::info;

/// Number of distinct names [`generate_entities`] can produce.
pub const MAX_GENERATED_ENTITIES: usize = 26;

/// A named record with a numeric score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ScoredEntity {
    /// Display name, split into trie keys by the index
    pub name: String,

    /// Ranking score
    pub score: i32,
}

impl ScoredEntity {
    /// Creates a new entity.
    pub fn new<S: Into<String>>(name: S, score: i32) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}

/// Compares two possibly absent entities by score.
///
/// Two absent entities are equal, an absent entity is less than a present
/// one, and two present entities compare by `score`.
pub fn compare_by_score(x: Option<&ScoredEntity>, y: Option<&ScoredEntity>) -> Ordering {
    x.map(|e| e.score).cmp(&y.map(|e| e.score))
}

/// Sorts entities by ascending score, keeping the input order of ties.
pub fn sort_by_score(entities: &mut [ScoredEntity]) {
    entities.sort_by(|x, y| compare_by_score(Some(x), Some(y)));
}

/// Generates `length` sample entities.
///
/// Entity `i` is named `[A+i, z-i, '_', Z-i, a+i]` and scored `length - i`,
/// so the list comes out in descending score order. Letters wrap after
/// [`MAX_GENERATED_ENTITIES`] entities.
pub fn generate_entities(length: usize) -> Vec<ScoredEntity> {
    (0..length)
        .map(|i| {
            let offset = (i % MAX_GENERATED_ENTITIES) as u8;
            let name: String = [
                (b'A' + offset) as char,
                (b'z' - offset) as char,
                '_',
                (b'Z' - offset) as char,
                (b'a' + offset) as char,
            ]
            .iter()
            .collect();
            let score = i32::try_from(length - i).unwrap_or(i32::MAX);
            ScoredEntity::new(name, score)
        })
        .collect()
}

/// Logs each entity on its own line.
pub fn print_entities(entities: &[ScoredEntity]) {
    for entity in entities {
        info!("name={}, score={}", entity.name, entity.score);
    }
}
