//! Entity registry pairing each ball's physics body with its visual mesh.
//!
//! The registry is the only place that knows which two ECS entities make up a
//! ball. Systems look pairs up by [`BallId`] instead of relying on spawn order.

use std::collections::BTreeMap;

use bevy::prelude::*;

use super::components::BallId;

/// Both halves of one ball.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CradleEntry {
    pub id: BallId,
    pub body: Entity,
    pub visual: Entity,
}

#[derive(Resource, Debug, Default, Clone)]
pub struct CradleRegistry {
    entries: BTreeMap<BallId, CradleEntry>,
}

impl CradleRegistry {
    /// Registers a pair. Returns the previous entry when the id was already taken.
    pub fn insert(&mut self, entry: CradleEntry) -> Option<CradleEntry> {
        self.entries.insert(entry.id, entry)
    }

    pub fn get(&self, id: BallId) -> Option<&CradleEntry> {
        self.entries.get(&id)
    }

    /// Entries in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &CradleEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
