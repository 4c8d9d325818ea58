//! Shard tracker - group/player shard-count aggregation
//!
//! The simple sibling of the roster store: groups are created in bulk,
//! removed outright, and their aggregate is a literal sum over bounded
//! member flags. No soft delete and no link maintenance.

use std::path::Path;

use raidledger_domain::{DomainError, Group};

use crate::persistence::{load_records, save_records, StoreError};

/// In-memory collection of shard groups with flat-file persistence
#[derive(Debug, Default)]
pub struct ShardTracker {
    groups: Vec<Group>,
}

impl ShardTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_groups(groups: Vec<Group>) -> Self {
        Self { groups }
    }

    /// Load all groups from `path`. A missing or empty file is an empty
    /// tracker; malformed content is surfaced as an error.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        Ok(Self {
            groups: load_records(path)?,
        })
    }

    /// Rewrite `path` with all groups
    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        save_records(path, &self.groups)
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn group(&self, name: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.name == name)
    }

    /// Create a group from player names supplied in bulk. Groups are
    /// numbered "Group 1", "Group 2", ... in creation order.
    ///
    /// # Errors
    ///
    /// See [`Group::new`] for size and name validation.
    pub fn add_group(&mut self, player_names: Vec<String>) -> Result<&Group, DomainError> {
        let name = format!("Group {}", self.groups.len() + 1);
        let group = Group::new(name, player_names)?;
        tracing::debug!(group = %group.name, players = group.players.len(), "group added");
        self.groups.push(group);
        let idx = self.groups.len() - 1;
        Ok(&self.groups[idx])
    }

    /// Delete a group outright. Returns whether anything was removed.
    pub fn remove_group(&mut self, name: &str) -> bool {
        let before = self.groups.len();
        self.groups.retain(|g| g.name != name);
        self.groups.len() < before
    }

    /// Delete a player from a group outright
    pub fn remove_player(&mut self, group: &str, player: &str) -> bool {
        self.groups
            .iter_mut()
            .find(|g| g.name == group)
            .is_some_and(|g| g.remove_player(player))
    }

    /// Apply `delta` to a player's shard flag, bounded to `[0, 1]`.
    /// Returns the resulting value, or `None` when group or player is
    /// unknown.
    pub fn adjust_shards(&mut self, group: &str, player: &str, delta: i32) -> Option<u32> {
        let player = self
            .groups
            .iter_mut()
            .find(|g| g.name == group)?
            .player_mut(player)?;
        Some(player.adjust_shards(delta))
    }
}
