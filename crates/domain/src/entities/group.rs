//! Shard group entities - the secondary group/player aggregation
//!
//! Unlike the roster, groups and players are removed outright; there is
//! no soft delete here.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Smallest allowed group at creation
pub const MIN_GROUP_SIZE: usize = 2;
/// Largest allowed group at creation
pub const MAX_GROUP_SIZE: usize = 6;

/// One group member with a binary "shard obtained" flag, modeled as a
/// counter bounded to `[0, 1]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    #[serde(default)]
    pub shards: u32,
}

impl Player {
    pub const MAX_SHARDS: u32 = 1;

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            shards: 0,
        }
    }

    /// Apply `delta` to the shard flag. Steps outside `[0, 1]` are
    /// no-ops. Returns the resulting value.
    pub fn adjust_shards(&mut self, delta: i32) -> u32 {
        let next = i64::from(self.shards) + i64::from(delta);
        if (0..=i64::from(Self::MAX_SHARDS)).contains(&next) {
            self.shards = next as u32;
        }
        self.shards
    }

    pub fn has_shard(&self) -> bool {
        self.shards > 0
    }
}

/// A fixed party of players hunting shards together
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    #[serde(rename = "group")]
    pub name: String,
    pub players: Vec<Player>,
}

impl Group {
    /// Create a group from player names supplied in bulk.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::GroupSize` when the count is outside 2..=6
    /// and `DomainError::Validation` when a player name is blank.
    pub fn new(
        name: impl Into<String>,
        player_names: Vec<String>,
    ) -> Result<Self, DomainError> {
        if !(MIN_GROUP_SIZE..=MAX_GROUP_SIZE).contains(&player_names.len()) {
            return Err(DomainError::GroupSize {
                got: player_names.len(),
            });
        }
        if player_names.iter().any(|n| n.trim().is_empty()) {
            return Err(DomainError::validation("player name cannot be empty"));
        }
        Ok(Self {
            name: name.into(),
            players: player_names.into_iter().map(Player::new).collect(),
        })
    }

    /// Sum of the members' shard flags
    pub fn shard_sum(&self) -> u32 {
        self.players.iter().map(|p| p.shards).sum()
    }

    /// True once every member has their shard
    pub fn is_complete(&self) -> bool {
        self.shard_sum() as usize == self.players.len()
    }

    pub fn player_mut(&mut self, name: &str) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.name == name)
    }

    /// Remove a member outright. Returns whether anything was removed.
    pub fn remove_player(&mut self, name: &str) -> bool {
        let before = self.players.len();
        self.players.retain(|p| p.name != name);
        self.players.len() < before
    }
}
