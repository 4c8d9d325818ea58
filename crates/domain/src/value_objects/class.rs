//! Character class enumeration

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// The playable classes a tracked character can have.
///
/// Serialized by display name; the stored data file carries e.g.
/// `"Class": "Loremaster"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharacterClass {
    Burglar,
    Captain,
    Champion,
    Guardian,
    Hunter,
    Loremaster,
    Minstrel,
}

impl CharacterClass {
    /// Get all classes for UI dropdowns
    pub fn all() -> &'static [CharacterClass] {
        &[
            CharacterClass::Burglar,
            CharacterClass::Captain,
            CharacterClass::Champion,
            CharacterClass::Guardian,
            CharacterClass::Hunter,
            CharacterClass::Loremaster,
            CharacterClass::Minstrel,
        ]
    }

    /// Get a display name for the class
    pub fn display_name(&self) -> &'static str {
        match self {
            CharacterClass::Burglar => "Burglar",
            CharacterClass::Captain => "Captain",
            CharacterClass::Champion => "Champion",
            CharacterClass::Guardian => "Guardian",
            CharacterClass::Hunter => "Hunter",
            CharacterClass::Loremaster => "Loremaster",
            CharacterClass::Minstrel => "Minstrel",
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for CharacterClass {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "burglar" => CharacterClass::Burglar,
            "captain" => CharacterClass::Captain,
            "champion" => CharacterClass::Champion,
            "guardian" => CharacterClass::Guardian,
            "hunter" => CharacterClass::Hunter,
            "loremaster" => CharacterClass::Loremaster,
            "minstrel" => CharacterClass::Minstrel,
            _ => return Err(DomainError::validation(format!("unknown class: {}", s))),
        })
    }
}
