pub mod character;
pub mod group;

pub use character::{CharacterRecord, Role};
pub use group::{Group, Player, MAX_GROUP_SIZE, MIN_GROUP_SIZE};
