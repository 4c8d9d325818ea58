pub mod entities;
pub mod error;
pub mod quotient;
pub mod value_objects;

pub use entities::{CharacterRecord, Group, Player, Role, MAX_GROUP_SIZE, MIN_GROUP_SIZE};
pub use error::DomainError;
pub use quotient::{format_quotient, quotient};
pub use value_objects::{CharacterClass, CounterKey, QUOTIENT_COUNTERS};
