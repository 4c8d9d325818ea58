pub mod class;
pub mod counters;

pub use class::CharacterClass;
pub use counters::{CounterKey, QUOTIENT_COUNTERS};
