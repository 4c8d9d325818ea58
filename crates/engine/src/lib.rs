//! Raidledger engine - owns the mutable stores and everything that talks
//! to the outside world (data files, icon downloads).
//!
//! The presentation layer is a pure consumer: it queries fresh state
//! through [`RosterStore`] / [`ShardTracker`] views after every mutation
//! and never holds business state of its own.

pub mod icons;
pub mod persistence;
pub mod roster;
pub mod shards;

pub use icons::fetch_class_icons;
pub use persistence::StoreError;
pub use roster::{MainView, RosterStore};
pub use shards::ShardTracker;
