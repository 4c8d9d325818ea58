//! Roster store - owns the character records and all mutating operations
//!
//! Records are kept as one ordered list and addressed by name. Name
//! uniqueness holds only among active records, so every lookup is an
//! explicit scan rather than an owning pointer: links can dangle, and a
//! dangling link is data to surface (the orphan listing), not an error.

use std::collections::HashSet;
use std::path::Path;

use raidledger_domain::{
    quotient, CharacterClass, CharacterRecord, CounterKey, DomainError, Role,
};

use crate::persistence::{load_records, save_records, StoreError};

/// One active main with its resolved twinks and live quotient, as handed
/// to the presentation layer. Unresolvable twink names are already
/// skipped; the stored `Quotient` field is ignored in favor of `quotient`.
#[derive(Debug)]
pub struct MainView<'a> {
    pub record: &'a CharacterRecord,
    pub twinks: Vec<&'a CharacterRecord>,
    pub quotient: f64,
}

impl MainView<'_> {
    /// Quotient rendered for display, two decimals
    pub fn quotient_display(&self) -> String {
        raidledger_domain::format_quotient(self.quotient)
    }
}

/// In-memory collection of character records with flat-file persistence
#[derive(Debug, Default)]
pub struct RosterStore {
    entries: Vec<CharacterRecord>,
}

impl RosterStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(entries: Vec<CharacterRecord>) -> Self {
        Self { entries }
    }

    /// Load the full record set from `path`. A missing or empty file is
    /// an empty roster; malformed content is surfaced as an error.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        Ok(Self {
            entries: load_records(path)?,
        })
    }

    /// Rewrite `path` with the full record set
    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        save_records(path, &self.entries)
    }

    /// All records in insertion order, active and inactive alike
    pub fn records(&self) -> &[CharacterRecord] {
        &self.entries
    }

    /// The active record of this name, if any. At most one exists.
    pub fn find_active(&self, name: &str) -> Option<&CharacterRecord> {
        self.entries.iter().find(|r| r.active && r.name == name)
    }

    /// Add a character to the roster.
    ///
    /// A twink must name a main selection, but the named main is not
    /// required to exist; when it does not, the record is created with a
    /// dangling back-reference. When it does (active or not), its twink
    /// list gains the new name.
    ///
    /// # Errors
    ///
    /// `DuplicateActiveName` when an active record already holds the
    /// name, `MainNotSelected` for a twink without a main selection,
    /// `Validation` for a blank name.
    pub fn add_character(
        &mut self,
        name: &str,
        class: CharacterClass,
        role: Role,
        main: Option<&str>,
    ) -> Result<&CharacterRecord, DomainError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::validation("character name cannot be empty"));
        }
        if self.find_active(name).is_some() {
            return Err(DomainError::DuplicateActiveName(name.to_string()));
        }

        let record = match role {
            Role::Main => CharacterRecord::new_main(name, class),
            Role::Twink => {
                let main_name = main
                    .map(str::trim)
                    .filter(|m| !m.is_empty())
                    .ok_or(DomainError::MainNotSelected)?;
                if let Some(main_record) =
                    self.entries.iter_mut().find(|r| r.is_main && r.name == main_name)
                {
                    main_record
                        .twinks
                        .get_or_insert_with(Vec::new)
                        .push(name.to_string());
                }
                CharacterRecord::new_twink(name, class, main_name)
            }
        };

        tracing::debug!(name, class = %record.class, "character added");
        self.entries.push(record);
        let idx = self.entries.len() - 1;
        Ok(&self.entries[idx])
    }

    /// Soft-remove the active record of this name.
    ///
    /// A main cascades deactivation to every record named in its twink
    /// list, whatever those records' own link state. A twink is removed
    /// from its main's twink list. Returns false (no-op) when no active
    /// record holds the name, which makes repeat deactivation idempotent.
    pub fn deactivate(&mut self, name: &str) -> bool {
        let Some(idx) = self.entries.iter().position(|r| r.active && r.name == name) else {
            return false;
        };
        self.entries[idx].active = false;

        if self.entries[idx].is_main {
            let cascade = self.entries[idx].twinks.clone().unwrap_or_default();
            for twink_name in &cascade {
                for record in self.entries.iter_mut().filter(|r| &r.name == twink_name) {
                    record.active = false;
                }
            }
            tracing::debug!(name, twinks = cascade.len(), "main deactivated with cascade");
        } else if self.entries[idx].is_twink {
            if let Some(main_name) = self.entries[idx].main.clone() {
                for record in self.entries.iter_mut().filter(|r| r.name == main_name) {
                    if let Some(twinks) = record.twinks.as_mut() {
                        twinks.retain(|t| t != name);
                    }
                }
            }
            tracing::debug!(name, "twink deactivated and unlinked");
        }
        true
    }

    /// Bring the first inactive record of this name back.
    ///
    /// A twink is re-added to its main's twink list when that main is
    /// found and itself active (link repair). With an inactive or
    /// missing main the twink comes back as an orphan instead.
    pub fn reactivate(&mut self, name: &str) -> bool {
        let Some(idx) = self.entries.iter().position(|r| !r.active && r.name == name) else {
            return false;
        };
        self.entries[idx].active = true;

        if self.entries[idx].is_twink {
            if let Some(main_name) = self.entries[idx].main.clone() {
                let main_idx = self
                    .entries
                    .iter()
                    .position(|r| r.is_main && r.active && r.name == main_name);
                if let Some(main_idx) = main_idx {
                    let twinks = self.entries[main_idx].twinks.get_or_insert_with(Vec::new);
                    if !twinks.iter().any(|t| t == name) {
                        twinks.push(name.to_string());
                    }
                }
            }
        }
        tracing::debug!(name, "character reactivated");
        true
    }

    /// Apply `delta` to a counter on the active record of this name,
    /// clamped at zero. Returns the new value, or `None` when no active
    /// record matches.
    pub fn adjust_counter(&mut self, name: &str, key: CounterKey, delta: i32) -> Option<u32> {
        let record = self.entries.iter_mut().find(|r| r.active && r.name == name)?;
        let value = record.adjust_counter(key, delta);
        tracing::debug!(name, counter = key.display_name(), value, "counter adjusted");
        Some(value)
    }

    pub fn active_mains(&self) -> Vec<&CharacterRecord> {
        self.entries.iter().filter(|r| r.is_main && r.active).collect()
    }

    pub fn active_twinks(&self) -> Vec<&CharacterRecord> {
        self.entries.iter().filter(|r| r.is_twink && r.active).collect()
    }

    /// Inactive records, for the reactivation picker
    pub fn inactive(&self) -> Vec<&CharacterRecord> {
        self.entries.iter().filter(|r| !r.active).collect()
    }

    /// Active twinks listed in no active main's twink list.
    ///
    /// These signal a data-consistency problem the user must resolve
    /// (reassign or deactivate); they receive no quotient and are
    /// excluded from every main's aggregate.
    pub fn orphaned_twinks(&self) -> Vec<&CharacterRecord> {
        let linked: HashSet<&str> = self
            .entries
            .iter()
            .filter(|r| r.is_main && r.active)
            .flat_map(|r| r.twinks.iter().flatten().map(String::as_str))
            .collect();
        self.entries
            .iter()
            .filter(|r| r.is_twink && r.active && !linked.contains(r.name.as_str()))
            .collect()
    }

    /// Resolve a main's twink names to active records, silently skipping
    /// names that do not resolve or resolve to inactive records. The
    /// list itself is left untouched.
    pub fn twinks_of(&self, main: &CharacterRecord) -> Vec<&CharacterRecord> {
        main.twinks
            .iter()
            .flatten()
            .filter_map(|name| self.find_active(name))
            .collect()
    }

    /// Live quotient for a main, aggregated over its resolved twinks
    pub fn quotient_of(&self, main: &CharacterRecord) -> f64 {
        quotient(main, &self.twinks_of(main))
    }

    /// Every active main with resolved twinks and live quotient, in
    /// insertion order - the render input for the presentation layer
    pub fn main_views(&self) -> Vec<MainView<'_>> {
        self.active_mains()
            .into_iter()
            .map(|record| {
                let twinks = self.twinks_of(record);
                let quotient = quotient(record, &twinks);
                MainView {
                    record,
                    twinks,
                    quotient,
                }
            })
            .collect()
    }
}
