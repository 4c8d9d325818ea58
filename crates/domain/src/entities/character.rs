//! Character record entity - one tracked raid character
//!
//! Links between mains and twinks are name-keyed, not pointer-keyed: a
//! main carries a forward `Twinks` list and a twink carries a `Main`
//! back-reference, and either side may legitimately dangle. Resolution
//! happens by lookup in the roster store on every read.

use serde::{Deserialize, Serialize};

use crate::value_objects::{CharacterClass, CounterKey, QUOTIENT_COUNTERS};

/// Role chosen when a character is added. Fixed for the record's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Primary character; owns a twink list and receives a quotient
    Main,
    /// Alt character linked to exactly one main by name
    Twink,
}

/// One tracked character, either a main or a twink.
///
/// Field names mirror the stored data file exactly. Records are never
/// physically deleted; "remove" flips `active` off and the record stays
/// around for later reactivation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterRecord {
    #[serde(rename = "Class")]
    pub class: CharacterClass,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Raids", default)]
    pub raids: u32,
    /// Stored placeholder only; live values are recomputed per query
    #[serde(rename = "Quotient", default = "default_quotient")]
    pub quotient: f64,
    #[serde(rename = "Helmet", default)]
    pub helmet: u32,
    #[serde(rename = "Shoulder", default)]
    pub shoulder: u32,
    #[serde(rename = "Gloves", default)]
    pub gloves: u32,
    #[serde(rename = "Breast", default)]
    pub breast: u32,
    #[serde(rename = "Legs", default)]
    pub legs: u32,
    #[serde(rename = "Boots", default)]
    pub boots: u32,
    #[serde(rename = "Storvâgûn Qitems", default)]
    pub storvagun_qitems: u32,
    #[serde(rename = "Zaudru Qitem", default)]
    pub zaudru_qitem: u32,
    #[serde(rename = "Mírdanant", default)]
    pub mirdanant: u32,
    #[serde(rename = "Beryl shard", default)]
    pub beryl_shard: u32,
    #[serde(default = "default_true")]
    pub active: bool,
    #[serde(default)]
    pub is_main: bool,
    #[serde(default)]
    pub is_twink: bool,
    /// Forward link owned by mains: ordered twink names
    #[serde(rename = "Twinks", default, skip_serializing_if = "Option::is_none")]
    pub twinks: Option<Vec<String>>,
    /// Back-reference carried by twinks: the owning main's name
    #[serde(rename = "Main", default, skip_serializing_if = "Option::is_none")]
    pub main: Option<String>,
}

fn default_quotient() -> f64 {
    1.0
}

fn default_true() -> bool {
    true
}

impl CharacterRecord {
    /// Create a main with an empty twink list
    pub fn new_main(name: impl Into<String>, class: CharacterClass) -> Self {
        Self::new(name, class, Role::Main, None)
    }

    /// Create a twink linked to `main` by name. The main is not required
    /// to exist; the reference may dangle.
    pub fn new_twink(
        name: impl Into<String>,
        class: CharacterClass,
        main: impl Into<String>,
    ) -> Self {
        Self::new(name, class, Role::Twink, Some(main.into()))
    }

    fn new(name: impl Into<String>, class: CharacterClass, role: Role, main: Option<String>) -> Self {
        Self {
            class,
            name: name.into(),
            raids: 0,
            quotient: default_quotient(),
            helmet: 0,
            shoulder: 0,
            gloves: 0,
            breast: 0,
            legs: 0,
            boots: 0,
            storvagun_qitems: 0,
            zaudru_qitem: 0,
            mirdanant: 0,
            beryl_shard: 0,
            active: true,
            is_main: role == Role::Main,
            is_twink: role == Role::Twink,
            twinks: (role == Role::Main).then(Vec::new),
            main,
        }
    }

    /// Current value of one counter
    pub fn counter(&self, key: CounterKey) -> u32 {
        match key {
            CounterKey::Raids => self.raids,
            CounterKey::Helmet => self.helmet,
            CounterKey::Shoulder => self.shoulder,
            CounterKey::Gloves => self.gloves,
            CounterKey::Breast => self.breast,
            CounterKey::Legs => self.legs,
            CounterKey::Boots => self.boots,
            CounterKey::StorvagunQitems => self.storvagun_qitems,
            CounterKey::ZaudruQitem => self.zaudru_qitem,
            CounterKey::Mirdanant => self.mirdanant,
            CounterKey::BerylShard => self.beryl_shard,
        }
    }

    fn counter_mut(&mut self, key: CounterKey) -> &mut u32 {
        match key {
            CounterKey::Raids => &mut self.raids,
            CounterKey::Helmet => &mut self.helmet,
            CounterKey::Shoulder => &mut self.shoulder,
            CounterKey::Gloves => &mut self.gloves,
            CounterKey::Breast => &mut self.breast,
            CounterKey::Legs => &mut self.legs,
            CounterKey::Boots => &mut self.boots,
            CounterKey::StorvagunQitems => &mut self.storvagun_qitems,
            CounterKey::ZaudruQitem => &mut self.zaudru_qitem,
            CounterKey::Mirdanant => &mut self.mirdanant,
            CounterKey::BerylShard => &mut self.beryl_shard,
        }
    }

    /// Apply `delta` to a counter, clamped at zero. Returns the new value.
    pub fn adjust_counter(&mut self, key: CounterKey, delta: i32) -> u32 {
        let slot = self.counter_mut(key);
        let next = (i64::from(*slot) + i64::from(delta)).max(0);
        *slot = next as u32;
        *slot
    }

    /// Sum of the counters that feed the quotient
    pub fn equip_total(&self) -> u32 {
        QUOTIENT_COUNTERS.iter().map(|&key| self.counter(key)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_records_start_active_with_zeroed_counters() {
        let main = CharacterRecord::new_main("Beregond", CharacterClass::Captain);
        assert!(main.active);
        assert!(main.is_main);
        assert!(!main.is_twink);
        assert_eq!(main.twinks.as_deref(), Some(&[][..]));
        assert_eq!(main.main, None);
        for &key in CounterKey::all() {
            assert_eq!(main.counter(key), 0);
        }
    }

    #[test]
    fn new_twink_carries_the_main_back_reference() {
        let twink = CharacterRecord::new_twink("Halbarad", CharacterClass::Hunter, "Beregond");
        assert!(twink.active);
        assert!(twink.is_twink);
        assert!(!twink.is_main);
        assert_eq!(twink.main.as_deref(), Some("Beregond"));
        assert_eq!(twink.twinks, None);
    }

    #[test]
    fn adjust_counter_clamps_at_zero() {
        let mut record = CharacterRecord::new_main("Beregond", CharacterClass::Captain);
        assert_eq!(record.adjust_counter(CounterKey::Helmet, -1), 0);
        assert_eq!(record.adjust_counter(CounterKey::Helmet, 1), 1);
        assert_eq!(record.adjust_counter(CounterKey::Helmet, -1), 0);
    }

    #[test]
    fn equip_total_excludes_raids_and_currency_counters() {
        let mut record = CharacterRecord::new_main("Beregond", CharacterClass::Captain);
        record.adjust_counter(CounterKey::Raids, 10);
        record.adjust_counter(CounterKey::Helmet, 2);
        record.adjust_counter(CounterKey::Boots, 1);
        record.adjust_counter(CounterKey::ZaudruQitem, 1);
        record.adjust_counter(CounterKey::StorvagunQitems, 5);
        record.adjust_counter(CounterKey::Mirdanant, 3);
        record.adjust_counter(CounterKey::BerylShard, 1);
        assert_eq!(record.equip_total(), 4);
    }

    #[test]
    fn serializes_with_stored_field_names() {
        let record = CharacterRecord::new_twink("Halbarad", CharacterClass::Hunter, "Beregond");
        let json = serde_json::to_value(&record).expect("serialize");
        assert_eq!(json["Class"], "Hunter");
        assert_eq!(json["Name"], "Halbarad");
        assert_eq!(json["Beryl shard"], 0);
        assert_eq!(json["Storvâgûn Qitems"], 0);
        assert_eq!(json["Main"], "Beregond");
        // Twink records carry no forward link
        assert!(json.get("Twinks").is_none());
    }

    #[test]
    fn deserializes_sparse_records_with_defaults() {
        // Older files may omit counters and flags entirely
        let record: CharacterRecord =
            serde_json::from_str(r#"{"Class": "Minstrel", "Name": "Lindir"}"#).expect("parse");
        assert!(record.active);
        assert!(!record.is_main);
        assert!(!record.is_twink);
        assert_eq!(record.raids, 0);
        assert_eq!(record.quotient, 1.0);
        assert_eq!(record.twinks, None);
        assert_eq!(record.main, None);
    }
}
