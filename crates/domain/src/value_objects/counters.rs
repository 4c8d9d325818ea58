//! Per-record counter keys and the quotient counter subset

/// The fixed set of counters tracked on every character record.
///
/// `display_name()` returns the column label used in the stored data file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CounterKey {
    Raids,
    Helmet,
    Shoulder,
    Gloves,
    Breast,
    Legs,
    Boots,
    StorvagunQitems,
    ZaudruQitem,
    Mirdanant,
    BerylShard,
}

/// The counters that feed the quotient: armor slots plus the Zaudru
/// quest item. Raids, Storvâgûn quest items, Mírdanant and Beryl shards
/// are deliberately excluded.
pub const QUOTIENT_COUNTERS: &[CounterKey] = &[
    CounterKey::Helmet,
    CounterKey::Shoulder,
    CounterKey::Gloves,
    CounterKey::Breast,
    CounterKey::Legs,
    CounterKey::Boots,
    CounterKey::ZaudruQitem,
];

impl CounterKey {
    /// Get all counter keys in display order
    pub fn all() -> &'static [CounterKey] {
        &[
            CounterKey::Raids,
            CounterKey::Helmet,
            CounterKey::Shoulder,
            CounterKey::Gloves,
            CounterKey::Breast,
            CounterKey::Legs,
            CounterKey::Boots,
            CounterKey::StorvagunQitems,
            CounterKey::ZaudruQitem,
            CounterKey::Mirdanant,
            CounterKey::BerylShard,
        ]
    }

    /// Column label as it appears in the stored data file
    pub fn display_name(&self) -> &'static str {
        match self {
            CounterKey::Raids => "Raids",
            CounterKey::Helmet => "Helmet",
            CounterKey::Shoulder => "Shoulder",
            CounterKey::Gloves => "Gloves",
            CounterKey::Breast => "Breast",
            CounterKey::Legs => "Legs",
            CounterKey::Boots => "Boots",
            CounterKey::StorvagunQitems => "Storvâgûn Qitems",
            CounterKey::ZaudruQitem => "Zaudru Qitem",
            CounterKey::Mirdanant => "Mírdanant",
            CounterKey::BerylShard => "Beryl shard",
        }
    }
}
