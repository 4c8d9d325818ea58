//! Quotient computation - the gear-need priority score
//!
//! The quotient aggregates a main with its currently resolvable active
//! twinks: total equipment drops per raid attended. It is recomputed on
//! every read; the `Quotient` field stored on a record is only a
//! placeholder.

use crate::entities::CharacterRecord;

/// Compute the quotient for a main and its resolved active twinks.
///
/// `twinks` must already be resolved by the caller (unresolvable or
/// inactive names are skipped silently at resolution, not here).
/// A combined raid count of zero yields 1.0 regardless of equipment.
pub fn quotient(main: &CharacterRecord, twinks: &[&CharacterRecord]) -> f64 {
    let mut raids = main.raids;
    let mut equip = main.equip_total();
    for twink in twinks {
        raids += twink.raids;
        equip += twink.equip_total();
    }
    if raids > 0 {
        f64::from(equip) / f64::from(raids)
    } else {
        1.0
    }
}

/// Render a quotient for display, two decimals
pub fn format_quotient(quotient: f64) -> String {
    format!("{quotient:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::{CharacterClass, CounterKey};

    fn main_with(raids: u32, helmets: u32) -> CharacterRecord {
        let mut main = CharacterRecord::new_main("Beregond", CharacterClass::Captain);
        main.adjust_counter(CounterKey::Raids, raids as i32);
        main.adjust_counter(CounterKey::Helmet, helmets as i32);
        main
    }

    #[test]
    fn zero_raids_yields_one_regardless_of_equipment() {
        let main = main_with(0, 12);
        assert_eq!(quotient(&main, &[]), 1.0);
    }

    #[test]
    fn aggregates_main_and_twinks() {
        let main = main_with(10, 5);
        let mut twink = CharacterRecord::new_twink("Halbarad", CharacterClass::Hunter, "Beregond");
        twink.adjust_counter(CounterKey::Raids, 5);
        twink.adjust_counter(CounterKey::Gloves, 5);

        let combined = quotient(&main, &[&twink]);
        assert_eq!(format_quotient(combined), "0.67");

        // Without the twink the same counters give a different score
        assert_eq!(format_quotient(quotient(&main, &[])), "0.50");
    }

    #[test]
    fn excluded_counters_do_not_move_the_quotient() {
        let mut main = main_with(10, 5);
        main.adjust_counter(CounterKey::Mirdanant, 100);
        main.adjust_counter(CounterKey::BerylShard, 1);
        assert_eq!(quotient(&main, &[]), 0.5);
    }
}
