//! Mileage-ordering validation
//!
//! A vehicle's odometer only moves forward: an entry dated after another
//! must not carry a lower mileage, and one dated before must not carry a
//! higher one. The check runs against every sibling entry, not just the
//! temporally adjacent ones.

use chrono::{DateTime, Utc};

use crate::domain::EnergyEntry;

/// Validate a candidate (date, mileage) pair against the vehicle's other
/// entries. `exclude_id` skips the entry being updated. Entries belonging
/// to other vehicles are ignored. Returns `false` on the first violation.
pub fn is_mileage_consistent(
    entries: &[EnergyEntry],
    vehicle_id: &str,
    exclude_id: Option<&str>,
    candidate_date: DateTime<Utc>,
    candidate_mileage: i64,
) -> bool {
    for other in entries {
        if other.vehicle_id != vehicle_id {
            continue;
        }
        if exclude_id == Some(other.id.as_str()) {
            continue;
        }

        if candidate_date > other.entry_date && candidate_mileage < other.mileage {
            return false;
        }
        if candidate_date < other.entry_date && candidate_mileage > other.mileage {
            return false;
        }
        // Equal dates (or equal mileage) impose no ordering constraint.
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EnergyType, EnergyUnit};
    use chrono::TimeZone;

    fn entry(id: &str, vehicle_id: &str, day: u32, mileage: i64) -> EnergyEntry {
        let date = Utc.with_ymd_and_hms(2024, 5, day, 12, 0, 0).unwrap();
        EnergyEntry {
            id: id.into(),
            vehicle_id: vehicle_id.into(),
            entry_date: date,
            mileage,
            energy_type: EnergyType::Gasoline,
            energy_unit: EnergyUnit::Liter,
            volume: 40.0,
            cost: None,
            price_per_unit: None,
            created_at: date,
            updated_at: date,
        }
    }

    fn day(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, d, 12, 0, 0).unwrap()
    }

    #[test]
    fn later_date_requires_equal_or_higher_mileage() {
        let entries = vec![entry("a", "v1", 10, 1000)];
        assert!(!is_mileage_consistent(&entries, "v1", None, day(11), 900));
        assert!(is_mileage_consistent(&entries, "v1", None, day(11), 1000));
        assert!(is_mileage_consistent(&entries, "v1", None, day(11), 1100));
    }

    #[test]
    fn earlier_date_requires_equal_or_lower_mileage() {
        let entries = vec![entry("a", "v1", 10, 1000)];
        assert!(!is_mileage_consistent(&entries, "v1", None, day(9), 1100));
        assert!(is_mileage_consistent(&entries, "v1", None, day(9), 1000));
        assert!(is_mileage_consistent(&entries, "v1", None, day(9), 900));
    }

    #[test]
    fn violation_is_caught_beyond_adjacent_entries() {
        // candidate sits between b and c by date but undercuts a
        let entries = vec![
            entry("a", "v1", 1, 500),
            entry("b", "v1", 5, 800),
            entry("c", "v1", 20, 2000),
        ];
        assert!(!is_mileage_consistent(&entries, "v1", None, day(10), 400));
        assert!(is_mileage_consistent(&entries, "v1", None, day(10), 900));
    }

    #[test]
    fn other_vehicles_never_affect_validity() {
        let entries = vec![entry("a", "v2", 10, 99_999)];
        assert!(is_mileage_consistent(&entries, "v1", None, day(11), 10));
    }

    #[test]
    fn updated_entry_is_excluded_from_its_own_check() {
        let entries = vec![entry("a", "v1", 10, 1000), entry("b", "v1", 12, 1200)];
        // moving entry "b" back in both date and mileage is fine once it
        // no longer competes with its stored row
        assert!(is_mileage_consistent(
            &entries,
            "v1",
            Some("b"),
            day(11),
            1100
        ));
        assert!(!is_mileage_consistent(
            &entries,
            "v1",
            Some("b"),
            day(11),
            900
        ));
    }

    #[test]
    fn equal_dates_carry_no_constraint() {
        let entries = vec![entry("a", "v1", 10, 1000)];
        assert!(is_mileage_consistent(&entries, "v1", None, day(10), 500));
        assert!(is_mileage_consistent(&entries, "v1", None, day(10), 1500));
    }
}
