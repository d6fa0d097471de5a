//! Energy statistics aggregation
//!
//! Pure math over a vehicle's energy entries, grouped by unit. Entries are
//! small in-memory collections here; the service layer loads them once per
//! request.

use std::collections::{BTreeMap, BTreeSet};

use crate::domain::{EnergyEntry, EnergyType, EnergyUnit};

/// Aggregates for a single measurement unit.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitStatistics {
    pub unit: EnergyUnit,
    pub entry_count: usize,
    /// Distinct energy types present, in enum order.
    pub energy_types: Vec<EnergyType>,
    /// Normalized consumption: volume per 100 distance units.
    pub average_consumption: f64,
    pub total_volume: f64,
    /// Sum of recorded costs; entries without a cost are excluded.
    pub total_cost: f64,
    /// Mean of recorded prices; entries without a price are excluded.
    pub average_price_per_unit: f64,
    /// (average_consumption / 100) × average_price_per_unit.
    pub average_cost_per_100km: f64,
}

/// Vehicle-level rollup across all units.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleEnergyStatistics {
    pub units: Vec<UnitStatistics>,
    pub total_entries: usize,
    pub total_cost: f64,
}

/// Average consumption over consecutive mileage deltas.
///
/// Entries are ordered by mileage ascending; each pair contributes
/// (volume of the later entry / distance) × 100 when the distance is
/// positive. Fewer than two entries, or no positive-distance pair,
/// yields 0.
pub fn average_consumption(entries: &[EnergyEntry]) -> f64 {
    if entries.len() < 2 {
        return 0.0;
    }

    let mut ordered: Vec<&EnergyEntry> = entries.iter().collect();
    ordered.sort_by_key(|e| e.mileage);

    let mut sum = 0.0;
    let mut valid_pairs = 0usize;
    for pair in ordered.windows(2) {
        let distance = pair[1].mileage - pair[0].mileage;
        if distance > 0 {
            sum += pair[1].volume / distance as f64 * 100.0;
            valid_pairs += 1;
        }
    }

    if valid_pairs == 0 {
        0.0
    } else {
        sum / valid_pairs as f64
    }
}

pub fn total_volume(entries: &[EnergyEntry]) -> f64 {
    entries.iter().map(|e| e.volume).sum()
}

/// Sum of recorded costs. Entries without a cost are excluded, not
/// treated as zero.
pub fn total_cost(entries: &[EnergyEntry]) -> f64 {
    entries.iter().filter_map(|e| e.cost).sum()
}

/// Mean of recorded prices per unit; 0 when none recorded.
pub fn average_price_per_unit(entries: &[EnergyEntry]) -> f64 {
    let prices: Vec<f64> = entries.iter().filter_map(|e| e.price_per_unit).collect();
    if prices.is_empty() {
        0.0
    } else {
        prices.iter().sum::<f64>() / prices.len() as f64
    }
}

/// Compose the per-unit summary for one measurement unit.
pub fn statistics_for_unit(unit: EnergyUnit, entries: &[EnergyEntry]) -> UnitStatistics {
    let energy_types: Vec<EnergyType> = entries
        .iter()
        .map(|e| e.energy_type)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let consumption = average_consumption(entries);
    let avg_price = average_price_per_unit(entries);

    UnitStatistics {
        unit,
        entry_count: entries.len(),
        energy_types,
        average_consumption: consumption,
        total_volume: total_volume(entries),
        total_cost: total_cost(entries),
        average_price_per_unit: avg_price,
        average_cost_per_100km: consumption / 100.0 * avg_price,
    }
}

/// Group entries by unit (optionally pre-filtered by energy type) and
/// aggregate overall totals across units.
pub fn aggregate(
    entries: Vec<EnergyEntry>,
    energy_types: Option<&[EnergyType]>,
) -> VehicleEnergyStatistics {
    let filtered: Vec<EnergyEntry> = match energy_types {
        Some(types) if !types.is_empty() => entries
            .into_iter()
            .filter(|e| types.contains(&e.energy_type))
            .collect(),
        _ => entries,
    };

    let mut by_unit: BTreeMap<EnergyUnit, Vec<EnergyEntry>> = BTreeMap::new();
    for entry in filtered {
        by_unit.entry(entry.energy_unit).or_default().push(entry);
    }

    let units: Vec<UnitStatistics> = by_unit
        .iter()
        .map(|(unit, entries)| statistics_for_unit(*unit, entries))
        .collect();

    VehicleEnergyStatistics {
        total_entries: units.iter().map(|u| u.entry_count).sum(),
        total_cost: units.iter().map(|u| u.total_cost).sum(),
        units,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn entry(mileage: i64, volume: f64) -> EnergyEntry {
        EnergyEntry {
            id: format!("e-{}", mileage),
            vehicle_id: "veh-1".into(),
            entry_date: Utc::now(),
            mileage,
            energy_type: EnergyType::Gasoline,
            energy_unit: EnergyUnit::Liter,
            volume,
            cost: None,
            price_per_unit: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn priced(mileage: i64, volume: f64, cost: Option<f64>, price: Option<f64>) -> EnergyEntry {
        EnergyEntry {
            cost,
            price_per_unit: price,
            ..entry(mileage, volume)
        }
    }

    #[test]
    fn consumption_from_consecutive_deltas() {
        // 500 km on 60 l → 12 l/100km
        let entries = vec![entry(1000, 50.0), entry(1500, 60.0)];
        assert_eq!(average_consumption(&entries), 12.0);
    }

    #[test]
    fn consumption_sorts_by_mileage_first() {
        let entries = vec![entry(1500, 60.0), entry(1000, 50.0)];
        assert_eq!(average_consumption(&entries), 12.0);
    }

    #[test]
    fn consumption_needs_two_entries() {
        assert_eq!(average_consumption(&[]), 0.0);
        assert_eq!(average_consumption(&[entry(1000, 50.0)]), 0.0);
    }

    #[test]
    fn zero_distance_pairs_are_skipped() {
        let entries = vec![entry(1000, 50.0), entry(1000, 60.0)];
        assert_eq!(average_consumption(&entries), 0.0);

        // only the 1000→1500 pair counts
        let entries = vec![entry(1000, 50.0), entry(1000, 55.0), entry(1500, 60.0)];
        assert_eq!(average_consumption(&entries), 12.0);
    }

    #[test]
    fn missing_costs_are_excluded_not_zeroed() {
        let entries = vec![
            priced(1000, 40.0, Some(100.0), None),
            priced(1500, 40.0, None, None),
            priced(2000, 40.0, Some(200.0), None),
        ];
        assert_eq!(total_cost(&entries), 300.0);
    }

    #[test]
    fn average_price_ignores_missing_values() {
        let entries = vec![
            priced(1000, 40.0, None, Some(1.5)),
            priced(1500, 40.0, None, None),
            priced(2000, 40.0, None, Some(2.5)),
        ];
        assert_eq!(average_price_per_unit(&entries), 2.0);
        assert_eq!(average_price_per_unit(&[entry(1000, 40.0)]), 0.0);
    }

    #[test]
    fn per_unit_summary_composes_cost_per_100km() {
        let entries = vec![
            priced(1000, 50.0, Some(90.0), Some(1.8)),
            priced(1500, 60.0, Some(108.0), Some(1.8)),
        ];
        let stats = statistics_for_unit(EnergyUnit::Liter, &entries);
        assert_eq!(stats.average_consumption, 12.0);
        assert_eq!(stats.average_price_per_unit, 1.8);
        // 12/100 × 1.8
        assert!((stats.average_cost_per_100km - 0.216).abs() < 1e-12);
        assert_eq!(stats.total_volume, 110.0);
        assert_eq!(stats.energy_types, vec![EnergyType::Gasoline]);
    }

    #[test]
    fn aggregate_groups_by_unit_and_sums_totals() {
        let mut charge = priced(2000, 30.0, Some(12.0), Some(0.4));
        charge.energy_type = EnergyType::Electric;
        charge.energy_unit = EnergyUnit::KilowattHour;

        let entries = vec![
            priced(1000, 50.0, Some(90.0), Some(1.8)),
            priced(1500, 60.0, Some(108.0), Some(1.8)),
            charge,
        ];

        let stats = aggregate(entries, None);
        assert_eq!(stats.units.len(), 2);
        assert_eq!(stats.total_entries, 3);
        assert_eq!(stats.total_cost, 210.0);
    }

    #[test]
    fn aggregate_applies_energy_type_filter() {
        let mut charge = entry(2000, 30.0);
        charge.energy_type = EnergyType::Electric;
        charge.energy_unit = EnergyUnit::KilowattHour;

        let entries = vec![entry(1000, 50.0), charge];

        let stats = aggregate(entries.clone(), Some(&[EnergyType::Electric]));
        assert_eq!(stats.total_entries, 1);
        assert_eq!(stats.units[0].unit, EnergyUnit::KilowattHour);

        // empty filter list is a no-op
        let stats = aggregate(entries, Some(&[]));
        assert_eq!(stats.total_entries, 2);
    }
}
