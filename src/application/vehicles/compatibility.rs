//! Engine / energy-type compatibility matrix

use crate::domain::{EnergyType, EngineType};

const FOSSIL: &[EnergyType] = &[
    EnergyType::Gasoline,
    EnergyType::Diesel,
    EnergyType::Lpg,
    EnergyType::Cng,
    EnergyType::Ethanol,
    EnergyType::Biofuel,
];

const PLUG_IN_HYBRID: &[EnergyType] = &[
    EnergyType::Gasoline,
    EnergyType::Diesel,
    EnergyType::Lpg,
    EnergyType::Cng,
    EnergyType::Ethanol,
    EnergyType::Biofuel,
    EnergyType::Electric,
];

const ELECTRIC_ONLY: &[EnergyType] = &[EnergyType::Electric];
const HYDROGEN_ONLY: &[EnergyType] = &[EnergyType::Hydrogen];

/// Energy types an engine can consume.
pub fn allowed_energy_types(engine: EngineType) -> &'static [EnergyType] {
    match engine {
        EngineType::Fuel | EngineType::Hybrid => FOSSIL,
        EngineType::PlugInHybrid => PLUG_IN_HYBRID,
        EngineType::Electric => ELECTRIC_ONLY,
        EngineType::Hydrogen => HYDROGEN_ONLY,
    }
}

pub fn is_compatible(engine: EngineType, energy_type: EnergyType) -> bool {
    allowed_energy_types(engine).contains(&energy_type)
}

/// First requested type the engine cannot consume, if any.
pub fn find_incompatible(engine: EngineType, requested: &[EnergyType]) -> Option<EnergyType> {
    requested
        .iter()
        .copied()
        .find(|t| !is_compatible(engine, *t))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn electric_engine_accepts_only_electric() {
        assert!(is_compatible(EngineType::Electric, EnergyType::Electric));
        assert!(!is_compatible(EngineType::Electric, EnergyType::Gasoline));
        assert!(!is_compatible(EngineType::Electric, EnergyType::Hydrogen));
    }

    #[test]
    fn plug_in_hybrid_accepts_fossil_plus_electric() {
        assert!(is_compatible(EngineType::PlugInHybrid, EnergyType::Electric));
        assert!(is_compatible(EngineType::PlugInHybrid, EnergyType::Diesel));
        assert!(!is_compatible(
            EngineType::PlugInHybrid,
            EnergyType::Hydrogen
        ));
    }

    #[test]
    fn fuel_and_hybrid_accept_all_fossil_types() {
        for engine in [EngineType::Fuel, EngineType::Hybrid] {
            for t in [
                EnergyType::Gasoline,
                EnergyType::Diesel,
                EnergyType::Lpg,
                EnergyType::Cng,
                EnergyType::Ethanol,
                EnergyType::Biofuel,
            ] {
                assert!(is_compatible(engine, t), "{:?} should accept {:?}", engine, t);
            }
            assert!(!is_compatible(engine, EnergyType::Electric));
        }
    }

    #[test]
    fn hydrogen_engine_accepts_only_hydrogen() {
        assert_eq!(
            allowed_energy_types(EngineType::Hydrogen),
            &[EnergyType::Hydrogen]
        );
    }

    #[test]
    fn find_incompatible_reports_first_offender() {
        assert_eq!(
            find_incompatible(
                EngineType::Electric,
                &[EnergyType::Electric, EnergyType::Diesel]
            ),
            Some(EnergyType::Diesel)
        );
        assert_eq!(
            find_incompatible(EngineType::Fuel, &[EnergyType::Gasoline]),
            None
        );
    }
}
