//! Allowed-energy-type replacement planning
//!
//! A vehicle update supplies the full replacement set of allowed energy
//! types; the plan is the set difference against the current set. Removals
//! are rejected upstream when entries of that type are already logged.

use crate::domain::EnergyType;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnergyTypePlan {
    pub to_add: Vec<EnergyType>,
    pub to_remove: Vec<EnergyType>,
}

impl EnergyTypePlan {
    /// Diff current vs requested set. Order within each list follows the
    /// requested/current ordering.
    pub fn diff(current: &[EnergyType], requested: &[EnergyType]) -> Self {
        let to_add = requested
            .iter()
            .copied()
            .filter(|t| !current.contains(t))
            .collect();
        let to_remove = current
            .iter()
            .copied()
            .filter(|t| !requested.contains(t))
            .collect();
        Self { to_add, to_remove }
    }

    pub fn has_changes(&self) -> bool {
        !self.to_add.is_empty() || !self.to_remove.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_sets_are_a_no_op() {
        let plan = EnergyTypePlan::diff(
            &[EnergyType::Gasoline, EnergyType::Lpg],
            &[EnergyType::Lpg, EnergyType::Gasoline],
        );
        assert!(!plan.has_changes());
    }

    #[test]
    fn computes_additions_and_removals() {
        let plan = EnergyTypePlan::diff(
            &[EnergyType::Gasoline, EnergyType::Lpg],
            &[EnergyType::Gasoline, EnergyType::Electric],
        );
        assert_eq!(plan.to_add, vec![EnergyType::Electric]);
        assert_eq!(plan.to_remove, vec![EnergyType::Lpg]);
        assert!(plan.has_changes());
    }

    #[test]
    fn empty_request_removes_everything() {
        let plan = EnergyTypePlan::diff(&[EnergyType::Diesel], &[]);
        assert_eq!(plan.to_add, Vec::<EnergyType>::new());
        assert_eq!(plan.to_remove, vec![EnergyType::Diesel]);
    }
}
