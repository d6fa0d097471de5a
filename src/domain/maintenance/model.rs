//! Maintenance domain models: service records, line items, categories

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of a billable line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceItemKind {
    Part,
    Labor,
    Tax,
    Other,
}

impl ServiceItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceItemKind::Part => "part",
            ServiceItemKind::Labor => "labor",
            ServiceItemKind::Tax => "tax",
            ServiceItemKind::Other => "other",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "part" => Some(ServiceItemKind::Part),
            "labor" => Some(ServiceItemKind::Labor),
            "tax" => Some(ServiceItemKind::Tax),
            "other" => Some(ServiceItemKind::Other),
            _ => None,
        }
    }
}

/// Billable line item owned by exactly one service record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceItem {
    pub id: String,
    pub service_record_id: String,
    pub kind: ServiceItemKind,
    pub name: String,
    pub unit_price: f64,
    pub quantity: f64,
}

impl ServiceItem {
    pub fn line_total(&self) -> f64 {
        self.unit_price * self.quantity
    }
}

/// User-defined maintenance category referenced by service records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceType {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A maintenance event with its line items loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceRecord {
    pub id: String,
    pub vehicle_id: String,
    pub service_type_id: String,
    pub title: String,
    pub notes: Option<String>,
    pub mileage: i64,
    pub service_date: DateTime<Utc>,
    /// Fallback cost used only when no items exist.
    pub manual_cost: Option<f64>,
    pub items: Vec<ServiceItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ServiceRecord {
    /// Invariant: items win over the manual cost.
    ///
    /// With items present the total is Σ(unit_price × quantity), the
    /// manual cost is ignored even when nonzero. Without items the manual
    /// cost applies, defaulting to 0.
    pub fn total_cost(&self) -> f64 {
        if self.items.is_empty() {
            self.manual_cost.unwrap_or(0.0)
        } else {
            self.items.iter().map(ServiceItem::line_total).sum()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(manual_cost: Option<f64>, items: Vec<(f64, f64)>) -> ServiceRecord {
        ServiceRecord {
            id: "rec-1".into(),
            vehicle_id: "veh-1".into(),
            service_type_id: "typ-1".into(),
            title: "Brake service".into(),
            notes: None,
            mileage: 42_000,
            service_date: Utc::now(),
            manual_cost,
            items: items
                .into_iter()
                .enumerate()
                .map(|(i, (unit_price, quantity))| ServiceItem {
                    id: format!("item-{}", i),
                    service_record_id: "rec-1".into(),
                    kind: ServiceItemKind::Part,
                    name: format!("Item {}", i),
                    unit_price,
                    quantity,
                })
                .collect(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn items_sum_overrides_manual_cost() {
        // 2 pads at 45.50 + 1h labor at 80 = 171.00, manual 999 ignored
        let r = record(Some(999.0), vec![(45.5, 2.0), (80.0, 1.0)]);
        assert_eq!(r.total_cost(), 171.0);
    }

    #[test]
    fn manual_cost_applies_without_items() {
        let r = record(Some(120.0), vec![]);
        assert_eq!(r.total_cost(), 120.0);
    }

    #[test]
    fn defaults_to_zero() {
        let r = record(None, vec![]);
        assert_eq!(r.total_cost(), 0.0);
    }
}
