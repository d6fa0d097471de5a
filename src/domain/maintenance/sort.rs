//! Sort-field handling for service record listings

use super::ServiceRecord;

/// Named sort field accepted by the service record list endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceRecordSortField {
    ServiceDate,
    Mileage,
    Title,
    /// Derived from line items, so the database cannot order by it; the
    /// query falls back to default ordering and the materialized page is
    /// re-sorted in memory.
    TotalCost,
}

impl ServiceRecordSortField {
    /// Parse a user-supplied field name. Unknown fields fall back to
    /// the default service-date ordering.
    pub fn parse(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "mileage" => ServiceRecordSortField::Mileage,
            "title" => ServiceRecordSortField::Title,
            "totalcost" | "total_cost" => ServiceRecordSortField::TotalCost,
            _ => ServiceRecordSortField::ServiceDate,
        }
    }

    pub fn requires_in_memory_sorting(&self) -> bool {
        matches!(self, ServiceRecordSortField::TotalCost)
    }
}

/// Re-sort a materialized page by computed total cost.
pub fn sort_by_total_cost(records: &mut [ServiceRecord], descending: bool) {
    records.sort_by(|a, b| {
        let ord = a
            .total_cost()
            .partial_cmp(&b.total_cost())
            .unwrap_or(std::cmp::Ordering::Equal);
        if descending {
            ord.reverse()
        } else {
            ord
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::maintenance::{ServiceItem, ServiceItemKind};
    use chrono::Utc;

    fn record(id: &str, manual_cost: Option<f64>, item_price: Option<f64>) -> ServiceRecord {
        ServiceRecord {
            id: id.into(),
            vehicle_id: "veh-1".into(),
            service_type_id: "typ-1".into(),
            title: id.into(),
            notes: None,
            mileage: 0,
            service_date: Utc::now(),
            manual_cost,
            items: item_price
                .map(|price| {
                    vec![ServiceItem {
                        id: format!("{}-item", id),
                        service_record_id: id.into(),
                        kind: ServiceItemKind::Labor,
                        name: "work".into(),
                        unit_price: price,
                        quantity: 1.0,
                    }]
                })
                .unwrap_or_default(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn parse_is_case_insensitive_with_date_fallback() {
        assert_eq!(
            ServiceRecordSortField::parse("Mileage"),
            ServiceRecordSortField::Mileage
        );
        assert_eq!(
            ServiceRecordSortField::parse("totalCost"),
            ServiceRecordSortField::TotalCost
        );
        assert_eq!(
            ServiceRecordSortField::parse("bogus"),
            ServiceRecordSortField::ServiceDate
        );
    }

    #[test]
    fn only_total_cost_needs_in_memory_sorting() {
        assert!(ServiceRecordSortField::TotalCost.requires_in_memory_sorting());
        assert!(!ServiceRecordSortField::ServiceDate.requires_in_memory_sorting());
        assert!(!ServiceRecordSortField::Title.requires_in_memory_sorting());
    }

    #[test]
    fn total_cost_sort_uses_computed_totals() {
        // b has items (120), a only manual cost (300), c nothing (0)
        let mut page = vec![
            record("a", Some(300.0), None),
            record("b", Some(999.0), Some(120.0)),
            record("c", None, None),
        ];
        sort_by_total_cost(&mut page, true);
        let ids: Vec<&str> = page.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);

        sort_by_total_cost(&mut page, false);
        let ids: Vec<&str> = page.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "b", "a"]);
    }
}
