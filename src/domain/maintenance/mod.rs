//! Maintenance aggregate
//!
//! Service records with billable line items, user-defined service types,
//! and the sort-field rules for record listings.

pub mod model;
pub mod repository;
pub mod sort;

mod dto_create;
mod dto_get;
mod dto_update;

pub use dto_create::{CreateServiceItemDto, CreateServiceRecordDto};
pub use dto_get::GetServiceRecordDto;
pub use dto_update::UpdateServiceRecordDto;
pub use model::{ServiceItem, ServiceItemKind, ServiceRecord, ServiceType};
pub use repository::{ServiceRecordRepositoryInterface, ServiceTypeRepositoryInterface};
pub use sort::{sort_by_total_cost, ServiceRecordSortField};
