//! Energy entry aggregate

pub mod model;
pub mod repository;

mod dto_create;
mod dto_get;
mod dto_update;

pub use dto_create::CreateEnergyEntryDto;
pub use dto_get::GetEnergyEntryDto;
pub use dto_update::UpdateEnergyEntryDto;
pub use model::{EnergyEntry, EnergyUnit};
pub use repository::EnergyEntryRepositoryInterface;
