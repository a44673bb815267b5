pub mod calculations;
pub mod catalog;
pub mod input;
pub mod models;

pub use calculations::{SlabCharge, TaxBreakdown, TaxEngine, TaxSchedule};
pub use catalog::{CatalogError, DeductionCatalog, RegimeCatalog};
pub use input::parse_amount;
pub use models::*;
