pub mod errors;
pub mod models;
pub mod storage;
pub mod units;

pub use errors::{ProductionError, Shortage};
pub use models::{Material, MaterialUsage, Product, ProductionRecord};
pub use storage::CatalogStore;
pub use units::{Dimension, convert, dimension_of, from_base, to_base};
