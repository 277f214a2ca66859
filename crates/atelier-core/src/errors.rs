use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize)]
pub struct Shortage {
    pub material_id: Uuid,
    pub material_name: String,
    pub required: Decimal,
    pub available: Decimal,
    pub unit: String,
}

impl Shortage {
    pub fn deficit(&self) -> Decimal {
        self.required - self.available
    }
}

#[derive(Debug, Error)]
pub enum ProductionError {
    #[error("production quantity must be positive, got {requested}")]
    InvalidQuantity { requested: u32 },

    #[error("product {0} not found")]
    ProductNotFound(Uuid),

    #[error("insufficient stock for {} material(s)", .shortages.len())]
    InsufficientStock { shortages: Vec<Shortage> },

    #[error("storage failure")]
    Persistence(#[source] anyhow::Error),
}
