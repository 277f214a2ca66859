use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Material {
    pub id: Uuid,
    pub name: String,
    pub purchase_unit: String,
    pub usage_unit: String,
    pub current_stock: Decimal,
    pub unit_price: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialUsage {
    pub material_id: Uuid,
    pub quantity_per_unit: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub bill_of_materials: Vec<MaterialUsage>,
    pub planned_quantity: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductionRecord {
    pub id: Uuid,
    pub product_id: Uuid,
    pub product_name: String,
    pub quantity_produced: u32,
    pub total_cost: Decimal,
    pub materials_consumed: Vec<MaterialUsage>,
    pub produced_at: DateTime<Utc>,
}
