use atelier_core::{Material, Product, convert};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize)]
pub struct MaterialRequirement {
    pub material_id: Uuid,
    pub material_name: String,
    pub unit: String,
    pub required: Decimal,
    pub available: Decimal,
    pub remaining: Decimal,
}

/// Cost of producing `produced_quantity` units (falls back to the product's
/// planned quantity, then 1). Entries whose material is gone contribute nothing.
pub fn product_cost(
    product: &Product,
    materials: &[Material],
    produced_quantity: Option<u32>,
) -> Decimal {
    let quantity = produced_quantity
        .or(product.planned_quantity)
        .unwrap_or(1);
    let quantity = Decimal::from(quantity);

    product
        .bill_of_materials
        .iter()
        .fold(Decimal::ZERO, |total, usage| {
            let Some(material) = materials.iter().find(|m| m.id == usage.material_id) else {
                return total;
            };
            let per_unit = convert(
                usage.quantity_per_unit,
                &material.usage_unit,
                &material.purchase_unit,
            );
            total + per_unit * material.unit_price * quantity
        })
}

/// Largest whole number of units current stock supports. Floors per material,
/// takes the minimum. An empty bill of materials produces nothing; entries with
/// a missing material or zero consumption impose no limit.
pub fn max_producible(product: &Product, materials: &[Material]) -> u64 {
    if product.bill_of_materials.is_empty() {
        return 0;
    }

    product
        .bill_of_materials
        .iter()
        .filter_map(|usage| {
            let material = materials.iter().find(|m| m.id == usage.material_id)?;
            if usage.quantity_per_unit.is_zero() {
                return None;
            }
            let stock_in_usage_unit = convert(
                material.current_stock,
                &material.purchase_unit,
                &material.usage_unit,
            );
            let producible = (stock_in_usage_unit / usage.quantity_per_unit).floor();
            Some(producible.to_u64().unwrap_or(0))
        })
        .min()
        .unwrap_or(u64::MAX)
}

/// Per-material consumption for a production of `quantity` units, in each
/// material's purchase unit. Entries whose material is gone are skipped.
pub fn production_plan(
    product: &Product,
    materials: &[Material],
    quantity: u32,
) -> Vec<MaterialRequirement> {
    let quantity = Decimal::from(quantity);

    product
        .bill_of_materials
        .iter()
        .filter_map(|usage| {
            let material = materials.iter().find(|m| m.id == usage.material_id)?;
            let per_unit = convert(
                usage.quantity_per_unit,
                &material.usage_unit,
                &material.purchase_unit,
            );
            let required = per_unit * quantity;
            Some(MaterialRequirement {
                material_id: material.id,
                material_name: material.name.clone(),
                unit: material.purchase_unit.clone(),
                required,
                available: material.current_stock,
                remaining: material.current_stock - required,
            })
        })
        .collect()
}
