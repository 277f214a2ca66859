use atelier_core::{Material, Product, ProductionRecord};
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ShopSummary {
    pub product_count: usize,
    pub material_count: usize,
    pub units_produced: u64,
    pub production_cost_total: Decimal,
    pub stock_value: Decimal,
    pub low_stock_materials: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductionTotals {
    pub product_name: String,
    pub units: u64,
    pub cost: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct StockValue {
    pub material_name: String,
    pub value: Decimal,
}

// Restock warning level, in purchase units.
fn low_stock_threshold() -> Decimal {
    Decimal::from(20)
}

pub fn shop_summary(
    products: &[Product],
    materials: &[Material],
    records: &[ProductionRecord],
) -> ShopSummary {
    let units_produced = records
        .iter()
        .map(|r| u64::from(r.quantity_produced))
        .sum();
    let production_cost_total = records
        .iter()
        .fold(Decimal::ZERO, |total, r| total + r.total_cost);
    let stock_value = materials
        .iter()
        .fold(Decimal::ZERO, |total, m| total + m.current_stock * m.unit_price);
    let low_stock_materials = materials
        .iter()
        .filter(|m| m.current_stock < low_stock_threshold())
        .count();

    ShopSummary {
        product_count: products.len(),
        material_count: materials.len(),
        units_produced,
        production_cost_total,
        stock_value,
        low_stock_materials,
    }
}

pub fn production_by_product(records: &[ProductionRecord]) -> Vec<ProductionTotals> {
    let mut totals: Vec<ProductionTotals> = Vec::new();

    for record in records {
        match totals
            .iter_mut()
            .find(|t| t.product_name == record.product_name)
        {
            Some(entry) => {
                entry.units += u64::from(record.quantity_produced);
                entry.cost += record.total_cost;
            }
            None => totals.push(ProductionTotals {
                product_name: record.product_name.clone(),
                units: u64::from(record.quantity_produced),
                cost: record.total_cost,
            }),
        }
    }

    totals
}

pub fn stock_value_by_material(materials: &[Material]) -> Vec<StockValue> {
    let mut values: Vec<StockValue> = materials
        .iter()
        .map(|m| StockValue {
            material_name: m.name.clone(),
            value: m.current_stock * m.unit_price,
        })
        .collect();

    values.sort_by(|a, b| b.value.cmp(&a.value));
    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_core::MaterialUsage;
    use chrono::Utc;
    use uuid::Uuid;

    fn material(name: &str, stock: i64, price: i64) -> Material {
        Material {
            id: Uuid::new_v4(),
            name: name.to_string(),
            purchase_unit: "m".to_string(),
            usage_unit: "cm".to_string(),
            current_stock: Decimal::from(stock),
            unit_price: Decimal::from(price),
        }
    }

    fn record(product_name: &str, quantity: u32, cost: i64) -> ProductionRecord {
        ProductionRecord {
            id: Uuid::new_v4(),
            product_id: Uuid::new_v4(),
            product_name: product_name.to_string(),
            quantity_produced: quantity,
            total_cost: Decimal::from(cost),
            materials_consumed: vec![MaterialUsage {
                material_id: Uuid::new_v4(),
                quantity_per_unit: Decimal::ONE,
            }],
            produced_at: Utc::now(),
        }
    }

    fn product(name: &str) -> Product {
        Product {
            id: Uuid::new_v4(),
            name: name.to_string(),
            bill_of_materials: vec![],
            planned_quantity: None,
        }
    }

    #[test]
    fn summary_aggregates_the_whole_shop() {
        let products = [product("apron"), product("shirt")];
        let materials = [material("fabric", 50, 10), material("thread", 5, 2)];
        let records = [record("apron", 3, 45), record("shirt", 2, 12)];

        let summary = shop_summary(&products, &materials, &records);

        assert_eq!(summary.product_count, 2);
        assert_eq!(summary.material_count, 2);
        assert_eq!(summary.units_produced, 5);
        assert_eq!(summary.production_cost_total, Decimal::from(57));
        assert_eq!(summary.stock_value, Decimal::from(510));
        assert_eq!(summary.low_stock_materials, 1);
    }

    #[test]
    fn summary_of_an_empty_shop_is_all_zeroes() {
        let summary = shop_summary(&[], &[], &[]);

        assert_eq!(summary.product_count, 0);
        assert_eq!(summary.units_produced, 0);
        assert_eq!(summary.production_cost_total, Decimal::ZERO);
        assert_eq!(summary.stock_value, Decimal::ZERO);
        assert_eq!(summary.low_stock_materials, 0);
    }

    #[test]
    fn production_totals_group_by_product_name() {
        let records = [
            record("apron", 2, 30),
            record("shirt", 1, 8),
            record("apron", 4, 60),
        ];

        let totals = production_by_product(&records);

        assert_eq!(totals.len(), 2);
        assert_eq!(totals[0].product_name, "apron");
        assert_eq!(totals[0].units, 6);
        assert_eq!(totals[0].cost, Decimal::from(90));
        assert_eq!(totals[1].product_name, "shirt");
        assert_eq!(totals[1].units, 1);
    }

    #[test]
    fn stock_values_come_back_ranked() {
        let materials = [
            material("thread", 5, 2),
            material("fabric", 50, 10),
            material("buttons", 100, 1),
        ];

        let values = stock_value_by_material(&materials);

        assert_eq!(values[0].material_name, "fabric");
        assert_eq!(values[0].value, Decimal::from(500));
        assert_eq!(values[1].material_name, "buttons");
        assert_eq!(values[2].material_name, "thread");
    }
}
