use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use atelier_core::{CatalogStore, Material, ProductionError, ProductionRecord, Shortage};
use atelier_costing::{MaterialRequirement, max_producible, product_cost, production_plan};

#[derive(Clone)]
pub struct ProductionService {
    store: Arc<dyn CatalogStore>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductionPreview {
    pub product_id: Uuid,
    pub product_name: String,
    pub quantity: u32,
    pub total_cost: Decimal,
    pub max_producible: u64,
    pub materials: Vec<MaterialRequirement>,
}

impl ProductionService {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<dyn CatalogStore> {
        &self.store
    }

    pub async fn preview(
        &self,
        product_id: Uuid,
        quantity: u32,
    ) -> Result<ProductionPreview, ProductionError> {
        if quantity == 0 {
            return Err(ProductionError::InvalidQuantity {
                requested: quantity,
            });
        }

        let materials = self
            .store
            .list_materials()
            .await
            .map_err(ProductionError::Persistence)?;
        let products = self
            .store
            .list_products()
            .await
            .map_err(ProductionError::Persistence)?;
        let product = products
            .iter()
            .find(|p| p.id == product_id)
            .ok_or(ProductionError::ProductNotFound(product_id))?;

        Ok(ProductionPreview {
            product_id,
            product_name: product.name.clone(),
            quantity,
            total_cost: product_cost(product, &materials, Some(quantity)),
            max_producible: max_producible(product, &materials),
            materials: production_plan(product, &materials, quantity),
        })
    }

    /// Validates stock for every bill-of-materials entry, then decrements the
    /// involved materials and appends the history record through the store's
    /// transactional write. Nothing is mutated on a failed validation.
    pub async fn produce(
        &self,
        product_id: Uuid,
        quantity: u32,
    ) -> Result<ProductionRecord, ProductionError> {
        if quantity == 0 {
            return Err(ProductionError::InvalidQuantity {
                requested: quantity,
            });
        }

        let materials = self
            .store
            .list_materials()
            .await
            .map_err(ProductionError::Persistence)?;
        let products = self
            .store
            .list_products()
            .await
            .map_err(ProductionError::Persistence)?;
        let product = products
            .iter()
            .find(|p| p.id == product_id)
            .ok_or(ProductionError::ProductNotFound(product_id))?;

        let plan = production_plan(product, &materials, quantity);

        let shortages: Vec<Shortage> = plan
            .iter()
            .filter(|req| req.available < req.required)
            .map(|req| Shortage {
                material_id: req.material_id,
                material_name: req.material_name.clone(),
                required: req.required,
                available: req.available,
                unit: req.unit.clone(),
            })
            .collect();

        if !shortages.is_empty() {
            warn!(
                "production aborted: product={}, quantity={}, short_materials={}",
                product.name,
                quantity,
                shortages.len()
            );
            return Err(ProductionError::InsufficientStock { shortages });
        }

        let updated: Vec<Material> = materials
            .iter()
            .filter_map(|material| {
                let req = plan.iter().find(|r| r.material_id == material.id)?;
                let mut updated = material.clone();
                updated.current_stock -= req.required;
                Some(updated)
            })
            .collect();

        let record = ProductionRecord {
            id: Uuid::new_v4(),
            product_id: product.id,
            product_name: product.name.clone(),
            quantity_produced: quantity,
            total_cost: product_cost(product, &materials, Some(quantity)),
            materials_consumed: product.bill_of_materials.clone(),
            produced_at: Utc::now(),
        };

        self.store
            .commit_production(updated, record.clone())
            .await
            .map_err(ProductionError::Persistence)?;

        info!(
            "production committed: product={}, quantity={}, cost={}",
            record.product_name, record.quantity_produced, record.total_cost
        );

        Ok(record)
    }
}
