use atelier_core::{Material, Product, ProductionRecord};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub materials: Vec<Material>,
    pub products: Vec<Product>,
    pub records: Vec<ProductionRecord>,
}

impl Catalog {
    pub fn upsert_material(&mut self, material: Material) {
        match self.materials.iter_mut().find(|m| m.id == material.id) {
            Some(slot) => *slot = material,
            None => self.materials.push(material),
        }
    }

    pub fn remove_material(&mut self, id: Uuid) {
        self.materials.retain(|m| m.id != id);
    }

    pub fn upsert_product(&mut self, product: Product) {
        match self.products.iter_mut().find(|p| p.id == product.id) {
            Some(slot) => *slot = product,
            None => self.products.push(product),
        }
    }

    pub fn remove_product(&mut self, id: Uuid) {
        self.products.retain(|p| p.id != id);
    }

    pub fn append_record(&mut self, record: ProductionRecord) {
        self.records.insert(0, record);
    }

    pub fn remove_record(&mut self, id: Uuid) {
        self.records.retain(|r| r.id != id);
    }

    pub fn records_newest_first(&self) -> Vec<ProductionRecord> {
        let mut records = self.records.clone();
        records.sort_by(|a, b| b.produced_at.cmp(&a.produced_at));
        records
    }

    pub fn apply_production(&mut self, materials: Vec<Material>, record: ProductionRecord) {
        for material in materials {
            self.upsert_material(material);
        }
        self.append_record(record);
    }
}
