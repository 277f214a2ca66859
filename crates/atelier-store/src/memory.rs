use async_trait::async_trait;
use atelier_core::{CatalogStore, Material, Product, ProductionRecord};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::catalog::Catalog;

#[derive(Default)]
pub struct MemoryStore {
    catalog: RwLock<Catalog>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CatalogStore for MemoryStore {
    async fn list_materials(&self) -> anyhow::Result<Vec<Material>> {
        let catalog = self.catalog.read().await;
        Ok(catalog.materials.clone())
    }

    async fn put_material(&self, material: Material) -> anyhow::Result<()> {
        let mut catalog = self.catalog.write().await;
        catalog.upsert_material(material);
        Ok(())
    }

    async fn remove_material(&self, id: Uuid) -> anyhow::Result<()> {
        let mut catalog = self.catalog.write().await;
        catalog.remove_material(id);
        Ok(())
    }

    async fn list_products(&self) -> anyhow::Result<Vec<Product>> {
        let catalog = self.catalog.read().await;
        Ok(catalog.products.clone())
    }

    async fn put_product(&self, product: Product) -> anyhow::Result<()> {
        let mut catalog = self.catalog.write().await;
        catalog.upsert_product(product);
        Ok(())
    }

    async fn remove_product(&self, id: Uuid) -> anyhow::Result<()> {
        let mut catalog = self.catalog.write().await;
        catalog.remove_product(id);
        Ok(())
    }

    async fn list_production_records(&self) -> anyhow::Result<Vec<ProductionRecord>> {
        let catalog = self.catalog.read().await;
        Ok(catalog.records_newest_first())
    }

    async fn append_production_record(&self, record: ProductionRecord) -> anyhow::Result<()> {
        let mut catalog = self.catalog.write().await;
        catalog.append_record(record);
        Ok(())
    }

    async fn remove_production_record(&self, id: Uuid) -> anyhow::Result<()> {
        let mut catalog = self.catalog.write().await;
        catalog.remove_record(id);
        Ok(())
    }

    async fn commit_production(
        &self,
        materials: Vec<Material>,
        record: ProductionRecord,
    ) -> anyhow::Result<()> {
        let mut catalog = self.catalog.write().await;
        catalog.apply_production(materials, record);
        Ok(())
    }
}
