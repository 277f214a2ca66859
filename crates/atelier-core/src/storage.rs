use async_trait::async_trait;
use uuid::Uuid;

use crate::models::{Material, Product, ProductionRecord};

#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn list_materials(&self) -> anyhow::Result<Vec<Material>>;
    async fn put_material(&self, material: Material) -> anyhow::Result<()>;
    async fn remove_material(&self, id: Uuid) -> anyhow::Result<()>;

    async fn list_products(&self) -> anyhow::Result<Vec<Product>>;
    async fn put_product(&self, product: Product) -> anyhow::Result<()>;
    async fn remove_product(&self, id: Uuid) -> anyhow::Result<()>;

    /// Newest first.
    async fn list_production_records(&self) -> anyhow::Result<Vec<ProductionRecord>>;
    async fn append_production_record(&self, record: ProductionRecord) -> anyhow::Result<()>;
    async fn remove_production_record(&self, id: Uuid) -> anyhow::Result<()>;

    /// Replaces the given materials by id and appends the record as one write;
    /// readers never observe one without the other.
    async fn commit_production(
        &self,
        materials: Vec<Material>,
        record: ProductionRecord,
    ) -> anyhow::Result<()>;
}
