use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use atelier_core::{CatalogStore, Material, Product, ProductionRecord};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::catalog::Catalog;
use crate::config::StoreConfig;

/// Whole-catalog JSON snapshot on disk. Every write replaces the file through
/// a temp-file rename, so a crash never leaves a half-written catalog behind.
pub struct JsonFileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn from_env() -> anyhow::Result<Self> {
        let config = StoreConfig::from_env()?;
        Ok(Self::new(config.path))
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    async fn load(&self) -> anyhow::Result<Catalog> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(Catalog::default()),
            Err(err) => Err(err.into()),
        }
    }

    async fn save(&self, catalog: &Catalog) -> anyhow::Result<()> {
        let bytes = serde_json::to_vec_pretty(catalog)?;
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, &bytes).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }

    async fn mutate<F>(&self, apply: F) -> anyhow::Result<()>
    where
        F: FnOnce(&mut Catalog),
    {
        let _guard = self.write_lock.lock().await;
        let mut catalog = self.load().await?;
        apply(&mut catalog);
        self.save(&catalog).await
    }
}

#[async_trait]
impl CatalogStore for JsonFileStore {
    async fn list_materials(&self) -> anyhow::Result<Vec<Material>> {
        Ok(self.load().await?.materials)
    }

    async fn put_material(&self, material: Material) -> anyhow::Result<()> {
        self.mutate(|catalog| catalog.upsert_material(material)).await
    }

    async fn remove_material(&self, id: Uuid) -> anyhow::Result<()> {
        self.mutate(|catalog| catalog.remove_material(id)).await
    }

    async fn list_products(&self) -> anyhow::Result<Vec<Product>> {
        Ok(self.load().await?.products)
    }

    async fn put_product(&self, product: Product) -> anyhow::Result<()> {
        self.mutate(|catalog| catalog.upsert_product(product)).await
    }

    async fn remove_product(&self, id: Uuid) -> anyhow::Result<()> {
        self.mutate(|catalog| catalog.remove_product(id)).await
    }

    async fn list_production_records(&self) -> anyhow::Result<Vec<ProductionRecord>> {
        Ok(self.load().await?.records_newest_first())
    }

    async fn append_production_record(&self, record: ProductionRecord) -> anyhow::Result<()> {
        self.mutate(|catalog| catalog.append_record(record)).await
    }

    async fn remove_production_record(&self, id: Uuid) -> anyhow::Result<()> {
        self.mutate(|catalog| catalog.remove_record(id)).await
    }

    async fn commit_production(
        &self,
        materials: Vec<Material>,
        record: ProductionRecord,
    ) -> anyhow::Result<()> {
        self.mutate(|catalog| catalog.apply_production(materials, record))
            .await
    }
}
