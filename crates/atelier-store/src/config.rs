use std::path::PathBuf;

use anyhow::{Context, Result};

#[derive(Clone, Debug)]
pub struct StoreConfig {
    pub path: PathBuf,
}

impl StoreConfig {
    pub fn from_env() -> Result<Self> {
        let path = std::env::var("STORE_PATH").context("STORE_PATH is required")?;

        Ok(Self {
            path: PathBuf::from(path),
        })
    }
}
