pub mod catalog;
pub mod config;
pub mod json_file;
pub mod memory;

pub use catalog::Catalog;
pub use config::StoreConfig;
pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
