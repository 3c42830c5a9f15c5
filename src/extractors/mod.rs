// src/extractors/mod.rs
pub mod inventory;
pub mod lookup;
pub mod resolve;

// Re-export key extraction types for convenience
pub use inventory::InventoryExtractor;
pub use lookup::LookupTables;
