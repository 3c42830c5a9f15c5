// src/inventory/mod.rs
pub mod document;
pub mod language;
pub mod models;

pub use language::Language;
