// src/export.rs
use crate::extractors::InventoryExtractor;
use crate::inventory::document;
use crate::inventory::Language;
use crate::storage::{ExportManifest, StorageManager, TableOptions, TableSummary};
use crate::utils::AppError;
use std::path::PathBuf;

/// Conventional name of the published inventory dump.
pub const DEFAULT_INPUT_FILE: &str = "fcsi-rscf.xml";

/// Everything a run needs; nothing is read from ambient state.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub language: Language,
    pub table_options: TableOptions,
    pub lookup_tables: bool,
}

impl ExportConfig {
    /// Reads `fcsi-rscf.xml` from `data_dir` and writes the tables next to it.
    pub fn in_directory(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        Self {
            input: data_dir.join(DEFAULT_INPUT_FILE),
            output_dir: data_dir,
            language: Language::default(),
            table_options: TableOptions::default(),
            lookup_tables: false,
        }
    }
}

/// Load, flatten, write. Extraction finishes before any output file is
/// created, so a schema violation aborts without leaving partial tables.
pub fn run(config: &ExportConfig) -> Result<Vec<TableSummary>, AppError> {
    // 1. Document Load
    let source = document::read_source(&config.input)?;
    let document = document::parse_document(&source)?;

    // 2. Flatten
    let extractor = InventoryExtractor::new(config.language);
    let inventory = extractor.flatten(&document)?;

    // 3. Write
    let storage = StorageManager::new(&config.output_dir)?;
    tracing::info!("Writing tables to {}", storage.base_dir().display());
    let mut tables = storage.open_tables(&config.table_options, config.lookup_tables)?;
    tables.write_inventory(&inventory)?;
    let summaries = tables.finish()?;

    let manifest = ExportManifest {
        source: config.input.clone(),
        language: extractor.language(),
        lookup_tables: config.lookup_tables,
        tables: summaries.clone(),
        exported_at: chrono::Utc::now().to_rfc3339(),
    };
    storage.save_manifest(&manifest)?;

    Ok(summaries)
}
