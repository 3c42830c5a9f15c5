// src/storage/mod.rs
pub mod table;

use crate::extractors::lookup::{Classification, Contamination, ManagementType, Medium, ReasonForFederalInvolvement};
use crate::extractors::LookupTables;
use crate::inventory::models::{
    AnnualDataEntry, ContaminatedMediumEntry, FlattenedInventory, ManagementStrategyEntry, ReportingOrganization,
    Site,
};
use crate::inventory::Language;
use crate::utils::error::StorageError;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

pub use table::{TableOptions, TableSummary, TableWriter};

const MANIFEST_FILE: &str = "export_manifest.json";

pub struct StorageManager {
    base_dir: PathBuf,
}

impl StorageManager {
    /// Creates a new StorageManager with the specified base directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self, StorageError> {
        let base_path = base_dir.as_ref().to_path_buf();

        // Create the base directory if it doesn't exist
        if !base_path.exists() {
            fs::create_dir_all(&base_path).map_err(StorageError::IoError)?;
        }

        Ok(Self { base_dir: base_path })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Creates every output table up front, before any row is written.
    pub fn open_tables(&self, options: &TableOptions, lookup_tables: bool) -> Result<TableSet, StorageError> {
        let dir = self.base_dir.as_path();
        let lookups = if lookup_tables {
            Some(LookupWriters {
                classifications: TableWriter::create(dir, options)?,
                management_types: TableWriter::create(dir, options)?,
                contaminations: TableWriter::create(dir, options)?,
                media: TableWriter::create(dir, options)?,
                reasons: TableWriter::create(dir, options)?,
            })
        } else {
            None
        };

        Ok(TableSet {
            organizations: TableWriter::create(dir, options)?,
            sites: TableWriter::create(dir, options)?,
            management_strategies: TableWriter::create(dir, options)?,
            contaminated_media: TableWriter::create(dir, options)?,
            annual_data: TableWriter::create(dir, options)?,
            lookups,
        })
    }

    /// Saves the run manifest in JSON format
    pub fn save_manifest(&self, manifest: &ExportManifest) -> Result<PathBuf, StorageError> {
        let file_path = self.base_dir.join(MANIFEST_FILE);

        let manifest_str = serde_json::to_string_pretty(manifest)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;

        fs::write(&file_path, manifest_str).map_err(StorageError::IoError)?;

        tracing::info!("Saved manifest to {}", file_path.display());

        Ok(file_path)
    }
}

/// Every open output table of one run. Dropping it flushes and closes them all.
pub struct TableSet {
    organizations: TableWriter<ReportingOrganization>,
    sites: TableWriter<Site>,
    management_strategies: TableWriter<ManagementStrategyEntry>,
    contaminated_media: TableWriter<ContaminatedMediumEntry>,
    annual_data: TableWriter<AnnualDataEntry>,
    lookups: Option<LookupWriters>,
}

struct LookupWriters {
    classifications: TableWriter<Classification>,
    management_types: TableWriter<ManagementType>,
    contaminations: TableWriter<Contamination>,
    media: TableWriter<Medium>,
    reasons: TableWriter<ReasonForFederalInvolvement>,
}

impl TableSet {
    pub fn write_inventory(&mut self, inventory: &FlattenedInventory) -> Result<(), StorageError> {
        self.organizations.write_all(&inventory.reporting_organizations)?;
        self.sites.write_all(&inventory.sites)?;
        self.management_strategies.write_all(&inventory.management_strategies)?;
        self.contaminated_media.write_all(&inventory.contaminated_media)?;
        self.annual_data.write_all(&inventory.annual_data)?;

        if let Some(lookups) = &mut self.lookups {
            let tables = LookupTables::from_inventory(inventory);
            lookups.classifications.write_all(&tables.classifications)?;
            lookups.management_types.write_all(&tables.management_types)?;
            lookups.contaminations.write_all(&tables.contaminations)?;
            lookups.media.write_all(&tables.media)?;
            lookups.reasons.write_all(&tables.reasons)?;
        }
        Ok(())
    }

    /// Flushes every table, in the order they appear in the manifest.
    pub fn finish(self) -> Result<Vec<TableSummary>, StorageError> {
        let mut summaries = vec![
            self.organizations.finish()?,
            self.sites.finish()?,
            self.management_strategies.finish()?,
            self.contaminated_media.finish()?,
            self.annual_data.finish()?,
        ];
        if let Some(lookups) = self.lookups {
            summaries.extend([
                lookups.classifications.finish()?,
                lookups.management_types.finish()?,
                lookups.contaminations.finish()?,
                lookups.media.finish()?,
                lookups.reasons.finish()?,
            ]);
        }
        Ok(summaries)
    }
}

/// Metadata about one export run.
#[derive(Debug, Serialize)]
pub struct ExportManifest {
    pub source: PathBuf,
    pub language: Language,
    pub lookup_tables: bool,
    pub tables: Vec<TableSummary>,
    pub exported_at: String,
}
