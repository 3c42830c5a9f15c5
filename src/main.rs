// src/main.rs
mod export;
mod extractors;
mod inventory;
mod storage;
mod utils;

use clap::Parser;
use export::ExportConfig;
use inventory::Language;
use std::path::PathBuf;
use storage::TableOptions;
use utils::AppError;

/// Flattens the Federal Contaminated Sites Inventory XML dump into relational CSV tables
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory holding fcsi-rscf.xml; tables are written here too
    #[arg(short, long, default_value = ".")]
    data_dir: PathBuf,

    /// Input XML file (overrides <DATA_DIR>/fcsi-rscf.xml)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output directory for the tables (overrides DATA_DIR)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Language variant of bilingual text to export
    #[arg(short, long, value_enum, default_value_t = Language::En)]
    language: Language,

    /// Field delimiter (single ASCII character)
    #[arg(long, default_value_t = ',')]
    delimiter: char,

    /// Start each table with a UTF-8 byte order mark (helps Excel)
    #[arg(long)]
    excel_bom: bool,

    /// Also write distinct-value lookup tables for the coded vocabularies
    #[arg(long)]
    lookup_tables: bool,
}

impl Args {
    fn into_config(self) -> Result<ExportConfig, AppError> {
        let delimiter = self.delimiter;
        let usable = delimiter.is_ascii() && delimiter != '"' && (delimiter == '\t' || !delimiter.is_ascii_control());
        if !usable {
            return Err(AppError::Config(format!(
                "Delimiter must be a printable ASCII character other than '\"' (or a tab), got {:?}",
                delimiter
            )));
        }

        let mut config = ExportConfig::in_directory(&self.data_dir);
        if let Some(input) = self.input {
            config.input = input;
        }
        if let Some(output_dir) = self.output_dir {
            config.output_dir = output_dir;
        }
        config.language = self.language;
        config.table_options = TableOptions {
            delimiter: self.delimiter as u8,
            byte_order_mark: self.excel_bom,
        };
        config.lookup_tables = self.lookup_tables;
        Ok(config)
    }
}

fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::info!("Starting export for args: {:?}", args);
    let config = args.into_config()?;

    // 3. Run the export; any structural error aborts the whole run
    let summaries = export::run(&config).map_err(|e| {
        tracing::error!("Export aborted: {}", e);
        e
    })?;

    let total: usize = summaries.iter().map(|s| s.rows).sum();
    tracing::info!(
        "Export finished. {} tables, {} rows written to {}",
        summaries.len(),
        total,
        config.output_dir.display()
    );

    Ok(())
}
