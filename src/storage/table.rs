// src/storage/table.rs
use crate::inventory::models::TableRow;
use crate::utils::error::StorageError;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Output format shared by every table of a run.
#[derive(Debug, Clone)]
pub struct TableOptions {
    pub delimiter: u8,
    /// Prefix files with a UTF-8 byte order mark so spreadsheet tools
    /// detect the encoding instead of assuming a legacy code page.
    pub byte_order_mark: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self { delimiter: b',', byte_order_mark: false }
    }
}

/// Row count of a finished table, recorded in the run manifest.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableSummary {
    pub file: &'static str,
    pub path: PathBuf,
    pub rows: usize,
}

/// One open delimited-text table.
///
/// The header is written on creation, so a table with no rows still has it.
/// Buffered records are flushed by [`TableWriter::finish`], or on drop if the
/// run aborts first.
pub struct TableWriter<T> {
    path: PathBuf,
    writer: csv::Writer<File>,
    rows: usize,
    _row: PhantomData<fn(&T)>,
}

impl<T: TableRow> TableWriter<T> {
    pub fn create(dir: &Path, options: &TableOptions) -> Result<Self, StorageError> {
        let path = dir.join(T::FILE_NAME);
        let mut file = File::create(&path)?;
        if options.byte_order_mark {
            file.write_all(UTF8_BOM)?;
        }

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false) // headers come from TableRow, not from the first record
            .delimiter(options.delimiter)
            .terminator(csv::Terminator::CRLF)
            .from_writer(file);
        writer.write_record(T::HEADERS)?;

        tracing::debug!("Opened table {}", path.display());
        Ok(Self { path, writer, rows: 0, _row: PhantomData })
    }

    pub fn write(&mut self, row: &T) -> Result<(), StorageError> {
        self.writer.serialize(row)?;
        self.rows += 1;
        Ok(())
    }

    pub fn write_all<'r>(&mut self, rows: impl IntoIterator<Item = &'r T>) -> Result<(), StorageError>
    where
        T: 'r,
    {
        rows.into_iter().try_for_each(|row| self.write(row))
    }

    /// Flushes the table and reports how many rows it holds.
    pub fn finish(mut self) -> Result<TableSummary, StorageError> {
        self.writer.flush()?;
        tracing::info!("Wrote {} rows to {}", self.rows, self.path.display());
        Ok(TableSummary { file: T::FILE_NAME, path: self.path, rows: self.rows })
    }
}
