// src/inventory/document.rs
use crate::utils::error::ExtractError;
use roxmltree::{Document, ParsingOptions};
use std::fs;
use std::path::Path;

/// Reads the whole inventory dump into memory.
pub fn read_source(path: &Path) -> std::io::Result<String> {
    let text = fs::read_to_string(path)?;
    tracing::info!("Read {} bytes from {}", text.len(), path.display());
    Ok(text)
}

/// Parses the inventory XML. Any parse failure is fatal for the run.
pub fn parse_document(text: &str) -> Result<Document<'_>, ExtractError> {
    let options = ParsingOptions {
        allow_dtd: true, // published dumps may carry a DOCTYPE
        ..ParsingOptions::default()
    };
    let document = Document::parse_with_options(text, options)?;
    tracing::debug!("Parsed XML document, root element <{}>", document.root_element().tag_name().name());
    Ok(document)
}
