// src/inventory/language.rs
use clap::ValueEnum;
use serde::Serialize;

/// Which variant of the bilingual text nodes to export.
/// Chosen once per run and applied to every field of every table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Fr,
}

impl Language {
    /// Element name holding this language's text (`<EN>` / `<FR>`).
    pub fn tag(self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Fr => "FR",
        }
    }
}
