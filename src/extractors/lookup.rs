// src/extractors/lookup.rs

// --- Imports ---
use crate::inventory::models::{FlattenedInventory, TableRow};
use serde::Serialize;
use std::collections::BTreeSet;

// --- Lookup table rows ---
// Distinct-value tables for the coded vocabularies that the main tables
// repeat inline. The denormalized tables are still written as-is; these are
// an extra output for loading into a relational schema.

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct CodedValue {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Classification(pub CodedValue);

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct ManagementType(pub CodedValue);

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Contamination(pub CodedValue);

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Medium(pub CodedValue);

/// The source carries this vocabulary as text only, without a code.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct ReasonForFederalInvolvement {
    pub name: String,
}

macro_rules! coded_table {
    ($ty:ty, $file:literal) => {
        impl TableRow for $ty {
            const FILE_NAME: &'static str = $file;
            const HEADERS: &'static [&'static str] = &["Code", "Name"];
        }
    };
}

coded_table!(Classification, "classification.csv");
coded_table!(ManagementType, "management_type.csv");
coded_table!(Contamination, "contamination.csv");
coded_table!(Medium, "medium.csv");

impl TableRow for ReasonForFederalInvolvement {
    const FILE_NAME: &'static str = "reason_for_federal_involvement.csv";
    const HEADERS: &'static [&'static str] = &["ReasonForFederalInvolvement"];
}

/// Sorted, deduplicated vocabularies.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct LookupTables {
    pub classifications: Vec<Classification>,
    pub management_types: Vec<ManagementType>,
    pub contaminations: Vec<Contamination>,
    pub media: Vec<Medium>,
    pub reasons: Vec<ReasonForFederalInvolvement>,
}

impl LookupTables {
    pub fn from_inventory(inventory: &FlattenedInventory) -> Self {
        let tables = Self {
            classifications: distinct(
                inventory
                    .sites
                    .iter()
                    .map(|s| coded(&s.classification_code, &s.classification_name))
                    .map(|v| v.map(Classification)),
            ),
            management_types: distinct(
                inventory
                    .management_strategies
                    .iter()
                    .map(|m| coded(&m.management_type_code, &m.management_type_name).map(ManagementType)),
            ),
            contaminations: distinct(
                inventory
                    .contaminated_media
                    .iter()
                    .map(|c| coded(&c.contamination_code, &c.contamination_name).map(Contamination)),
            ),
            media: distinct(
                inventory
                    .contaminated_media
                    .iter()
                    .map(|c| coded(&c.contaminated_medium_code, &c.contaminated_medium_name).map(Medium)),
            ),
            reasons: distinct(inventory.sites.iter().map(|s| {
                (!s.reason_for_federal_involvement.is_empty()).then(|| ReasonForFederalInvolvement {
                    name: s.reason_for_federal_involvement.clone(),
                })
            })),
        };

        tracing::debug!(
            "Built lookup tables: {} classifications, {} management types, {} contaminations, {} media, {} reasons",
            tables.classifications.len(),
            tables.management_types.len(),
            tables.contaminations.len(),
            tables.media.len(),
            tables.reasons.len()
        );
        tables
    }
}

/// Empty codes mark an absent block and are not vocabulary entries.
fn coded(code: &str, name: &str) -> Option<CodedValue> {
    (!code.is_empty()).then(|| CodedValue {
        code: code.to_string(),
        name: name.to_string(),
    })
}

fn distinct<T: Ord>(values: impl Iterator<Item = Option<T>>) -> Vec<T> {
    values.flatten().collect::<BTreeSet<_>>().into_iter().collect()
}
