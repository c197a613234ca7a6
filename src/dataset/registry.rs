//! Dataset registry for the bundled naming order table.
//!
//! This module provides functionality to:
//! - Embed the naming order JSON at compile time
//! - Parse it leniently for the bundled table (bad records are logged and skipped)
//! - Parse caller-supplied JSON strictly (the first bad record fails the load)
//! - Warn about duplicate codes, which lookups resolve to the first record

use serde_json::value::RawValue;
use std::collections::HashSet;
use std::sync::LazyLock;

use super::types::{CountryRecord, ENGLISH_LABEL};
use crate::error::DatasetError;
use crate::lookup::NameOrderLookup;

// Embed the naming order table at compile time
const NAMING_ORDER_JSON: &str = include_str!("../../data/naming_order.json");

/// Lookup over the bundled table, built on first use
static BUNDLED: LazyLock<NameOrderLookup> =
    LazyLock::new(|| NameOrderLookup::new(parse_bundled_records(NAMING_ORDER_JSON)));

/// Get the lookup over the bundled dataset
pub fn bundled() -> &'static NameOrderLookup {
    &BUNDLED
}

/// Raw JSON of the bundled dataset
pub fn bundled_json() -> &'static str {
    NAMING_ORDER_JSON
}

/// Check a record against the dataset invariants
fn validate_record(record: &CountryRecord) -> Result<(), DatasetError> {
    if record.naming_order.get(ENGLISH_LABEL).is_none() {
        return Err(DatasetError::MissingEnglish {
            code: record.code.clone(),
        });
    }
    Ok(())
}

/// Log any codes that appear more than once, ignoring case
fn warn_duplicates(records: &[CountryRecord]) {
    let mut seen = HashSet::new();
    for record in records {
        if !seen.insert(record.code.to_ascii_uppercase()) {
            tracing::warn!(
                "Duplicate naming order record for {}, lookups use the first",
                record.code
            );
        }
    }
}

/// Parse the dataset, skipping records that fail to parse or validate
pub fn parse_bundled_records(json: &str) -> Vec<CountryRecord> {
    // Each element stays raw so its label order reaches the NamingOrder visitor
    let values: Vec<&RawValue> = match serde_json::from_str(json) {
        Ok(values) => values,
        Err(e) => {
            tracing::error!("Failed to parse naming order data: {}", e);
            return Vec::new();
        }
    };

    let records: Vec<CountryRecord> = values
        .into_iter()
        .filter_map(|raw| match serde_json::from_str::<CountryRecord>(raw.get()) {
            Ok(record) => match validate_record(&record) {
                Ok(()) => Some(record),
                Err(e) => {
                    tracing::warn!("Skipping naming order record: {}", e);
                    None
                }
            },
            Err(e) => {
                tracing::warn!("Failed to parse naming order record: {}", e);
                None
            }
        })
        .collect();

    warn_duplicates(&records);
    tracing::info!("Loaded {} naming order records", records.len());
    records
}

/// Parse the dataset, failing on the first bad record
pub fn parse_records(json: &str) -> Result<Vec<CountryRecord>, DatasetError> {
    let records: Vec<CountryRecord> = serde_json::from_str(json)?;
    for record in &records {
        validate_record(record)?;
    }
    warn_duplicates(&records);
    tracing::debug!("Parsed {} naming order records", records.len());
    Ok(records)
}
