//! Catalog and collection loading. The unit catalog is a JSON array in the
//! Alpha Strike export schema; the collection manifest is a CSV with a header
//! row and one owned mini per row (duplicate rows mean multiple copies, each
//! becoming its own mini).

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::model::mini::{Mini, MiniId};
use crate::model::variant::UnitVariant;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse unit catalog {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to read collection {path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },
}

/// Loads the unit catalog: a JSON array of variant records.
pub fn load_unit_catalog(path: &Path) -> Result<Vec<UnitVariant>, CatalogError> {
    let display = path.display().to_string();
    let raw = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: display.clone(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| CatalogError::Json { path: display, source })
}

/// Groups catalog variants by their preferred chassis, the key the collection
/// manifest uses.
pub fn units_by_chassis(units: Vec<UnitVariant>) -> HashMap<String, Vec<UnitVariant>> {
    let mut grouped: HashMap<String, Vec<UnitVariant>> = HashMap::new();
    for unit in units {
        grouped
            .entry(unit.preferred_chassis().to_string())
            .or_default()
            .push(unit);
    }
    grouped
}

/// Loads the collection manifest: one chassis name per row, header skipped.
/// Rows may repeat; each row is one owned mini.
pub fn load_collection(path: &Path) -> Result<Vec<String>, CatalogError> {
    let display = path.display().to_string();
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|source| CatalogError::Csv { path: display.clone(), source })?;
    let mut chassis_names = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| CatalogError::Csv {
            path: display.clone(),
            source,
        })?;
        if let Some(chassis) = record.get(0) {
            let chassis = chassis.trim();
            if !chassis.is_empty() {
                chassis_names.push(chassis.to_string());
            }
        }
    }
    Ok(chassis_names)
}

/// Builds the mini list the chooser consumes. Ids are sequential and stable
/// for a given manifest order. Chassis with no catalog entry get an empty
/// variant list; pruning removes them at search time, matching the original
/// loader's warn-and-continue behavior.
pub fn build_minis(
    collection: &[String],
    units_by_chassis: &HashMap<String, Vec<UnitVariant>>,
) -> Vec<Mini> {
    collection
        .iter()
        .enumerate()
        .map(|(index, chassis)| Mini {
            id: MiniId(index as u32),
            chassis: chassis.clone(),
            variants: units_by_chassis.get(chassis).cloned().unwrap_or_default(),
        })
        .collect()
}
