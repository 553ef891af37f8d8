//! Data Access Layer.
//!
//! [`DataReader`] owns the data directory, the category catalog and the table cache.
//! Every public operation is total: missing files, unreadable tables and unknown farms
//! produce empty sections (and an `error` note where something actually failed), never
//! an `Err`.

use crate::cache::{TableCache, TableLoad};
use crate::catalog::{CategoryCatalog, DataCategory};
use crate::columns::{reduce_rows, select_columns};
use crate::farm::normalize_farm_id;
use crate::resolve::{resolve_rows, Resolution};
use crate::table::{Cell, SourceTable};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Debug)]
pub struct DataReader {
    data_dir: PathBuf,
    catalog: CategoryCatalog,
    cache: TableCache,
}

impl DataReader {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        if data_dir.is_dir() {
            log::info!("Data reader initialized with {}", data_dir.display());
        } else {
            log::warn!(
                "Data directory not found: {} (all lookups will come back empty)",
                data_dir.display()
            );
        }
        Self {
            data_dir,
            catalog: CategoryCatalog::default(),
            cache: TableCache::new(),
        }
    }

    #[must_use]
    pub fn with_catalog(mut self, catalog: CategoryCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    #[must_use]
    pub fn catalog(&self) -> &CategoryCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn cache(&self) -> &TableCache {
        &self.cache
    }

    pub(crate) fn load(&self, filename: &str) -> TableLoad {
        self.cache.get_or_load(&self.data_dir, filename)
    }

    /// Loaded tables for `category` in candidate order, plus load failure notes.
    pub(crate) fn load_category(
        &self,
        category: DataCategory,
    ) -> (Vec<(String, Arc<SourceTable>)>, Vec<String>) {
        let mut tables = Vec::new();
        let mut errors = Vec::new();
        for file in self.catalog.files(category) {
            match self.load(file) {
                TableLoad::Loaded(table) => tables.push((file.clone(), table)),
                TableLoad::Missing(_) => {}
                TableLoad::Failed { message, .. } => errors.push(message),
            }
        }
        (tables, errors)
    }

    /// Look up `category` values, for one farm or aggregated over all rows.
    ///
    /// With an identifier, candidates are tried in order and the first file that yields a
    /// non-null value wins. Without one, numeric matches from every candidate are averaged
    /// per column and merged, earlier files winning on key collisions.
    pub fn fetch(&self, category: DataCategory, identifier: Option<&str>) -> FetchResult {
        let canonical = identifier
            .map(normalize_farm_id)
            .filter(|id| !id.is_empty());
        let mut result = FetchResult::empty(category, canonical.clone());

        let Some(entry) = self.catalog.entry(category) else {
            result
                .errors
                .push(format!("no candidate files configured for {category}"));
            return result;
        };

        for file in &entry.files {
            result.metadata.files_checked += 1;
            let table = match self.load(file) {
                TableLoad::Loaded(table) => table,
                TableLoad::Missing(_) => continue,
                TableLoad::Failed { message, .. } => {
                    result.errors.push(message);
                    continue;
                }
            };
            result.metadata.files_loaded += 1;

            match canonical.as_deref() {
                Some(id) => {
                    let Some(found) = resolve_rows(&table, id) else {
                        continue;
                    };
                    let values: Map<String, Value> = select_columns(&table, entry.extraction)
                        .into_iter()
                        .map(|(key, column)| (key, reduce_rows(column, &found.rows)))
                        .filter(|(_, value)| !value.is_null())
                        .collect();
                    if !values.is_empty() {
                        result.values = values;
                        result.source_files.push(file.clone());
                        result.metadata.resolution = Some(found.resolution);
                        break;
                    }
                }
                None => {
                    let mut contributed = false;
                    for (key, column) in select_columns(&table, entry.extraction) {
                        if !column.is_numeric() || result.values.contains_key(&key) {
                            continue;
                        }
                        if let Some(mean) = column.mean() {
                            result.values.insert(key, Cell::Number(mean).to_json());
                            contributed = true;
                        }
                    }
                    if contributed {
                        result.source_files.push(file.clone());
                        result.metadata.resolution = Some(Resolution::Aggregate);
                    }
                }
            }
        }

        if result.values.is_empty() {
            log::debug!(
                "No {category} values for {}",
                result.wind_farm.as_deref().unwrap_or("all farms")
            );
        }
        result
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FetchMetadata {
    pub files_checked: usize,
    pub files_loaded: usize,
    pub resolution: Option<Resolution>,
}

/// Outcome of [`DataReader::fetch`].
///
/// Serializes with the category's section key (for example `power_curve_parameters`)
/// holding `values`, and an `error` field only when some file failed to load.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchResult {
    pub category: DataCategory,
    pub wind_farm: Option<String>,
    pub values: Map<String, Value>,
    pub source_files: Vec<String>,
    pub metadata: FetchMetadata,
    pub errors: Vec<String>,
}

impl FetchResult {
    fn empty(category: DataCategory, wind_farm: Option<String>) -> Self {
        Self {
            category,
            wind_farm,
            values: Map::new(),
            source_files: Vec::new(),
            metadata: FetchMetadata::default(),
            errors: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn section(&self) -> &'static str {
        self.category.section()
    }

    #[must_use]
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

impl Serialize for FetchResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.errors.is_empty() { 5 } else { 6 };
        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry("category", &self.category)?;
        map.serialize_entry("wind_farm", &self.wind_farm)?;
        map.serialize_entry(self.category.section(), &self.values)?;
        map.serialize_entry("source_files", &self.source_files)?;
        map.serialize_entry("metadata", &self.metadata)?;
        if !self.errors.is_empty() {
            map.serialize_entry("error", &self.errors.join("; "))?;
        }
        map.end()
    }
}
