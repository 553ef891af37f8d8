use crate::loader::read_table;
use crate::table::SourceTable;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

/// Outcome of asking the cache for one named file.
#[derive(Debug, Clone)]
pub enum TableLoad {
    Loaded(Arc<SourceTable>),
    Missing(PathBuf),
    Failed { path: PathBuf, message: String },
}

/// Per-reader cache of loaded tables keyed by filename.
///
/// Entries live as long as the owning reader; there is no eviction or refresh. Two
/// concurrent first loads of the same file may both read it, and the later insert wins.
/// Both copies are identical reads of an immutable file.
#[derive(Debug, Default)]
pub struct TableCache {
    tables: RwLock<HashMap<String, Arc<SourceTable>>>,
}

impl TableCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, filename: &str) -> Option<Arc<SourceTable>> {
        let tables = self.tables.read().unwrap_or_else(|e| e.into_inner());
        tables.get(filename).cloned()
    }

    pub fn insert(&self, filename: impl Into<String>, table: SourceTable) -> Arc<SourceTable> {
        let table = Arc::new(table);
        let mut tables = self.tables.write().unwrap_or_else(|e| e.into_inner());
        tables.insert(filename.into(), table.clone());
        table
    }

    /// Return the cached table or load `dir/filename`. Failed loads are not cached.
    pub fn get_or_load(&self, dir: &Path, filename: &str) -> TableLoad {
        if let Some(table) = self.get(filename) {
            return TableLoad::Loaded(table);
        }

        let path = dir.join(filename);
        if !path.exists() {
            log::warn!("File not found: {}", path.display());
            return TableLoad::Missing(path);
        }

        match read_table(&path) {
            Ok(table) => {
                log::debug!(
                    "Loaded {filename}: {} rows, {} columns",
                    table.height(),
                    table.width()
                );
                TableLoad::Loaded(self.insert(filename, table))
            }
            Err(err) => {
                log::error!("Error loading {filename}: {err}");
                TableLoad::Failed {
                    path,
                    message: format!("{filename}: {err}"),
                }
            }
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn cached_names(&self) -> Vec<String> {
        let tables = self.tables.read().unwrap_or_else(|e| e.into_inner());
        let mut names: Vec<String> = tables.keys().cloned().collect();
        names.sort();
        names
    }
}
