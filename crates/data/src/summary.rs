use crate::cache::TableLoad;
use crate::catalog::DataCategory;
use crate::reader::DataReader;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileDetail {
    pub filename: String,
    pub exists: bool,
    pub size_mb: Option<f64>,
    pub rows: Option<usize>,
    pub columns: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataSummary {
    pub data_dir: String,
    /// Distinct candidate files that loaded successfully.
    pub total_files: usize,
    pub total_size_mb: f64,
    pub data_types: Vec<DataCategory>,
    pub file_details: BTreeMap<DataCategory, Vec<FileDetail>>,
    pub available_wind_farms: Vec<String>,
}

fn round_mb(bytes: u64) -> f64 {
    (bytes as f64 / (1024.0 * 1024.0) * 100.0).round() / 100.0
}

impl DataReader {
    /// Presence, size and shape of every candidate file, grouped by category.
    pub fn data_summary(&self) -> DataSummary {
        let mut file_details = BTreeMap::new();
        let mut loaded: Vec<String> = Vec::new();
        let mut total_bytes = 0u64;
        let mut sized: Vec<String> = Vec::new();

        for entry in self.catalog().entries() {
            let mut details = Vec::with_capacity(entry.files.len());
            for filename in &entry.files {
                let path = self.data_dir().join(filename);
                let mut detail = FileDetail {
                    filename: filename.clone(),
                    exists: path.exists(),
                    size_mb: None,
                    rows: None,
                    columns: None,
                    error: None,
                };
                if detail.exists {
                    match std::fs::metadata(&path) {
                        Ok(meta) => {
                            detail.size_mb = Some(round_mb(meta.len()));
                            if !sized.contains(filename) {
                                sized.push(filename.clone());
                                total_bytes += meta.len();
                            }
                        }
                        Err(err) => detail.error = Some(err.to_string()),
                    }
                    match self.load(filename) {
                        TableLoad::Loaded(table) => {
                            detail.rows = Some(table.height());
                            detail.columns = Some(
                                table.column_names().into_iter().map(str::to_string).collect(),
                            );
                            if !loaded.contains(filename) {
                                loaded.push(filename.clone());
                            }
                        }
                        TableLoad::Missing(_) => {}
                        TableLoad::Failed { message, .. } => detail.error = Some(message),
                    }
                }
                details.push(detail);
            }
            file_details.insert(entry.category, details);
        }

        DataSummary {
            data_dir: self.data_dir().display().to_string(),
            total_files: loaded.len(),
            total_size_mb: round_mb(total_bytes),
            data_types: self.catalog().entries().iter().map(|e| e.category).collect(),
            file_details,
            available_wind_farms: self.available_wind_farms(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CategoryCatalog, CategoryEntry, Extraction};
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn summary_reports_presence_shape_and_farms() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join("shared.csv"),
            "wind_farm,capacity_factor\nwf2,0.3\nwp1,0.2\n",
        )
        .unwrap();
        std::fs::write(dir.path().join("broken.parquet"), b"nope").unwrap();
        let catalog = CategoryCatalog::new(vec![
            CategoryEntry {
                category: DataCategory::PowerCurve,
                files: vec!["shared.csv".into(), "absent.parquet".into()],
                extraction: Extraction::Matching(&["capacity"]),
            },
            CategoryEntry {
                category: DataCategory::CapacityFactor,
                files: vec!["shared.csv".into(), "broken.parquet".into()],
                extraction: Extraction::Matching(&["capacity"]),
            },
        ]);
        let reader = DataReader::new(dir.path()).with_catalog(catalog);

        let summary = reader.data_summary();
        assert_eq!(summary.total_files, 1);
        assert_eq!(summary.available_wind_farms, vec!["wp1", "wp2"]);

        let power = &summary.file_details[&DataCategory::PowerCurve];
        assert_eq!(power[0].rows, Some(2));
        assert!(!power[1].exists);
        let capacity = &summary.file_details[&DataCategory::CapacityFactor];
        assert!(capacity[1].error.is_some());

        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["data_types"], json!(["power_curve", "capacity_factor"]));
        assert_eq!(
            value["file_details"]["power_curve"][0]["columns"],
            json!(["wind_farm", "capacity_factor"])
        );
    }
}
