use polars::prelude::{DataFrame, NamedFrom, ParquetWriter, Series};
use serde_json::json;
use std::fs::File;
use std::path::Path;
use tempfile::TempDir;
use windfarm_data::{DataCategory, DataReader, Resolution};

fn write_parquet(dir: &Path, name: &str, columns: Vec<Series>) {
    let mut frame = DataFrame::new(columns).expect("frame");
    let mut file = File::create(dir.join(name)).expect("create parquet");
    ParquetWriter::new(&mut file)
        .finish(&mut frame)
        .expect("write parquet");
}

/// A data directory shaped like the processed outputs of the analysis notebooks.
fn fixture() -> TempDir {
    let temp = TempDir::new().expect("tempdir");
    let dir = temp.path();

    write_parquet(
        dir,
        "power_curve_parameters.parquet",
        vec![
            Series::new("wind_farm", ["wf1", "wf2", "wf3"]),
            Series::new("cut_in_speed_ms", [3.0, 3.2, 2.9]),
            Series::new("rated_speed_ms", [12.0, 12.5, 11.8]),
            Series::new("cut_out_speed_ms", [25.0, 25.0, 24.0]),
            Series::new("rated_power_mw", [2.0, 2.0, 1.8]),
        ],
    );
    // No identifier column and one row per farm: positional mapping applies.
    write_parquet(
        dir,
        "02_wind_physics_analysis.parquet",
        vec![
            Series::new("capacity_factor", [0.31, 0.28, 0.35, 0.30, 0.27, 0.33, 0.29]),
            Series::new("missing_pct", [0.5, 1.2, 0.0, 0.3, 0.8, 0.1, 0.4]),
            Series::new("co2_displaced_tons", [900.0, 850.0, 1010.0, 870.0, 800.0, 960.0, 880.0]),
        ],
    );
    write_parquet(
        dir,
        "07_ml_models_results.parquet",
        vec![
            Series::new("model", ["random_forest", "xgboost", "lstm"]),
            Series::new("horizon", [24i64, 24, 24]),
            Series::new("rmse", [0.151, 0.142, 0.160]),
            Series::new("mae", [0.104, 0.098, 0.110]),
        ],
    );
    temp
}

#[test]
fn power_curve_for_a_known_farm_comes_from_the_identifier_column() {
    let temp = fixture();
    let reader = DataReader::new(temp.path());

    let result = reader.fetch(DataCategory::PowerCurve, Some("WF2"));
    assert_eq!(result.wind_farm.as_deref(), Some("wp2"));
    assert_eq!(result.source_files, vec!["power_curve_parameters.parquet"]);
    assert_eq!(result.metadata.resolution, Some(Resolution::IdentifierColumn));

    let value = result.to_value();
    assert_eq!(value["power_curve_parameters"]["cut_in_speed"], json!(3.2));
    assert_eq!(value["power_curve_parameters"]["rated_speed"], json!(12.5));
    assert_eq!(value["power_curve_parameters"]["cut_out_speed"], json!(25.0));
    assert_eq!(value["power_curve_parameters"]["rated_power"], json!(2.0));
    assert!(value.get("error").is_none());
}

#[test]
fn unknown_farm_yields_empty_result_without_error() {
    let temp = fixture();
    let reader = DataReader::new(temp.path());

    let value = reader.fetch(DataCategory::PowerCurve, Some("wp9")).to_value();
    assert_eq!(value["category"], json!("power_curve"));
    assert_eq!(value["wind_farm"], json!("wp9"));
    assert_eq!(value["power_curve_parameters"], json!({}));
    assert_eq!(value["source_files"], json!([]));
    assert!(value.get("error").is_none());
}

#[test]
fn unkeyed_small_table_is_read_positionally() {
    let temp = fixture();
    let reader = DataReader::new(temp.path());

    let result = reader.fetch(DataCategory::CapacityFactor, Some("wind farm 3"));
    assert_eq!(result.values.get("capacity_factor"), Some(&json!(0.35)));
    assert_eq!(result.metadata.resolution, Some(Resolution::Positional));
    assert_eq!(result.source_files, vec!["02_wind_physics_analysis.parquet"]);
}

#[test]
fn missing_data_directory_never_panics() {
    let reader = DataReader::new("/definitely/not/a/windfarm/dir");
    for category in DataCategory::ALL {
        let result = reader.fetch(category, Some("wp1"));
        assert!(result.is_empty());
        assert!(result.source_files.is_empty());
    }
    assert!(reader.available_wind_farms().is_empty());
    assert_eq!(reader.data_summary().total_files, 0);
}

#[test]
fn reports_combine_multiple_files() {
    let temp = fixture();
    let reader = DataReader::new(temp.path());

    let power = reader.power_curve_data(Some("wp1"));
    assert_eq!(power.power_curve_parameters["cut_in_speed"], json!(3.0));
    assert_eq!(power.capacity_factors["capacity_factor"], json!(0.31));
    assert_eq!(power.data_quality["missing_pct"], json!(0.5));
    assert_eq!(power.metadata.files_processed, 2);
    assert_eq!(power.metadata.wind_farms_available, vec!["wp1", "wp2", "wp3"]);

    let performance = reader.forecast_performance(Some("xgboost"), Some(24));
    assert_eq!(performance.performance_metrics["rmse"], json!(0.142));

    let business = reader.business_metrics(Some(10.0));
    assert!(business.co2_displacement.contains_key("co2_displaced_tons"));
    assert!(business.scaled_metrics.is_empty(), "per-row maps are not scaled");

    let summary = reader.wind_farm_summary(Some("wf1"));
    assert_eq!(summary.wind_farm.as_deref(), Some("wp1"));
    assert_eq!(summary.power_curves["rated_power"], json!(2.0));
}

#[test]
fn search_and_summary_see_the_same_files() {
    let temp = fixture();
    let reader = DataReader::new(temp.path());

    let report = reader.search(&["rmse".to_string()], &[DataCategory::ForecastPerformance]);
    assert_eq!(report.source_files, vec!["07_ml_models_results.parquet"]);
    assert!(report
        .recommendations
        .iter()
        .any(|r| r.contains("evaluate_forecast_performance")));

    let summary = reader.data_summary();
    assert_eq!(summary.total_files, 3);
    assert_eq!(summary.available_wind_farms, vec!["wp1", "wp2", "wp3"]);
}
