use crate::error::{DataError, Result};
use crate::table::{Cell, Column, SourceTable};
use polars::prelude::{CsvReader, DataFrame, DataType, ParquetReader, SerReader, Series};
use std::fs::File;
use std::path::Path;

/// Read a columnar file into a [`SourceTable`], dispatching on the file extension.
pub fn read_table(path: &Path) -> Result<SourceTable> {
    if !path.exists() {
        return Err(DataError::NotFound(path.to_path_buf()));
    }
    let frame = read_frame(path)?;
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
        .to_string();
    table_from_frame(name, &frame)
}

fn read_frame(path: &Path) -> Result<DataFrame> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|s| s.to_lowercase())
        .unwrap_or_default();
    let mut file = File::open(path)?;

    match extension.as_str() {
        "parquet" => Ok(ParquetReader::new(&mut file).finish()?),
        "csv" => Ok(CsvReader::new(&mut file).has_header(true).finish()?),
        other => Err(DataError::UnsupportedFormat(other.to_string())),
    }
}

pub fn table_from_frame(name: impl Into<String>, frame: &DataFrame) -> Result<SourceTable> {
    let mut table = SourceTable::new(name);
    for series in frame.get_columns() {
        table.push_column(column_from_series(series)?);
    }
    Ok(table)
}

fn column_from_series(series: &Series) -> Result<Column> {
    let dtype = series.dtype();
    let cells: Vec<Cell> = if dtype.is_numeric() {
        let casted = series.cast(&DataType::Float64)?;
        casted
            .f64()?
            .into_iter()
            .map(|value| match value {
                Some(v) if v.is_finite() => Cell::Number(v),
                _ => Cell::Null,
            })
            .collect()
    } else if matches!(dtype, DataType::Boolean) {
        series
            .bool()?
            .into_iter()
            .map(|value| value.map_or(Cell::Null, Cell::Bool))
            .collect()
    } else {
        let casted = series.cast(&DataType::Utf8)?;
        casted
            .utf8()?
            .into_iter()
            .map(|value| value.map_or(Cell::Null, |s| Cell::Text(s.to_string())))
            .collect()
    };
    Ok(Column::new(series.name(), cells))
}
