//! # Wind Farm Data
//!
//! Read-only access to pre-computed wind farm analytics stored as Parquet (or CSV) files.
//!
//! ## Architecture
//!
//! ```text
//! DataReader
//!     │
//!     ├──> CategoryCatalog   category → candidate files + extraction rule
//!     │
//!     ├──> TableCache        filename → Arc<SourceTable>, loaded once via polars
//!     │
//!     ├──> resolve           identifier column, then positional fallback
//!     │
//!     └──> columns           keyword containment on lower-cased column names
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use windfarm_data::{DataCategory, DataReader};
//!
//! let reader = DataReader::new("data/processed");
//! let result = reader.fetch(DataCategory::PowerCurve, Some("WF3"));
//! println!("{}", result.to_value());
//! ```

mod cache;
mod catalog;
mod columns;
mod error;
mod farm;
mod insights;
mod loader;
mod reader;
mod resolve;
mod search;
mod summary;
mod table;

pub use cache::{TableCache, TableLoad};
pub use catalog::{CategoryCatalog, CategoryEntry, DataCategory, Extraction, FieldRule};
pub use columns::{identifier_column, ID_COLUMN_NAMES};
pub use error::{DataError, Result};
pub use farm::{farm_number, known_farms, normalize_farm_id, sibling_variants, KNOWN_FARM_COUNT};
pub use insights::{
    BusinessReport, FarmSummary, FarmSummaryMetadata, PerformanceReport, PowerCurveReport,
    ReportMetadata,
};
pub use loader::{read_table, table_from_frame};
pub use reader::{DataReader, FetchMetadata, FetchResult};
pub use resolve::{first_success, resolve_rows, Resolution, RowMatch, RowResolver, ROW_RESOLVERS};
pub use search::{search_table, SearchReport, TableMatches};
pub use summary::{DataSummary, FileDetail};
pub use table::{Cell, Column, SourceTable};
