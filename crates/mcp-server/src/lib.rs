//! Wind Farm Analytics MCP Server
//!
//! Answers wind power forecasting questions with analysis guidance assembled from static
//! prompt fragments plus values read directly from pre-computed result tables.
//!
//! ## Tools
//!
//! - `analyze_pattern` - classify a free-text question and return guidance + data
//! - `analyze_power_curves`, `evaluate_forecast_performance`, ... - domain wrappers that
//!   build the question for you
//! - `get_power_curve_data`, `fetch_category`, `search_data`, ... - direct table reads
//! - `server_status`, `list_available_wind_farms` - informational
//!
//! ## Usage
//!
//! ```json
//! {
//!   "mcpServers": {
//!     "windfarm": {
//!       "command": "windfarm-mcp",
//!       "env": { "WINDFARM_DATA_DIR": "/path/to/data/processed" }
//!     }
//!   }
//! }
//! ```

use anyhow::{Context as _, Result};
use rmcp::transport::stdio;
use rmcp::ServiceExt;
use std::path::{Path, PathBuf};
use windfarm_router::{Settings, PROMPTS_DIR_ENV};

pub mod tools;

pub use tools::WindFarmService;

/// Prompt fragments shipped with the crate.
pub fn bundled_prompts_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("prompts")
}

/// Environment settings, with the bundled prompts used when no prompts dir was configured
/// and `./prompts` does not exist.
pub fn resolve_settings() -> Settings {
    let settings = Settings::from_env();
    let configured = std::env::var(PROMPTS_DIR_ENV)
        .map(|v| !v.trim().is_empty())
        .unwrap_or(false);
    if !configured && !settings.prompts_dir.is_dir() {
        let bundled = bundled_prompts_dir();
        log::debug!("Using bundled prompts at {}", bundled.display());
        return settings.with_prompts_dir(bundled);
    }
    settings
}

pub async fn main_entry() -> Result<()> {
    // stdout is reserved for the MCP protocol.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    log::info!("Starting Wind Farm Analytics MCP server");

    let settings = resolve_settings();
    let service = WindFarmService::new(&settings).context("failed to build query router")?;
    let server = service.serve(stdio()).await?;
    server.waiting().await?;

    log::info!("Wind Farm Analytics MCP server stopped");
    Ok(())
}
