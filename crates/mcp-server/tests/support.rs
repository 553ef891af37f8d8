#![allow(dead_code)]

use anyhow::{Context, Result};
use polars::prelude::{DataFrame, NamedFrom, ParquetWriter, Series};
use rmcp::model::{CallToolRequestParam, CallToolResult};
use rmcp::service::{RoleClient, RunningService, ServiceExt};
use rmcp::transport::TokioChildProcess;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::process::Command;

pub fn locate_windfarm_mcp_bin() -> Result<PathBuf> {
    if let Some(path) = option_env!("CARGO_BIN_EXE_windfarm-mcp") {
        return Ok(PathBuf::from(path));
    }

    // `.../target/{debug|release}/deps/<test>` → `.../target/{debug|release}/windfarm-mcp`
    if let Ok(exe) = std::env::current_exe() {
        if let Some(target_profile_dir) = exe.parent().and_then(|p| p.parent()) {
            let candidate = target_profile_dir.join("windfarm-mcp");
            if candidate.exists() {
                return Ok(candidate);
            }
        }
    }

    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let repo_root = manifest_dir
        .ancestors()
        .nth(2)
        .context("failed to resolve repo root from CARGO_MANIFEST_DIR")?;
    for rel in ["target/debug/windfarm-mcp", "target/release/windfarm-mcp"] {
        let candidate = repo_root.join(rel);
        if candidate.exists() {
            return Ok(candidate);
        }
    }

    anyhow::bail!("failed to locate windfarm-mcp binary; build with: cargo build -p windfarm-mcp")
}

pub fn write_parquet(dir: &Path, name: &str, columns: Vec<Series>) -> Result<()> {
    let mut frame = DataFrame::new(columns).context("build frame")?;
    let mut file = File::create(dir.join(name)).context("create parquet")?;
    ParquetWriter::new(&mut file)
        .finish(&mut frame)
        .context("write parquet")?;
    Ok(())
}

/// Processed-data directory with power-curve and model-result tables.
pub fn write_fixture(dir: &Path, project_status: &str) -> Result<()> {
    write_parquet(
        dir,
        "power_curve_parameters.parquet",
        vec![
            Series::new("wind_farm", ["wf1", "wf2", "wf3"]),
            Series::new("cut_in_speed_ms", [3.0, 3.2, 2.9]),
            Series::new("rated_power_mw", [2.0, 2.0, 1.8]),
        ],
    )?;
    write_parquet(
        dir,
        "07_ml_models_results.parquet",
        vec![
            Series::new("model", ["random_forest", "xgboost"]),
            Series::new("horizon", [24i64, 24]),
            Series::new("rmse", [0.151, 0.142]),
        ],
    )?;
    std::fs::write(dir.join("project_status.json"), project_status)
        .context("write project_status.json")?;
    Ok(())
}

pub async fn start_server(data_dir: &Path) -> Result<RunningService<RoleClient, ()>> {
    let bin = locate_windfarm_mcp_bin()?;
    let mut cmd = Command::new(bin);
    cmd.env("WINDFARM_DATA_DIR", data_dir);
    cmd.env_remove("WINDFARM_CONFIG");
    cmd.env_remove("WINDFARM_PROMPTS_DIR");
    cmd.env("RUST_LOG", "warn");

    let transport = TokioChildProcess::new(cmd).context("spawn mcp server")?;
    tokio::time::timeout(Duration::from_secs(10), ().serve(transport))
        .await
        .context("timeout starting MCP server")?
        .context("initialize MCP session")
}

pub async fn call(
    service: &RunningService<RoleClient, ()>,
    name: &'static str,
    arguments: serde_json::Value,
) -> Result<CallToolResult> {
    let arguments = match arguments {
        serde_json::Value::Object(map) => Some(map),
        serde_json::Value::Null => None,
        other => anyhow::bail!("tool arguments must be an object, got {other}"),
    };
    let result = tokio::time::timeout(
        Duration::from_secs(30),
        service.call_tool(CallToolRequestParam {
            name: name.into(),
            arguments,
        }),
    )
    .await
    .with_context(|| format!("timeout calling {name}"))??;
    Ok(result)
}

pub fn structured(result: &CallToolResult) -> Result<&serde_json::Value> {
    result
        .structured_content
        .as_ref()
        .context("missing structured_content")
}
