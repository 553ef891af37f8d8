use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    windfarm_mcp::main_entry().await
}
