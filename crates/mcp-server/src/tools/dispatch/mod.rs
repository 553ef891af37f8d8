//! MCP tool dispatch for the wind farm analytics server.

use rmcp::handler::server::tool::ToolRouter;
use std::sync::Arc;
use windfarm_router::QueryRouter;

mod router;
mod service;

/// Wind Farm Analytics MCP Service
#[derive(Clone)]
pub struct WindFarmService {
    /// Classifier, assembler and data reader shared by every connection
    router: Arc<QueryRouter>,
    /// Tool router
    tool_router: ToolRouter<Self>,
}
