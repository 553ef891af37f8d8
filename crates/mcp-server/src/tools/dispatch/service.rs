use super::{router, WindFarmService};
use crate::tools::catalog::INSTRUCTIONS;
use rmcp::model::{Implementation, ServerCapabilities, ServerInfo};
use rmcp::{tool_handler, ServerHandler};
use std::sync::Arc;
use windfarm_router::{QueryRouter, Settings};

impl WindFarmService {
    pub fn new(settings: &Settings) -> windfarm_router::Result<Self> {
        Ok(Self::from_router(QueryRouter::new(settings)?))
    }

    pub fn from_router(router: QueryRouter) -> Self {
        Self {
            router: Arc::new(router),
            tool_router: router::build_tool_router(),
        }
    }

    pub(super) fn query_router(&self) -> &Arc<QueryRouter> {
        &self.router
    }
}

#[tool_handler]
impl ServerHandler for WindFarmService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.into()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            ..Default::default()
        }
    }
}
