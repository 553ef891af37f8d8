// Per-tool dispatch functions used by the MCP tool router.

pub(super) mod analysis;
pub(super) mod data;
pub(super) mod error;
pub(super) mod status;

mod tool_router;

pub(super) fn build_tool_router() -> rmcp::handler::server::tool::ToolRouter<super::WindFarmService>
{
    tool_router::build_tool_router()
}
