//! MCP tool surface.
//!
//! Schemas, argument parsing, question builders and dispatch live in separate submodules;
//! all domain logic is delegated to `windfarm-router` and `windfarm-data`.

mod args;
pub(crate) mod catalog;
mod dispatch;
mod queries;
mod schemas;
mod util;

pub use dispatch::WindFarmService;
