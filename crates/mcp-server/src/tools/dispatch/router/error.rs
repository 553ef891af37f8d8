use rmcp::model::{CallToolResult, Content};
use serde::Serialize;
use serde_json::{json, Value};
use windfarm_protocol::{ErrorEnvelope, ToolNextAction};

use crate::tools::args::ArgError;

/// JSON text plus the same value as structured content.
pub(in crate::tools::dispatch) fn json_result<T: Serialize>(payload: &T, tool: &str) -> CallToolResult {
    match serde_json::to_value(payload) {
        Ok(value) => value_result(value),
        Err(err) => internal_error(format!("failed to serialize {tool} result ({err})")),
    }
}

pub(in crate::tools::dispatch) fn value_result(value: Value) -> CallToolResult {
    let mut result = CallToolResult::success(vec![Content::text(value.to_string())]);
    result.structured_content = Some(value);
    result
}

pub(in crate::tools::dispatch) fn tool_error_envelope(error: ErrorEnvelope) -> CallToolResult {
    let payload = json!({ "error": error });
    let mut result = CallToolResult::error(vec![Content::text(payload.to_string())]);
    result.structured_content = Some(payload);
    result
}

pub(in crate::tools::dispatch) fn invalid_argument(err: &ArgError) -> CallToolResult {
    log::debug!("Rejected tool arguments: {err}");
    tool_error_envelope(err.envelope().with_next_action(ToolNextAction {
        tool: "server_status".to_string(),
        args: json!({}),
        reason: "lists supported analyses and tools".to_string(),
    }))
}

pub(in crate::tools::dispatch) fn internal_error(message: impl Into<String>) -> CallToolResult {
    let message = message.into();
    log::error!("Tool failed: {message}");
    tool_error_envelope(ErrorEnvelope::new("internal", message))
}

/// Run blocking table reads off the async runtime.
pub(in crate::tools::dispatch) async fn blocking<T, F>(work: F) -> Result<T, CallToolResult>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|err| internal_error(format!("worker task failed: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_is_nested_under_error() {
        let result = invalid_argument(&ArgError::Empty("query"));
        assert_eq!(result.is_error, Some(true));
        let value = result.structured_content.expect("structured content");
        assert_eq!(value["error"]["code"], "invalid_request");
        assert_eq!(value["error"]["message"], "`query` must not be empty");
        assert_eq!(value["error"]["next_actions"][0]["tool"], "server_status");
    }

    #[test]
    fn success_mirrors_text_and_structured_content() {
        let result = value_result(json!({"status": "ok"}));
        assert_eq!(result.is_error, Some(false));
        assert_eq!(result.structured_content, Some(json!({"status": "ok"})));
    }
}
