//! Error handling utilities for MCP server

use cram_core::{CramError, ErrorKind};
use rmcp::ErrorData;

/// Converts planner errors to MCP errors.
///
/// Bad input and unknown ids are the caller's fault and map to
/// `invalid_params`; storage and internal failures map to `internal_error`.
pub fn to_mcp_error(message: &str, error: &CramError) -> ErrorData {
    let text = format!("{message}: {error}");
    match error.kind() {
        ErrorKind::Validation | ErrorKind::NotFound => ErrorData::invalid_params(text, None),
        ErrorKind::StorageUnavailable | ErrorKind::Internal => {
            ErrorData::internal_error(text, None)
        }
    }
}
