//! Error handling utilities for the MCP server

use rmcp::ErrorData;
use simmer_core::CookError;

/// Convert a core error into an MCP error.
///
/// Errors caused by the request itself (unknown or ambiguous IDs, invalid
/// drafts, edits to the recipe being cooked) are reported as invalid
/// parameters; everything else is an internal error.
pub fn to_mcp_error(message: &str, error: &CookError) -> ErrorData {
    let text = format!("{message}: {error}");
    match error {
        CookError::RecipeNotFound { .. }
        | CookError::AmbiguousRecipe { .. }
        | CookError::RecipeInUse { .. }
        | CookError::InvalidInput { .. } => ErrorData::invalid_params(text, None),
        _ => ErrorData::internal_error(text, None),
    }
}

#[cfg(test)]
mod tests {
    use rmcp::model::ErrorCode;

    use super::*;

    #[test]
    fn test_request_errors_are_invalid_params() {
        let error = to_mcp_error(
            "Cannot delete recipe",
            &CookError::RecipeInUse {
                id: "r1".to_string(),
            },
        );
        assert_eq!(error.code, ErrorCode::INVALID_PARAMS);
        assert!(error.message.contains("Cannot delete recipe"));
        assert!(error.message.contains("r1"));
    }

    #[test]
    fn test_store_errors_are_internal() {
        let error = to_mcp_error(
            "Failed to load recipes",
            &CookError::Configuration {
                message: "broken".to_string(),
            },
        );
        assert_eq!(error.code, ErrorCode::INTERNAL_ERROR);
    }
}
