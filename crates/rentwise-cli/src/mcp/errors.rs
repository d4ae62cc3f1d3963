//! Error handling utilities for MCP server

use rentwise_core::RentalError;
use rmcp::ErrorData;

/// Converts an engine error into an MCP error.
///
/// Problems the caller can fix (bad input, incomplete booking, illegal
/// transition, missing privileges) become `invalid_params`; unknown
/// reservations become `resource_not_found`; everything else is internal.
pub fn to_mcp_error(message: &str, error: &RentalError) -> ErrorData {
    let text = format!("{message}: {error}");
    match error {
        RentalError::InvalidInput { .. }
        | RentalError::IncompleteStep { .. }
        | RentalError::InvalidTransition { .. }
        | RentalError::Forbidden { .. } => ErrorData::invalid_params(text, None),
        RentalError::ReservationNotFound { .. } => ErrorData::resource_not_found(text, None),
        _ => ErrorData::internal_error(text, None),
    }
}
