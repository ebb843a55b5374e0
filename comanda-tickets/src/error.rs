//! Error types for ticket ingestion

use comanda_printer::PrintError;
use thiserror::Error;

/// Errors raised while loading options or ticket payloads
///
/// Rendering never fails; only parsing caller-supplied JSON does.
#[derive(Debug, Error)]
pub enum TicketError {
    /// Payload is not valid JSON for the expected type
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Printer-level error (configuration, logo)
    #[error(transparent)]
    Print(#[from] PrintError),
}

pub type TicketResult<T> = Result<T, TicketError>;
