//! JSON loader for ticket documents.

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{Result, TicketError};

/// A ticket exactly as it appears in the source document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawTicket {
    pub origin_name: String,
    pub destination_name: String,
    pub carrier: String,
    pub price: i64,
    pub departure_time: String,
    pub arrival_time: String,
}

#[derive(Deserialize)]
struct TicketDocument {
    tickets: Vec<RawTicket>,
}

/// Decodes a JSON ticket document from raw bytes.
///
/// # Errors
///
/// Returns [`TicketError::Format`] if the bytes are not JSON, the top-level
/// `tickets` array is missing, or any ticket lacks a required field.
pub fn parse_document(bytes: &[u8]) -> Result<Vec<RawTicket>> {
    let document: TicketDocument = serde_json::from_slice(bytes)?;
    Ok(document.tickets)
}

/// Reads the file at `path` and decodes every ticket in it.
#[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_tickets(path: impl AsRef<Path>) -> Result<Vec<RawTicket>> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| TicketError::Document {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(bytes = bytes.len(), "Ticket document read, parsing");

    let tickets = parse_document(&bytes)?;
    debug!(ticket_count = tickets.len(), "Ticket document parsed");
    Ok(tickets)
}
