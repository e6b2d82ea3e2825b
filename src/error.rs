//! Error type shared by the loader and the route filter.

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum TicketError {
    /// The ticket document could not be opened or read.
    #[error("cannot read ticket document {}: {source}", .path.display())]
    Document {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The document is not JSON, or lacks the expected `tickets` structure.
    #[error("malformed ticket document: {0}")]
    Format(#[from] serde_json::Error),

    /// A departure or arrival time is not in `H:MM` form.
    #[error("invalid {field} '{value}', expected H:MM")]
    TimeFormat { field: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, TicketError>;
