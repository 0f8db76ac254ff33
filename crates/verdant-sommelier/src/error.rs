//! Sommelier error types.

use thiserror::Error;

/// Errors a chat backend can raise.
///
/// These never reach the customer directly; [`crate::converse`] maps every
/// failure to the offline fallback message.
#[derive(Error, Debug)]
pub enum SommelierError {
    /// The backend could not be reached or returned a failure.
    #[error("Sommelier backend unavailable: {0}")]
    Unavailable(String),
}
