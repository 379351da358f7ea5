//! Cross-cutting error types.
//!
//! Transport and persistence errors live in their own crates (`ApiError` in
//! `gw-api`, `SessionError` in `gw-session`); they converge into `anyhow` in
//! the CLI.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// A lifecycle transition was attempted that is not allowed.
    #[error("Invalid state transition: {entity_type} {id} from {from} to {to}")]
    InvalidTransition {
        entity_type: String,
        id: String,
        from: String,
        to: String,
    },

    /// Data failed validation (format, range, required fields).
    #[error("Validation error: {0}")]
    Validation(String),
}
