//! Cross-cutting error types for sig2moq.
//!
//! Domain-specific errors (`ParserError`, `ConfigError`) are defined in their
//! respective crates. Only the CLI binary converges them into `anyhow::Error`.

use thiserror::Error;

use crate::delivery::DeliveryError;

/// Errors that can be raised by any sig2moq crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A member description failed validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// An action was requested that the member does not offer.
    #[error("Action '{action}' is not offered for {member}")]
    ActionNotOffered { action: String, member: String },

    /// The finished snippet could not be delivered.
    #[error(transparent)]
    Delivery(#[from] DeliveryError),
}
