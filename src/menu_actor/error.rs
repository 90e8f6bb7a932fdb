//! Error types for the Menu actor.

use thiserror::Error;

/// Errors that can occur during menu catalog operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MenuError {
    /// The requested menu item was not found.
    #[error("Menu item not found: {0}")]
    NotFound(String),

    /// A selection referenced an option the item does not offer.
    #[error("Unknown option: {0}")]
    UnknownOption(String),

    /// The base price plus the chosen options does not fit in an amount.
    #[error("Price overflow for menu item {0}")]
    PriceOverflow(String),

    /// The menu item data provided is invalid.
    #[error("Menu validation error: {0}")]
    ValidationError(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for MenuError {
    fn from(msg: String) -> Self {
        MenuError::ActorCommunicationError(msg)
    }
}
