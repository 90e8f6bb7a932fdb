//! Error types for the Member actor.

use thiserror::Error;

/// Errors that can occur during member operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MemberError {
    /// The requested member was not found.
    #[error("Member not found: {0}")]
    NotFound(String),

    /// Another member is already registered with this phone number.
    #[error("Member already exists with phone {0}")]
    AlreadyExists(String),

    /// The member does not hold enough points for the redemption.
    #[error("Insufficient points: requested {requested}, available {available}")]
    InsufficientPoints { requested: u64, available: u64 },

    /// The member data provided is invalid.
    #[error("Member validation error: {0}")]
    ValidationError(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for MemberError {
    fn from(msg: String) -> Self {
        MemberError::ActorCommunicationError(msg)
    }
}
