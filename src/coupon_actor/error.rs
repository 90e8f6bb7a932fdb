//! Error types for the Coupon actor.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CouponError {
    #[error("Coupon not found: {0}")]
    NotFound(String),

    /// The coupon exists but has been switched off.
    #[error("Coupon is inactive: {0}")]
    Inactive(String),

    #[error("Coupon validation error: {0}")]
    ValidationError(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for CouponError {
    fn from(msg: String) -> Self {
        CouponError::ActorCommunicationError(msg)
    }
}
