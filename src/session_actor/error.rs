//! Error types for the Session actor.

use crate::coupon_actor::CouponError;
use crate::member_actor::MemberError;
use crate::menu_actor::MenuError;
use crate::model::PaymentMethod;
use crate::order_actor::OrderError;
use crate::session::SessionError;
use thiserror::Error;

/// Errors from register operations on a session.
///
/// Session rule violations and collaborator failures are wrapped unchanged, so a
/// caller can match e.g. `CheckoutError::Session(SessionError::DiscountExceedsTotal { .. })`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CheckoutError {
    /// The requested session was not found.
    #[error("Session not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Menu(#[from] MenuError),

    #[error(transparent)]
    Member(#[from] MemberError),

    #[error(transparent)]
    Coupon(#[from] CouponError),

    #[error(transparent)]
    Order(#[from] OrderError),

    /// The register does not accept this payment method.
    #[error("Unknown payment method: {0}")]
    UnknownPaymentMethod(PaymentMethod),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for CheckoutError {
    fn from(msg: String) -> Self {
        CheckoutError::ActorCommunicationError(msg)
    }
}
