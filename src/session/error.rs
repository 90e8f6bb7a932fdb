use thiserror::Error;

/// Rejected order session mutations. The session is unchanged whenever one is returned.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SessionError {
    /// Items are added with at least one unit.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),

    #[error("Discount {discount} exceeds order total {total}")]
    DiscountExceedsTotal { discount: u64, total: u64 },

    #[error("Cannot use {requested} points, member has {available}")]
    PointsExceedBalance { requested: u64, available: u64 },

    /// Points may cover at most the total after the discount.
    #[error("Cannot use {points} points, only {payable} left to pay")]
    PointsExceedAmountDue { points: u64, payable: u64 },

    #[error("Points can only be used with a linked member")]
    NoMemberLinked,

    #[error("Order amount overflow")]
    AmountOverflow,

    #[error("Order has no items")]
    EmptyOrder,

    #[error("No payment method selected")]
    NoPaymentMethod,
}
