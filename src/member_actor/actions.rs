//! Custom actions for the Member actor.

/// Point balance movements. Profile fields change through `Update`.
#[derive(Debug, Clone)]
pub enum MemberAction {
    /// Spends points at checkout.
    ///
    /// # Errors
    /// Fails with `InsufficientPoints` if the balance is lower than the amount.
    RedeemPoints(u64),
    /// Credits points earned on a purchase, or refunds a failed redemption.
    AccruePoints(u64),
}

/// Results from MemberActions - variants match 1:1 with MemberAction.
/// Both carry the balance after the movement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberActionResult {
    RedeemPoints(u64),
    AccruePoints(u64),
}
