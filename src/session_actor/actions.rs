//! Custom actions for the Session actor.
//!
//! Every cart operation a register performs is an action on its session. Each runs
//! against a working copy of the session that is stored only if the action
//! succeeds.

use crate::model::{
    LineItem, LineItemId, Member, MemberId, MenuItemId, OptionSelection, OrderConfirmation,
    PaymentMethod,
};
use crate::session::SessionSnapshot;

#[derive(Debug, Clone)]
pub enum SessionAction {
    /// Adds a line item as given, price included.
    AddItem(LineItem),
    /// Adds a catalog item, priced by the menu at the time of the request.
    AddMenuItem {
        menu_item: MenuItemId,
        quantity: u32,
        selection: OptionSelection,
    },
    RemoveItem(LineItemId),
    /// Zero removes the line.
    UpdateQuantity { item: LineItemId, quantity: u32 },
    /// Must be one of the register's accepted methods; `None` clears the choice.
    SetPaymentMethod(Option<PaymentMethod>),
    /// Links a member by id after checking it exists; `None` unlinks.
    SetMember(Option<MemberId>),
    /// Looks the member up by phone and links it.
    LinkMemberByPhone(String),
    /// Resolves the linked member to its current record.
    CurrentMember,
    SetTotalDiscount(u64),
    /// Applies an active coupon's discount as the session's total discount.
    ApplyCoupon(String),
    /// Checked against the linked member's current balance.
    SetUsedPoints(u64),
    Clear,
    /// Submits the order, settles points and clears the session.
    Checkout,
}

#[derive(Debug, Clone)]
pub enum SessionActionResult {
    /// The session after the action.
    Snapshot(SessionSnapshot),
    /// Answer to `LinkMemberByPhone` and `CurrentMember`.
    Member(Option<Member>),
    /// Answer to `Checkout`.
    Confirmation(OrderConfirmation),
}
