//! # Order Session
//!
//! The cart state for one checkout attempt at one register: line items, the
//! selected payment method, the linked member, the applied discount and the
//! redeemed points.
//!
//! [`OrderSession`] is a plain synchronous value. Every mutation goes through a
//! validating method, and a method that returns an error leaves the session
//! exactly as it was. The total price is derived from the line items on every
//! read and is never stored.
//!
//! Exclusive access comes from `&mut self`. Shared access across tasks goes
//! through the session actor, which owns every open session and applies
//! requests one at a time.

mod error;

pub use error::*;

use crate::model::{LineItem, LineItemId, MemberId, OrderPayload, PaymentMethod};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(pub u32);

impl From<u32> for SessionId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "session_{}", self.0)
    }
}

/// Coarse progress of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    /// No line items.
    Empty,
    /// Has items, but cannot check out yet.
    Building,
    /// Every checkout precondition holds.
    CheckoutReady,
}

impl Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionState::Empty => write!(f, "empty"),
            SessionState::Building => write!(f, "building"),
            SessionState::CheckoutReady => write!(f, "checkout_ready"),
        }
    }
}

/// A consistent read-only view of a session, with every derived figure filled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub id: SessionId,
    pub register: String,
    pub items: Vec<LineItem>,
    pub total_price: u64,
    pub total_discount: u64,
    pub used_points: u64,
    pub amount_due: u64,
    pub payment_method: Option<PaymentMethod>,
    pub member_id: Option<MemberId>,
    pub state: SessionState,
    pub can_checkout: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSession {
    id: SessionId,
    register: String,
    order_list: Vec<LineItem>,
    selected_payment_method: Option<PaymentMethod>,
    current_member: Option<MemberId>,
    total_discount: u64,
    used_points: u64,
}

impl OrderSession {
    pub fn new(id: SessionId, register: impl Into<String>) -> Self {
        Self {
            id,
            register: register.into(),
            order_list: Vec::new(),
            selected_payment_method: None,
            current_member: None,
            total_discount: 0,
            used_points: 0,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn register(&self) -> &str {
        &self.register
    }

    /// Line items in the order they were first added.
    pub fn order_list(&self) -> &[LineItem] {
        &self.order_list
    }

    pub fn item(&self, id: &LineItemId) -> Option<&LineItem> {
        self.order_list.iter().find(|item| &item.id == id)
    }

    // --- Line items ---

    /// Adds `item.quantity` units.
    ///
    /// If a line with the same id exists its quantity grows and its price, name
    /// and options stay as first captured. Otherwise the item is appended.
    pub fn add_item(&mut self, item: LineItem) -> Result<(), SessionError> {
        if item.quantity == 0 {
            return Err(SessionError::InvalidQuantity(0));
        }

        let position = self.order_list.iter().position(|line| line.id == item.id);
        let unit_price = position.map_or(item.price, |i| self.order_list[i].price);
        let added = unit_price
            .checked_mul(u64::from(item.quantity))
            .ok_or(SessionError::AmountOverflow)?;
        self.total_price()
            .checked_add(added)
            .ok_or(SessionError::AmountOverflow)?;

        match position {
            Some(i) => {
                let line = &mut self.order_list[i];
                line.quantity = line
                    .quantity
                    .checked_add(item.quantity)
                    .ok_or(SessionError::AmountOverflow)?;
            }
            None => self.order_list.push(item),
        }
        Ok(())
    }

    /// Removes the line regardless of its quantity. Unknown ids are ignored.
    pub fn remove_item(&mut self, id: &LineItemId) -> Option<LineItem> {
        let position = self.order_list.iter().position(|line| &line.id == id)?;
        Some(self.order_list.remove(position))
    }

    /// Sets the quantity of an existing line. Zero removes the line; unknown ids are ignored.
    pub fn update_quantity(&mut self, id: &LineItemId, quantity: u32) -> Result<(), SessionError> {
        if quantity == 0 {
            self.remove_item(id);
            return Ok(());
        }
        let total = self.total_price();
        let Some(line) = self.order_list.iter_mut().find(|line| &line.id == id) else {
            return Ok(());
        };

        let current = line.subtotal().ok_or(SessionError::AmountOverflow)?;
        let next = line
            .price
            .checked_mul(u64::from(quantity))
            .ok_or(SessionError::AmountOverflow)?;
        (total - current)
            .checked_add(next)
            .ok_or(SessionError::AmountOverflow)?;

        line.quantity = quantity;
        Ok(())
    }

    /// Σ unit price × quantity over every line.
    pub fn total_price(&self) -> u64 {
        // add_item and update_quantity reject anything that would overflow.
        self.order_list
            .iter()
            .map(|line| line.subtotal().unwrap_or(u64::MAX))
            .fold(0u64, u64::saturating_add)
    }

    // --- Payment method ---

    pub fn set_payment_method(&mut self, method: Option<PaymentMethod>) {
        self.selected_payment_method = method;
    }

    pub fn selected_payment_method(&self) -> Option<&PaymentMethod> {
        self.selected_payment_method.as_ref()
    }

    // --- Member, discount and points ---

    /// Links or unlinks a member. Switching members drops any points redeemed for the previous one.
    pub fn set_current_member(&mut self, member: Option<MemberId>) {
        if self.current_member != member {
            self.used_points = 0;
        }
        self.current_member = member;
    }

    pub fn current_member(&self) -> Option<MemberId> {
        self.current_member
    }

    pub fn set_total_discount(&mut self, amount: u64) -> Result<(), SessionError> {
        let total = self.total_price();
        if amount > total {
            return Err(SessionError::DiscountExceedsTotal {
                discount: amount,
                total,
            });
        }
        self.total_discount = amount;
        Ok(())
    }

    pub fn total_discount(&self) -> u64 {
        self.total_discount
    }

    /// Redeems `points` against the linked member's `available` balance.
    ///
    /// The caller resolves `available` for the member returned by [`current_member`](Self::current_member).
    /// Points never pay for more than what is left after the discount.
    pub fn set_used_points(&mut self, points: u64, available: u64) -> Result<(), SessionError> {
        if points > 0 && self.current_member.is_none() {
            return Err(SessionError::NoMemberLinked);
        }
        if points > available {
            return Err(SessionError::PointsExceedBalance {
                requested: points,
                available,
            });
        }
        let payable = self.payable_before_points();
        if points > payable {
            return Err(SessionError::PointsExceedAmountDue { points, payable });
        }
        self.used_points = points;
        Ok(())
    }

    fn payable_before_points(&self) -> u64 {
        self.total_price().saturating_sub(self.total_discount)
    }

    pub fn used_points(&self) -> u64 {
        self.used_points
    }

    /// What the customer pays: total minus discount minus points, never below zero.
    ///
    /// Only a cart shrunk after points were set reaches zero by flooring; checkout refuses it.
    pub fn amount_due(&self) -> u64 {
        self.total_price()
            .saturating_sub(self.total_discount)
            .saturating_sub(self.used_points)
    }

    // --- Lifecycle ---

    /// Resets every order field at once. The session id and register are kept.
    pub fn clear_order(&mut self) {
        *self = Self::new(self.id, std::mem::take(&mut self.register));
    }

    pub fn state(&self) -> SessionState {
        if self.order_list.is_empty() {
            SessionState::Empty
        } else if self.can_checkout() {
            SessionState::CheckoutReady
        } else {
            SessionState::Building
        }
    }

    /// True iff there is at least one item, a payment method is selected and the
    /// discount still fits within the total.
    pub fn can_checkout(&self) -> bool {
        self.checkout_payload().is_ok()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            id: self.id,
            register: self.register.clone(),
            items: self.order_list.clone(),
            total_price: self.total_price(),
            total_discount: self.total_discount,
            used_points: self.used_points,
            amount_due: self.amount_due(),
            payment_method: self.selected_payment_method.clone(),
            member_id: self.current_member,
            state: self.state(),
            can_checkout: self.can_checkout(),
        }
    }

    /// The order submission body, or the first checkout precondition that fails.
    pub fn checkout_payload(&self) -> Result<OrderPayload, SessionError> {
        if self.order_list.is_empty() {
            return Err(SessionError::EmptyOrder);
        }
        let payment_method = self
            .selected_payment_method
            .clone()
            .ok_or(SessionError::NoPaymentMethod)?;
        let total = self.total_price();
        // Removing items after applying a discount can push the total below it.
        if self.total_discount > total {
            return Err(SessionError::DiscountExceedsTotal {
                discount: self.total_discount,
                total,
            });
        }
        let payable = self.payable_before_points();
        if self.used_points > payable {
            return Err(SessionError::PointsExceedAmountDue {
                points: self.used_points,
                payable,
            });
        }
        Ok(OrderPayload {
            items: self.order_list.clone(),
            payment_method,
            member_id: self.current_member,
            discount: self.total_discount,
            used_points: self.used_points,
            total_price: total,
        })
    }
}
