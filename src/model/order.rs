//! Submitted orders.
//!
//! An [`OrderPayload`] is what a session hands to the order service at checkout.
//! The service stores it as an [`Order`], stamping an id, the amount due and the
//! creation time.

use crate::model::{LineItem, MemberId, PaymentMethod};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// The order submission body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPayload {
    pub items: Vec<LineItem>,
    pub payment_method: PaymentMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_id: Option<MemberId>,
    pub discount: u64,
    pub used_points: u64,
    pub total_price: u64,
}

impl OrderPayload {
    /// Total minus discount minus points, never below zero.
    pub fn amount_due(&self) -> u64 {
        self.total_price
            .saturating_sub(self.discount)
            .saturating_sub(self.used_points)
    }
}

/// A stored order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub items: Vec<LineItem>,
    pub payment_method: PaymentMethod,
    pub member_id: Option<MemberId>,
    pub discount: u64,
    pub used_points: u64,
    pub total_price: u64,
    pub amount_due: u64,
    pub created_at: DateTime<Utc>,
}

impl Order {
    pub fn from_payload(id: OrderId, payload: OrderPayload, created_at: DateTime<Utc>) -> Self {
        let amount_due = payload.amount_due();
        Self {
            id,
            items: payload.items,
            payment_method: payload.payment_method,
            member_id: payload.member_id,
            discount: payload.discount,
            used_points: payload.used_points,
            total_price: payload.total_price,
            amount_due,
            created_at,
        }
    }
}

/// What a register gets back from a successful checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderConfirmation {
    pub order_id: OrderId,
    pub total_price: u64,
    pub discount: u64,
    pub used_points: u64,
    pub amount_due: u64,
    pub earned_points: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(total: u64, discount: u64, points: u64) -> OrderPayload {
        OrderPayload {
            items: vec![LineItem::new("burger1", total, 1)],
            payment_method: PaymentMethod::from("card"),
            member_id: None,
            discount,
            used_points: points,
            total_price: total,
        }
    }

    #[test]
    fn amount_due_subtracts_discount_and_points() {
        assert_eq!(payload(12000, 1000, 500).amount_due(), 10500);
        assert_eq!(payload(1000, 800, 500).amount_due(), 0);
    }

    #[test]
    fn payload_serialises_in_camel_case() {
        let json = serde_json::to_value(payload(5000, 0, 0)).unwrap();
        assert_eq!(json["paymentMethod"], "card");
        assert_eq!(json["totalPrice"], 5000);
        assert_eq!(json["usedPoints"], 0);
        assert!(json.get("memberId").is_none());
    }
}
