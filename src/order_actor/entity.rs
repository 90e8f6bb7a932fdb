//! [`ActorEntity`] implementation for [`Order`].
//!
//! Orders are immutable once stored. Creation re-validates the payload instead of
//! trusting the submitting session.

use super::OrderError;
use crate::framework::ActorEntity;
use crate::model::{Order, OrderId, OrderPayload};
use async_trait::async_trait;
use chrono::Utc;

fn validate(payload: &OrderPayload) -> Result<(), OrderError> {
    let invalid = |msg: String| Err(OrderError::InvalidPayload(msg));

    if payload.items.is_empty() {
        return invalid("order has no items".into());
    }
    if let Some(item) = payload.items.iter().find(|item| item.quantity == 0) {
        return invalid(format!("item {} has quantity 0", item.id));
    }
    let sum = payload
        .items
        .iter()
        .try_fold(0u64, |acc, item| item.subtotal().and_then(|s| acc.checked_add(s)));
    match sum {
        Some(sum) if sum == payload.total_price => {}
        Some(sum) => {
            return invalid(format!(
                "total {} does not match items {sum}",
                payload.total_price
            ))
        }
        None => return invalid("item amounts overflow".into()),
    }
    if payload.discount > payload.total_price {
        return invalid(format!(
            "discount {} exceeds total {}",
            payload.discount, payload.total_price
        ));
    }
    let payable = payload.total_price - payload.discount;
    if payload.used_points > payable {
        return invalid(format!(
            "{} points exceed the {payable} left after discount",
            payload.used_points
        ));
    }
    if payload.used_points > 0 && payload.member_id.is_none() {
        return invalid("points used without a member".into());
    }
    Ok(())
}

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderPayload;
    type Update = (); // Orders are never edited
    type Action = (); // No custom actions
    type ActionResult = ();
    type Context = ();
    type Error = OrderError;

    fn from_create_params(id: OrderId, params: OrderPayload) -> Result<Self, OrderError> {
        validate(&params)?;
        Ok(Order::from_payload(id, params, Utc::now()))
    }

    async fn on_update(&mut self, _update: (), _ctx: &()) -> Result<(), OrderError> {
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), OrderError> {
        Ok(())
    }
}
