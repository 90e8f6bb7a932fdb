//! [`ActorEntity`] implementation for [`OrderSession`].
//!
//! The session rules live in [`crate::session`]; this module resolves what the
//! rules need from collaborators (menu prices, member balances, coupon discounts)
//! and runs checkout across the member and order actors.

use super::actions::{SessionAction, SessionActionResult};
use super::services::SessionServices;
use super::CheckoutError;
use crate::clients::ActorClient;
use crate::framework::ActorEntity;
use crate::member_actor::MemberError;
use crate::model::{MemberId, OrderConfirmation};
use crate::session::{OrderSession, SessionError, SessionId};
use async_trait::async_trait;
use tracing::{error, info, warn};

/// Payload for opening a session on a register.
#[derive(Debug, Clone)]
pub struct SessionOpen {
    pub register: String,
}

impl OrderSession {
    /// Balance available to the linked member for `points`, or 0 when there is
    /// nothing to resolve.
    async fn available_points(
        &self,
        points: u64,
        ctx: &SessionServices,
    ) -> Result<u64, CheckoutError> {
        match self.current_member() {
            Some(member) if points > 0 => Ok(ctx.members.member(member).await?.points),
            _ => Ok(0),
        }
    }

    /// Submits the order and settles loyalty points.
    ///
    /// Points are redeemed before the order is submitted and credited back if the
    /// submission fails. Accrual happens after the order exists; if it fails the
    /// order stands and the confirmation reports no earned points.
    async fn checkout(&mut self, ctx: &SessionServices) -> Result<OrderConfirmation, CheckoutError> {
        let payload = self.checkout_payload()?;

        let redeemed: Option<(MemberId, u64)> = match payload.member_id {
            Some(member) if payload.used_points > 0 => {
                ctx.members
                    .redeem_points(member, payload.used_points)
                    .await?;
                Some((member, payload.used_points))
            }
            _ => None,
        };

        let order_id = match ctx.orders.create_order(payload.clone()).await {
            Ok(id) => id,
            Err(e) => {
                if let Some((member, points)) = redeemed {
                    if let Err(refund) = ctx.members.accrue_points(member, points).await {
                        error!(%member, points, error = %refund, "Refund of redeemed points failed");
                    }
                }
                return Err(e.into());
            }
        };

        let amount_due = payload.amount_due();
        let mut earned_points = 0;
        if let Some(member) = payload.member_id {
            let points = ctx.policy.points_for(amount_due);
            if points > 0 {
                match ctx.members.accrue_points(member, points).await {
                    Ok(_) => earned_points = points,
                    Err(e) => warn!(%member, points, error = %e, "Point accrual failed"),
                }
            }
        }

        self.clear_order();
        info!(session = %self.id(), %order_id, amount_due, earned_points, "Checked out");

        Ok(OrderConfirmation {
            order_id,
            total_price: payload.total_price,
            discount: payload.discount,
            used_points: payload.used_points,
            amount_due,
            earned_points,
        })
    }
}

#[async_trait]
impl ActorEntity for OrderSession {
    type Id = SessionId;
    type Create = SessionOpen;
    type Update = (); // Sessions change only through actions
    type Action = SessionAction;
    type ActionResult = SessionActionResult;
    type Context = SessionServices;
    type Error = CheckoutError;

    fn from_create_params(id: SessionId, params: SessionOpen) -> Result<Self, CheckoutError> {
        Ok(OrderSession::new(id, params.register))
    }

    async fn on_update(&mut self, _update: (), _ctx: &SessionServices) -> Result<(), CheckoutError> {
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: SessionAction,
        ctx: &SessionServices,
    ) -> Result<SessionActionResult, CheckoutError> {
        match action {
            SessionAction::AddItem(item) => self.add_item(item)?,
            SessionAction::AddMenuItem {
                menu_item,
                quantity,
                selection,
            } => {
                if quantity == 0 {
                    return Err(SessionError::InvalidQuantity(0).into());
                }
                let line = ctx
                    .menu
                    .price_selection(menu_item, quantity, selection)
                    .await?;
                self.add_item(line)?;
            }
            SessionAction::RemoveItem(item) => {
                self.remove_item(&item);
            }
            SessionAction::UpdateQuantity { item, quantity } => {
                self.update_quantity(&item, quantity)?
            }
            SessionAction::SetPaymentMethod(method) => {
                if let Some(method) = &method {
                    if !ctx.accepts(method) {
                        return Err(CheckoutError::UnknownPaymentMethod(method.clone()));
                    }
                }
                self.set_payment_method(method);
            }
            SessionAction::SetMember(member) => {
                if let Some(member) = member {
                    ctx.members.member(member).await?;
                }
                self.set_current_member(member);
            }
            SessionAction::LinkMemberByPhone(phone) => {
                let member = ctx
                    .members
                    .find_by_phone(&phone)
                    .await?
                    .ok_or(MemberError::NotFound(phone))?;
                self.set_current_member(Some(member.id));
                return Ok(SessionActionResult::Member(Some(member)));
            }
            SessionAction::CurrentMember => {
                let member = match self.current_member() {
                    Some(id) => ctx.members.get(id).await?,
                    None => None,
                };
                return Ok(SessionActionResult::Member(member));
            }
            SessionAction::SetTotalDiscount(amount) => self.set_total_discount(amount)?,
            SessionAction::ApplyCoupon(code) => {
                let coupon = ctx.coupons.redeemable(&code).await?;
                self.set_total_discount(coupon.discount)?;
            }
            SessionAction::SetUsedPoints(points) => {
                let available = self.available_points(points, ctx).await?;
                self.set_used_points(points, available)?;
            }
            SessionAction::Clear => self.clear_order(),
            SessionAction::Checkout => {
                return self
                    .checkout(ctx)
                    .await
                    .map(SessionActionResult::Confirmation);
            }
        }
        Ok(SessionActionResult::Snapshot(self.snapshot()))
    }
}
