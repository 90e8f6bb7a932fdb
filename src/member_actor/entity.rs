//! [`ActorEntity`] implementation for [`Member`].
//!
//! Phone numbers are normalised here, on create and on update, so every stored
//! member can be matched by digits alone. Uniqueness across members is checked
//! by [`MemberClient::register_member`](crate::clients::MemberClient::register_member),
//! since a single entity cannot see its siblings.

use super::actions::{MemberAction, MemberActionResult};
use super::MemberError;
use crate::framework::ActorEntity;
use crate::model::{normalize_phone, Member, MemberCreate, MemberId, MemberUpdate};
use async_trait::async_trait;

fn validated_phone(phone: &str) -> Result<String, MemberError> {
    let digits = normalize_phone(phone);
    if digits.is_empty() {
        return Err(MemberError::ValidationError(format!(
            "phone number {phone:?} has no digits"
        )));
    }
    Ok(digits)
}

#[async_trait]
impl ActorEntity for Member {
    type Id = MemberId;
    type Create = MemberCreate;
    type Update = MemberUpdate;
    type Action = MemberAction;
    type ActionResult = MemberActionResult;
    type Context = ();
    type Error = MemberError;

    fn from_create_params(id: MemberId, params: MemberCreate) -> Result<Self, MemberError> {
        Ok(Self {
            id,
            name: params.name,
            phone: validated_phone(&params.phone)?,
            points: params.points,
        })
    }

    async fn on_update(&mut self, update: MemberUpdate, _ctx: &()) -> Result<(), MemberError> {
        if let Some(phone) = update.phone {
            self.phone = validated_phone(&phone)?;
        }
        if let Some(name) = update.name {
            self.name = name;
        }
        Ok(())
    }

    /// # Actions
    /// - `RedeemPoints`: Decrements the balance if it covers the amount
    /// - `AccruePoints`: Increments the balance
    async fn handle_action(
        &mut self,
        action: MemberAction,
        _ctx: &(),
    ) -> Result<MemberActionResult, MemberError> {
        match action {
            MemberAction::RedeemPoints(amount) => {
                if amount > self.points {
                    return Err(MemberError::InsufficientPoints {
                        requested: amount,
                        available: self.points,
                    });
                }
                self.points -= amount;
                Ok(MemberActionResult::RedeemPoints(self.points))
            }
            MemberAction::AccruePoints(amount) => {
                self.points = self.points.saturating_add(amount);
                Ok(MemberActionResult::AccruePoints(self.points))
            }
        }
    }
}
