use super::CouponError;
use crate::framework::ActorEntity;
use crate::model::{normalize_code, Coupon, CouponCreate, CouponId, CouponUpdate};
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Coupon {
    type Id = CouponId;
    type Create = CouponCreate;
    type Update = CouponUpdate;
    type Action = (); // No custom actions
    type ActionResult = ();
    type Context = ();
    type Error = CouponError;

    fn from_create_params(id: CouponId, params: CouponCreate) -> Result<Self, CouponError> {
        let code = normalize_code(&params.code);
        if code.is_empty() {
            return Err(CouponError::ValidationError("code must not be empty".into()));
        }
        Ok(Self {
            id,
            code,
            discount: params.discount,
            active: params.active,
        })
    }

    async fn on_update(&mut self, update: CouponUpdate, _ctx: &()) -> Result<(), CouponError> {
        if let Some(discount) = update.discount {
            self.discount = discount;
        }
        if let Some(active) = update.active {
            self.active = active;
        }
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), CouponError> {
        Ok(())
    }
}
