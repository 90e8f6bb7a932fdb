//! Discount coupons, looked up by code when a cashier applies one to a session.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::CouponClient;
use crate::framework::ResourceActor;
use crate::model::{Coupon, CouponId};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

/// Creates a new Coupon actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Coupon>, CouponClient) {
    let coupon_id_counter = Arc::new(AtomicU32::new(1));
    let next_coupon_id = move || CouponId(coupon_id_counter.fetch_add(1, Ordering::SeqCst));

    let (actor, generic_client) = ResourceActor::new(buffer_size, next_coupon_id);
    let client = CouponClient::new(generic_client);

    (actor, client)
}
