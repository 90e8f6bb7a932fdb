//! # Member Actor
//!
//! Loyalty members: lookup by phone number at the register, registration, and
//! the point balance that checkout redeems from and accrues to.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Member`]
//! - [`error`] - [`MemberError`] type for type-safe error handling
//! - [`MemberAction`] - point redemption and accrual
//! - [`new()`] - Factory function that creates the actor and client

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::MemberClient;
use crate::framework::ResourceActor;
use crate::model::{Member, MemberId};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

/// Creates a new Member actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Member>, MemberClient) {
    let member_id_counter = Arc::new(AtomicU32::new(1));
    let next_member_id = move || MemberId(member_id_counter.fetch_add(1, Ordering::SeqCst));

    let (actor, generic_client) = ResourceActor::new(buffer_size, next_member_id);
    let client = MemberClient::new(generic_client);

    (actor, client)
}
