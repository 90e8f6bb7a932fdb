//! # Session Actor
//!
//! Hosts every open [`OrderSession`], one per register, and is the only way to
//! reach them. Requests from all registers queue on one channel and are applied
//! one at a time, so a session is never mutated concurrently and no lock guards it.
//!
//! ## Dependencies
//!
//! The actor's context is [`SessionServices`]: clients for the menu, member,
//! coupon and order actors plus the accepted payment methods and the loyalty
//! policy. The session actor calls them; none of them call back, so shutting the
//! system down by dropping clients always terminates.
//!
//! ## Failure atomicity
//!
//! Actions run on a working copy of the session (see
//! [`ResourceActor`](crate::framework::ResourceActor)). A failed action, even one
//! that fails after a collaborator call, leaves the stored session untouched.

mod actions;
pub mod entity;
pub mod error;
mod services;

pub use actions::*;
pub use entity::SessionOpen;
pub use error::*;
pub use services::*;

use crate::clients::SessionClient;
use crate::framework::ResourceActor;
use crate::session::{OrderSession, SessionId};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

/// Creates a new Session actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<OrderSession>, SessionClient) {
    let session_id_counter = Arc::new(AtomicU32::new(1));
    let next_session_id = move || SessionId(session_id_counter.fetch_add(1, Ordering::SeqCst));

    let (actor, generic_client) = ResourceActor::new(buffer_size, next_session_id);
    let client = SessionClient::new(generic_client);

    (actor, client)
}
