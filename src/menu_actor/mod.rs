//! # Menu Actor
//!
//! Owns the menu catalog: the items a register can sell, their categories and
//! their priced options. Admin screens create, update and delete items; sessions
//! ask it to price a selection when an item is added to a cart.
//!
//! Has no dependencies (`Context = ()`). Ids start at 100 like the catalog codes
//! printed on receipts.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::MenuClient;
use crate::framework::ResourceActor;
use crate::model::{MenuItem, MenuItemId};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

/// First id handed out by a fresh catalog.
pub const FIRST_MENU_ITEM_ID: u32 = 100;

/// Creates a new Menu actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<MenuItem>, MenuClient) {
    let menu_id_counter = Arc::new(AtomicU32::new(FIRST_MENU_ITEM_ID));
    let next_menu_id = move || MenuItemId(menu_id_counter.fetch_add(1, Ordering::SeqCst));

    let (actor, generic_client) = ResourceActor::new(buffer_size, next_menu_id);
    let client = MenuClient::new(generic_client);

    (actor, client)
}
