//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).

pub mod actor_client;
pub mod coupon_client;
pub mod member_client;
pub mod menu_client;
pub mod order_client;
pub mod session_client;

pub use actor_client::*;
pub use coupon_client::*;
pub use member_client::*;
pub use menu_client::*;
pub use order_client::*;
pub use session_client::*;
