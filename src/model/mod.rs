//! Plain data records shared by the actors and the order session.

pub mod coupon;
pub mod line_item;
pub mod member;
pub mod menu;
pub mod order;
pub mod payment;
pub mod report;

pub use coupon::*;
pub use line_item::*;
pub use member::*;
pub use menu::*;
pub use order::*;
pub use payment::*;
pub use report::*;
