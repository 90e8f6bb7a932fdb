//! # System Lifecycle & Orchestration
//!
//! Starting, wiring, seeding and shutting down the actors.
//!
//! - [`RegisterSystem`]: spawns every actor and injects the Session actor's
//!   dependencies through `run(context)`
//! - [`seed`]: start-up catalog, member and coupon data
//! - [`tracing`](self::tracing): subscriber set-up for the binary

pub mod register_system;
pub mod seed;
pub mod tracing;

pub use register_system::*;
pub use seed::{SeedData, SeedError, SeedSummary};
