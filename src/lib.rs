//! # Order Session
//!
//! > **Point-of-sale order sessions on resource-oriented actors.**
//!
//! Cashiers build a cart, link a loyalty member, apply a discount or coupon,
//! redeem points, pick a payment method and check out. This crate owns the rules
//! that keep that cart consistent, and runs them inside a small actor system
//! built on Tokio.
//!
//! ## 🏗️ Design
//!
//! ### The core is a plain value
//! [`session::OrderSession`] is synchronous and has no I/O. Every mutation is a
//! validating method; a rejected mutation leaves the session unchanged. The cart
//! total is derived from the line items on every read.
//!
//! ### Everything else is an actor
//! Each resource type (menu items, members, coupons, orders, sessions) lives in its
//! own [`ResourceActor`](framework::ResourceActor). Requests queue on a channel and
//! are processed one at a time, so no state needs a lock. Many registers share one
//! Session actor and never see each other's half-applied changes.
//!
//! ### Type-safe errors
//! Each actor has one error enum. The framework returns it unchanged inside
//! [`FrameworkError::Entity`](framework::FrameworkError::Entity), and the Session
//! actor's [`CheckoutError`](session_actor::CheckoutError) wraps the collaborators'
//! errors with `#[from]`, so callers match on exact variants.
//!
//! ### Async context injection
//! The Session actor receives its collaborators' clients through `run(context)`,
//! after every actor has been created.
//!
//! ## 🗺️ Module Tour
//!
//! - [`session`]: the order session rules
//! - [`framework`]: generic actor, client, and test mocks
//! - [`menu_actor`], [`member_actor`], [`coupon_actor`], [`order_actor`]: collaborators
//! - [`session_actor`]: hosts sessions and runs checkout
//! - [`clients`]: typed wrappers registers and admin screens call
//! - [`lifecycle`]: [`RegisterSystem`](lifecycle::RegisterSystem), seed data, tracing
//! - [`model`]: records shared across actors
//! - [`config`]: command line and environment settings for the demo binary
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! RUST_LOG=info cargo run
//! cargo run -- --registers 4 --log-format json
//! ```

pub mod clients;
pub mod config;
pub mod coupon_actor;
pub mod framework;
pub mod lifecycle;
pub mod member_actor;
pub mod menu_actor;
pub mod model;
pub mod order_actor;
pub mod session;
pub mod session_actor;
