//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing` crate.
//! Every actor logs its lifecycle and each request with an `entity_type` field, and the
//! clients open a span per call, so one checkout reads as a single hierarchy.
//!
//! ## Configuration
//!
//! - `RUST_LOG` takes precedence; otherwise the configured level applies
//! - `compact` (default) hides the module prefix (`with_target(false)`), since
//!   `entity_type` already says which actor is speaking
//! - `json` emits one object per event with the current span attached
//!
//! ## Usage Examples
//!
//! ```bash
//! # Compact logs (default)
//! RUST_LOG=info cargo run
//!
//! # Show full payloads with debug logs
//! RUST_LOG=debug cargo run
//!
//! # Only the framework's request loop
//! RUST_LOG=order_session::framework=debug cargo run
//!
//! # Machine-readable
//! LOG_FORMAT=json cargo run
//! ```
//!
//! ## Checkout Trace Example
//!
//! **With `RUST_LOG=info`** (compact):
//!
//! ```text
//! INFO Action ok entity_type="Member" id=member_1
//! INFO checkout: Sending create_order to actor
//! INFO Created entity_type="Order" id=order_1 size=1
//! INFO Action ok entity_type="Member" id=member_1
//! INFO Checked out session=session_1 order_id=order_1 amount_due=10500 earned_points=105
//! INFO Action ok entity_type="OrderSession" id=session_1
//! ```
//!
//! The first member action redeems points, the second accrues the points earned.

use crate::config::LogFormat;
use tracing_subscriber::EnvFilter;

pub fn setup_tracing(format: LogFormat, default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false); // Don't show module paths - we use entity_type instead

    match format {
        LogFormat::Compact => builder.compact().init(),
        LogFormat::Json => builder.json().with_current_span(true).init(),
    }
}
