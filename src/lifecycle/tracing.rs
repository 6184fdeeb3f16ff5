//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter driven
//! by `RUST_LOG` (default `info`).
//!
//! ## What Gets Traced
//!
//! - **Order store**: actor start and shutdown, order creation, every action
//!   at `debug`
//! - **Tracking**: one `info` event per transition with `order_id` and
//!   `transition` fields
//! - **Email**: sends at `info`, skipped sends (channel disabled, no
//!   recipient) at `debug`, failures at `warn`
//! - **HTTP**: rejected nonces and unknown actions at `warn`
//!
//! ```bash
//! RUST_LOG=debug jadlog-tracking --demo
//! RUST_LOG=jadlog_tracking::email=debug,info jadlog-tracking
//! ```
//!
//! Client methods carry `#[instrument]`, so actor events nest under the
//! request that caused them:
//!
//! ```text
//! INFO add_tracking_code:write{order_id=OrderId(1)}: Tracking code changed order_id=1 transition=added
//! INFO add_tracking_code:write{order_id=OrderId(1)}:notify{order_id=1}: Email sent to=ana@example.com
//! ```

use tracing_subscriber::EnvFilter;

/// Initializes the global subscriber. Call once, at process start.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // entity_type and span names say enough
        .compact()
        .init();
}
