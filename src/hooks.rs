//! # Hook Registry
//!
//! Named filters that let deployments reshape parts of the tracking email
//! without touching this crate. A filter is a chain of handlers; each one gets
//! the previous output and returns the next.
//!
//! ```rust
//! use jadlog_tracking::hooks::{FilterContext, Hooks, TRACKING_MESSAGE_FILTER};
//! use jadlog_tracking::model::{Order, OrderId};
//!
//! let mut hooks = Hooks::new();
//! hooks.add_filter(TRACKING_MESSAGE_FILTER, 10, |message, ctx| {
//!     format!("{message}\n\nCode: {}", ctx.tracking_code)
//! });
//!
//! let order = Order::new(OrderId(1), None, None);
//! let ctx = FilterContext { order: &order, tracking_code: "JD1" };
//! assert_eq!(hooks.apply(TRACKING_MESSAGE_FILTER, "Sent".into(), &ctx), "Sent\n\nCode: JD1");
//! ```

use crate::model::Order;
use std::collections::HashMap;
use tracing::trace;

/// Filters the `<a>` element that links the tracking code to the order page.
pub const TRACKING_LINK_FILTER: &str = "woocommerce_jadlog_email_tracking_core_url";

/// Filters the formatted email message.
pub const TRACKING_MESSAGE_FILTER: &str = "woocommerce_jadlog_email_tracking_message";

/// Priority used when a caller has no preference.
pub const DEFAULT_PRIORITY: i32 = 10;

/// What a filter handler may inspect besides the value being filtered.
#[derive(Debug, Clone, Copy)]
pub struct FilterContext<'a> {
    pub order: &'a Order,
    pub tracking_code: &'a str,
}

type Handler = Box<dyn Fn(String, &FilterContext<'_>) -> String + Send + Sync>;

/// Filter name to handlers, kept sorted by priority.
#[derive(Default)]
pub struct Hooks {
    filters: HashMap<String, Vec<(i32, Handler)>>,
}

impl Hooks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` under `name`.
    ///
    /// Lower priorities run first. Equal priorities run in registration order.
    pub fn add_filter<F>(&mut self, name: &str, priority: i32, handler: F)
    where
        F: Fn(String, &FilterContext<'_>) -> String + Send + Sync + 'static,
    {
        let handlers = self.filters.entry(name.to_string()).or_default();
        // Insert after every handler of equal or lower priority.
        let at = handlers.partition_point(|(p, _)| *p <= priority);
        handlers.insert(at, (priority, Box::new(handler)));
    }

    /// Runs `value` through every handler of `name`. Unknown names pass it through.
    pub fn apply(&self, name: &str, value: String, ctx: &FilterContext<'_>) -> String {
        let Some(handlers) = self.filters.get(name) else {
            return value;
        };
        trace!(filter = name, handlers = handlers.len(), "Applying filter");
        handlers
            .iter()
            .fold(value, |acc, (_, handler)| handler(acc, ctx))
    }
}
