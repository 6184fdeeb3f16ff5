//! Tracking section of the customer's order page.

use crate::templates::{Templates, CUSTOMER_TRACKING};
use minijinja::{context, Value};

/// Carrier page that answers tracking queries.
pub const CARRIER_TRACKING_URL: &str = "https://www.jadlog.com.br/siteDpd/tracking.jad";

/// Anchor the tracking email links to.
pub const TRACKING_ANCHOR: &str = "wc-jadlog-tracking";

/// Renders the tracking section, or nothing when the order has no code.
pub fn render_tracking(
    templates: &Templates,
    code: Option<&str>,
) -> Result<Option<String>, minijinja::Error> {
    match code.filter(|c| !c.is_empty()) {
        Some(code) => templates
            .render(
                CUSTOMER_TRACKING,
                context! {
                    code,
                    anchor => TRACKING_ANCHOR,
                    // A constant, rendered unescaped.
                    carrier_url => Value::from_safe_string(CARRIER_TRACKING_URL.to_string()),
                },
            )
            .map(Some),
        None => Ok(None),
    }
}
