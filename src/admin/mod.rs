//! # Admin Surface
//!
//! The order-admin metabox and the AJAX endpoint it posts to. Both are bound
//! to an admin session, passed in the [`SESSION_HEADER`] header, and guarded
//! by [`nonce`] tokens issued for [`NONCE_ACTION`].

pub mod ajax;
pub mod metabox;
pub mod nonce;

pub use ajax::{add_tracking_code, AjaxRequest, AjaxResponse, AJAX_ACTION};
pub use metabox::{MetaboxMode, MetaboxView};
pub use nonce::{NonceAge, NonceError, NonceIssuer};

use axum::http::HeaderMap;

/// Header carrying the admin session the nonce is bound to.
pub const SESSION_HEADER: &str = "x-admin-session";

/// Action every tracking nonce is issued for.
pub const NONCE_ACTION: &str = "jadlog";

/// The admin session of a request, if it names a non-blank one.
pub fn session_from(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(SESSION_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|session| !session.is_empty())
}
