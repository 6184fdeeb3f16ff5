//! # Admin AJAX Endpoint
//!
//! `POST /admin/ajax` with a form body, following the admin-ajax conventions
//! the metabox script expects:
//!
//! | Outcome | Status | Body |
//! |---------|--------|------|
//! | Saved | 200 | `{"success":true,"data":"<code or empty>"}` |
//! | Bad or missing token | 403 | `-1` |
//! | Unknown order | 404 | `{"success":false,"data":"..."}` |
//! | Store failure | 500 | `{"success":false,"data":"..."}` |
//! | Unknown `action` | 400 | `0` |

use super::{session_from, NONCE_ACTION};
use crate::model::OrderId;
use crate::server::AppState;
use crate::tracking::TrackingError;
use axum::extract::{Form, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// The `action` value routed to [`add_tracking_code`].
pub const AJAX_ACTION: &str = "woocommerce_jadlog_add_tracking_code";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AjaxRequest {
    pub action: String,
    pub order_id: String,
    pub tracking_code: String,
    #[serde(rename = "_ajax_nonce")]
    pub nonce: String,
}

#[derive(Debug, Serialize)]
struct Envelope<'a> {
    success: bool,
    data: &'a str,
}

#[derive(Debug, PartialEq)]
pub enum AjaxResponse {
    Success(String),
    Failure(StatusCode, String),
    /// Authenticity check failed; nothing was touched.
    Rejected,
    UnknownAction,
}

impl IntoResponse for AjaxResponse {
    fn into_response(self) -> Response {
        match self {
            AjaxResponse::Success(code) => Json(Envelope {
                success: true,
                data: &code,
            })
            .into_response(),
            AjaxResponse::Failure(status, message) => (
                status,
                Json(Envelope {
                    success: false,
                    data: &message,
                }),
            )
                .into_response(),
            AjaxResponse::Rejected => (StatusCode::FORBIDDEN, "-1").into_response(),
            AjaxResponse::UnknownAction => (StatusCode::BAD_REQUEST, "0").into_response(),
        }
    }
}

impl From<TrackingError> for AjaxResponse {
    fn from(e: TrackingError) -> Self {
        let status = match e {
            TrackingError::NotFound(_) => StatusCode::NOT_FOUND,
            TrackingError::Store(_) | TrackingError::Notification(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        AjaxResponse::Failure(status, e.to_string())
    }
}

/// Saves the submitted code and answers with the code now stored.
///
/// Surrounding whitespace is trimmed, so a blank submission clears the code.
/// An email failure is logged but still answered as success: the code and
/// its note are already saved.
#[instrument(skip_all)]
pub async fn add_tracking_code(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(request): Form<AjaxRequest>,
) -> AjaxResponse {
    if request.action != AJAX_ACTION {
        warn!(action = %request.action, "Unknown ajax action");
        return AjaxResponse::UnknownAction;
    }

    let Some(session) = session_from(&headers) else {
        warn!("Ajax request without admin session");
        return AjaxResponse::Rejected;
    };
    match state.nonces.verify(&request.nonce, NONCE_ACTION, session) {
        Ok(age) => debug!(?age, "Ajax token accepted"),
        Err(e) => {
            warn!(error = %e, "Ajax request rejected");
            return AjaxResponse::Rejected;
        }
    }

    let Ok(order_id) = request.order_id.parse::<OrderId>() else {
        return AjaxResponse::Failure(
            StatusCode::NOT_FOUND,
            format!("Order not found: {}", request.order_id),
        );
    };

    let code = request.tracking_code.trim();
    match state.tracking.write(order_id, code).await {
        Ok(transition) => info!(%order_id, %transition, "Tracking code saved"),
        Err(TrackingError::Notification(e)) => {
            warn!(%order_id, error = %e, "Tracking code saved without notification")
        }
        Err(e) => return e.into(),
    }

    match state.tracking.read(order_id).await {
        Ok(current) => AjaxResponse::Success(current.unwrap_or_default()),
        Err(e) => e.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::email::MailError;
    use crate::order_actor::OrderError;

    #[test]
    fn errors_map_to_status() {
        let not_found: AjaxResponse = TrackingError::NotFound("9".into()).into();
        assert!(matches!(not_found, AjaxResponse::Failure(StatusCode::NOT_FOUND, _)));

        let store: AjaxResponse =
            TrackingError::Store(OrderError::ActorCommunicationError("closed".into())).into();
        assert!(matches!(
            store,
            AjaxResponse::Failure(StatusCode::INTERNAL_SERVER_ERROR, _)
        ));

        let mail: AjaxResponse = TrackingError::Notification(MailError::Transport("x".into())).into();
        assert!(matches!(
            mail,
            AjaxResponse::Failure(StatusCode::INTERNAL_SERVER_ERROR, _)
        ));
    }

    #[test]
    fn rejected_is_minus_one() {
        let response = AjaxResponse::Rejected.into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}
