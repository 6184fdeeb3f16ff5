//! # HTTP Server
//!
//! Routes:
//!
//! - `POST /admin/ajax` - [`admin::add_tracking_code`]
//! - `GET /admin/orders/{id}/metabox` - the admin field as an HTML fragment
//! - `GET /orders/{id}/tracking` - the customer section, empty without a code

use crate::admin::{self, session_from, MetaboxView, NonceIssuer, NONCE_ACTION};
use crate::model::OrderId;
use crate::storefront::render_tracking;
use crate::templates::Templates;
use crate::tracking::{TrackingError, TrackingManager};
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tracing::{error, instrument, warn};

/// Shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub tracking: TrackingManager,
    pub nonces: NonceIssuer,
    pub templates: Arc<Templates>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/admin/ajax", post(admin::add_tracking_code))
        .route("/admin/orders/{id}/metabox", get(metabox_fragment))
        .route("/orders/{id}/tracking", get(customer_fragment))
        .with_state(state)
}

/// Failures of the fragment routes.
#[derive(Debug)]
pub enum FragmentError {
    Forbidden,
    Tracking(TrackingError),
    Render(minijinja::Error),
}

impl From<TrackingError> for FragmentError {
    fn from(e: TrackingError) -> Self {
        FragmentError::Tracking(e)
    }
}

impl From<minijinja::Error> for FragmentError {
    fn from(e: minijinja::Error) -> Self {
        FragmentError::Render(e)
    }
}

impl IntoResponse for FragmentError {
    fn into_response(self) -> Response {
        match self {
            FragmentError::Forbidden => (StatusCode::FORBIDDEN, "-1").into_response(),
            FragmentError::Tracking(TrackingError::NotFound(id)) => {
                (StatusCode::NOT_FOUND, format!("Order not found: {id}")).into_response()
            }
            FragmentError::Tracking(e) => {
                error!(error = %e, "Fragment failed");
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
            }
            FragmentError::Render(e) => {
                error!(error = %e, "Template failed");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

#[instrument(skip_all, fields(order_id = id))]
async fn metabox_fragment(
    State(state): State<AppState>,
    Path(id): Path<u32>,
    headers: HeaderMap,
) -> Result<Html<String>, FragmentError> {
    let Some(session) = session_from(&headers) else {
        warn!("Metabox requested without admin session");
        return Err(FragmentError::Forbidden);
    };
    let order_id = OrderId(id);
    let code = state.tracking.read(order_id).await?;
    let nonce = state.nonces.create(NONCE_ACTION, session);
    let view = MetaboxView::new(order_id, code.as_deref(), nonce);
    Ok(Html(view.render(&state.templates)?))
}

#[instrument(skip_all, fields(order_id = id))]
async fn customer_fragment(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Html<String>, FragmentError> {
    let code = state.tracking.read(OrderId(id)).await?;
    let html = render_tracking(&state.templates, code.as_deref())?;
    Ok(Html(html.unwrap_or_default()))
}
