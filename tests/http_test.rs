use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use jadlog_tracking::admin::{AJAX_ACTION, NONCE_ACTION, SESSION_HEADER};
use jadlog_tracking::config::AppConfig;
use jadlog_tracking::email::OutboxMailer;
use jadlog_tracking::hooks::Hooks;
use jadlog_tracking::lifecycle::TrackingSystem;
use jadlog_tracking::model::{OrderCreate, OrderId};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

const SESSION: &str = "admin-1";

struct Harness {
    system: TrackingSystem,
    outbox: OutboxMailer,
    order_id: OrderId,
}

impl Harness {
    async fn new() -> Self {
        let outbox = OutboxMailer::new();
        let system = TrackingSystem::new(&AppConfig::default(), Arc::new(outbox.clone()), Hooks::new())
            .expect("Failed to start system");
        let order_id = system
            .order_client
            .place_order(OrderCreate {
                number: None,
                billing_email: Some("ana@example.com".into()),
            })
            .await
            .unwrap();
        Self {
            system,
            outbox,
            order_id,
        }
    }

    fn router(&self) -> Router {
        self.system.router()
    }

    fn nonce(&self) -> String {
        self.system.nonces.create(NONCE_ACTION, SESSION)
    }
}

fn ajax(session: Option<&str>, form: &str) -> Request<Body> {
    let mut builder = Request::post("/admin/ajax")
        .header("content-type", "application/x-www-form-urlencoded");
    if let Some(session) = session {
        builder = builder.header(SESSION_HEADER, session);
    }
    builder.body(Body::from(form.to_string())).unwrap()
}

fn form(action: &str, order_id: &str, code: &str, nonce: &str) -> String {
    format!("action={action}&order_id={order_id}&tracking_code={code}&_ajax_nonce={nonce}")
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_ajax_saves_trimmed_code() {
    let h = Harness::new().await;
    let body = form(AJAX_ACTION, &h.order_id.to_string(), "++JD123++", &h.nonce());

    let response = h.router().oneshot(ajax(Some(SESSION), &body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json: Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(json, json!({ "success": true, "data": "JD123" }));

    assert_eq!(h.system.tracking.read(h.order_id).await.unwrap().as_deref(), Some("JD123"));
    assert_eq!(h.outbox.sent().len(), 1);
}

#[tokio::test]
async fn test_ajax_blank_code_clears() {
    let h = Harness::new().await;
    h.system.tracking.write(h.order_id, "JD1").await.unwrap();
    let body = form(AJAX_ACTION, &h.order_id.to_string(), "+", &h.nonce());

    let response = h.router().oneshot(ajax(Some(SESSION), &body)).await.unwrap();
    let json: Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(json, json!({ "success": true, "data": "" }));
    assert_eq!(h.system.tracking.read(h.order_id).await.unwrap(), None);
}

#[tokio::test]
async fn test_ajax_invalid_nonce_is_rejected_without_mutation() {
    let h = Harness::new().await;
    let id = h.order_id.to_string();

    for request in [
        ajax(Some(SESSION), &form(AJAX_ACTION, &id, "JD1", "deadbeef")),
        ajax(Some(SESSION), &form(AJAX_ACTION, &id, "JD1", "")),
        ajax(Some("someone-else"), &form(AJAX_ACTION, &id, "JD1", &h.nonce())),
        ajax(None, &form(AJAX_ACTION, &id, "JD1", &h.nonce())),
    ] {
        let response = h.router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(body_text(response).await, "-1");
    }

    let order = h.system.order_client.get_order(h.order_id).await.unwrap();
    assert!(order.meta.is_empty());
    assert!(order.notes.is_empty());
    assert!(h.outbox.sent().is_empty());
}

#[tokio::test]
async fn test_ajax_unknown_order_is_404() {
    let h = Harness::new().await;

    for order_id in ["999", "abc"] {
        let body = form(AJAX_ACTION, order_id, "JD1", &h.nonce());
        let response = h.router().oneshot(ajax(Some(SESSION), &body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json: Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(json["success"], json!(false));
    }
}

#[tokio::test]
async fn test_ajax_unknown_action_is_zero() {
    let h = Harness::new().await;
    let body = form("something_else", &h.order_id.to_string(), "JD1", &h.nonce());

    let response = h.router().oneshot(ajax(Some(SESSION), &body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(response).await, "0");
}

#[tokio::test]
async fn test_metabox_fragment_follows_code() {
    let h = Harness::new().await;
    let uri = format!("/admin/orders/{}/metabox", h.order_id);
    let get = |session: Option<&str>| {
        let mut builder = Request::get(uri.as_str());
        if let Some(session) = session {
            builder = builder.header(SESSION_HEADER, session);
        }
        builder.body(Body::empty()).unwrap()
    };

    let response = h.router().oneshot(get(None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let html = body_text(h.router().oneshot(get(Some(SESSION))).await.unwrap()).await;
    assert!(html.contains("Add tracking code"));
    assert!(html.contains("dashicons-plus"));

    h.system.tracking.write(h.order_id, "JD5").await.unwrap();
    let html = body_text(h.router().oneshot(get(Some(SESSION))).await.unwrap()).await;
    assert!(html.contains("Edit tracking code"));
    assert!(html.contains(r#"value="JD5""#));

    // The embedded nonce is accepted by the endpoint.
    let nonce = html
        .split("jadlog_security_nonce = \"")
        .nth(1)
        .and_then(|rest| rest.split('"').next())
        .expect("nonce in fragment")
        .to_string();
    let body = form(AJAX_ACTION, &h.order_id.to_string(), "JD6", &nonce);
    let response = h.router().oneshot(ajax(Some(SESSION), &body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_customer_fragment() {
    let h = Harness::new().await;
    let uri = format!("/orders/{}/tracking", h.order_id);
    let get = || Request::get(uri.as_str()).body(Body::empty()).unwrap();

    let response = h.router().oneshot(get()).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "");

    h.system.tracking.write(h.order_id, "<JD&7>").await.unwrap();
    let html = body_text(h.router().oneshot(get()).await.unwrap()).await;
    assert!(html.contains("Jadlog delivery tracking"));
    assert!(html.contains("&lt;JD&amp;7&gt;"));
    assert!(!html.contains("<JD&7>"));

    let missing = Request::get("/orders/999/tracking").body(Body::empty()).unwrap();
    let response = h.router().oneshot(missing).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
