//! HTTP-level integration tests for the full application router.
//!
//! Each test spins up a fresh state over a temporary SQLite database (with
//! migrations and seed applied) and drives the router directly.

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

use dm_server::{Config, ServerState, api};

async fn setup() -> (Router, ServerState, tempfile::TempDir) {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = Config::with_overrides(dir.path().to_string_lossy().to_string(), 0);
    let state = ServerState::initialize(&config).await;
    let app = api::build_app(&state).with_state(state.clone());
    (app, state, dir)
}

async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .expect("request"),
        None => builder.body(Body::empty()).expect("request"),
    };

    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

async fn login(app: &Router) -> String {
    let (status, body) = send(
        app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({"email": "admin@diskmensagem.local", "password": "admin123"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "login failed: {body}");
    body["access_token"].as_str().expect("token").to_string()
}

/// First active message id from the seeded catalog
async fn seeded_message_id(app: &Router) -> i64 {
    let (status, body) = send(app, "GET", "/api/public/messages", None, None).await;
    assert_eq!(status, StatusCode::OK);
    body.as_array().expect("array")[0]["id"].as_i64().expect("id")
}

fn order_payload(message_id: i64, date: &str, time: &str) -> Value {
    json!({
        "recipient_name": "Maria",
        "sender_name": "João",
        "address": "Rua A, 10",
        "delivery_date": date,
        "delivery_time": time,
        "message_id": message_id,
    })
}

/// A delivery date that is always valid (tomorrow, UTC)
fn tomorrow() -> String {
    (chrono::Utc::now().date_naive() + chrono::Days::new(1))
        .format("%Y-%m-%d")
        .to_string()
}

async fn create_order(app: &Router, message_id: i64, date: &str, time: &str) -> Value {
    let (status, body) = send(
        app,
        "POST",
        "/api/public/orders",
        None,
        Some(order_payload(message_id, date, time)),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "order creation failed: {body}");
    body
}

// ── Health & public config ──────────────────────────────────────────

#[tokio::test]
async fn health_check() {
    let (app, _state, _dir) = setup().await;
    let (status, body) = send(&app, "GET", "/api/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "ok");
}

#[tokio::test]
async fn public_config_exposes_seeded_settings() {
    let (app, _state, _dir) = setup().await;
    let (status, body) = send(&app, "GET", "/api/public/config", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["base_price_cents"], 7000);
    assert_eq!(body["app_name"], "Disk Mensagem");
    // The PIX key is not part of the public snapshot
    assert!(body.get("pix_key").is_none());
}

// ── Order creation ──────────────────────────────────────────────────

#[tokio::test]
async fn order_creation_freezes_price_from_settings_snapshot() {
    let (app, _state, _dir) = setup().await;
    let token = login(&app).await;
    let message_id = seeded_message_id(&app).await;

    let order = create_order(&app, message_id, "2031-12-25", "09:00").await;
    assert_eq!(order["status"], "pending");
    assert_eq!(order["amount_cents"], 7000);
    assert!(order["id"].as_i64().is_some());

    // Raising the price afterwards must not reprice the existing order
    let (status, _) = send(
        &app,
        "PUT",
        "/api/admin/settings",
        Some(&token),
        Some(json!({
            "base_price_cents": 9000,
            "city_name": "Presidente Prudente",
            "pix_key": "+5518997053664",
            "whats_e164": "+5518997053664",
            "phone_display": "(18) 99705-3664",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let uri = format!("/api/admin/orders/{}", order["id"].as_i64().unwrap());
    let (status, fetched) = send(&app, "GET", &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["amount_cents"], 7000);

    // New orders pick up the new price
    let newer = create_order(&app, message_id, "2031-12-25", "10:00").await;
    assert_eq!(newer["amount_cents"], 9000);
}

#[tokio::test]
async fn order_creation_rejects_bad_input() {
    let (app, _state, _dir) = setup().await;
    let message_id = seeded_message_id(&app).await;

    // Missing recipient
    let mut payload = order_payload(message_id, &tomorrow(), "09:00");
    payload["recipient_name"] = json!("");
    let (status, body) = send(&app, "POST", "/api/public/orders", None, Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");

    // Past delivery date
    let (status, _) = send(
        &app,
        "POST",
        "/api/public/orders",
        None,
        Some(order_payload(message_id, "2020-01-01", "09:00")),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Malformed date
    let (status, _) = send(
        &app,
        "POST",
        "/api/public/orders",
        None,
        Some(order_payload(message_id, "25/12/2031", "09:00")),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Unknown message reference
    let (status, _) = send(
        &app,
        "POST",
        "/api/public/orders",
        None,
        Some(order_payload(999_999, &tomorrow(), "09:00")),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Neither catalog message nor custom message
    let mut payload = order_payload(message_id, &tomorrow(), "09:00");
    payload.as_object_mut().unwrap().remove("message_id");
    let (status, _) = send(&app, "POST", "/api/public/orders", None, Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn order_creation_accepts_custom_message() {
    let (app, _state, _dir) = setup().await;
    let mut payload = order_payload(0, &tomorrow(), "18:30");
    let obj = payload.as_object_mut().unwrap();
    obj.remove("message_id");
    obj.insert(
        "custom_message".to_string(),
        json!("Parabéns pelo seu dia!"),
    );

    let (status, body) = send(&app, "POST", "/api/public/orders", None, Some(payload)).await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["status"], "pending");
    assert!(body["message_id"].is_null());
    assert_eq!(body["custom_message"], "Parabéns pelo seu dia!");
    // Time was normalized
    assert_eq!(body["delivery_time"], "18:30");
}

#[tokio::test]
async fn public_status_lookup() {
    let (app, _state, _dir) = setup().await;
    let message_id = seeded_message_id(&app).await;
    let order = create_order(&app, message_id, &tomorrow(), "09:00").await;
    let id = order["id"].as_i64().unwrap();

    let (status, body) = send(&app, "GET", &format!("/api/public/orders/{id}"), None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "pending");
    // No customer details on the public endpoint
    assert!(body.get("recipient_name").is_none());

    let (status, _) = send(&app, "GET", "/api/public/orders/12345", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ── Auth gate ───────────────────────────────────────────────────────

#[tokio::test]
async fn admin_routes_require_bearer_token() {
    let (app, _state, _dir) = setup().await;

    let (status, body) = send(&app, "GET", "/api/admin/orders", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "unauthorized");

    let (status, _) = send(&app, "GET", "/api/admin/orders", Some("not-a-token"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let token = login(&app).await;
    let (status, _) = send(&app, "GET", "/api/admin/orders", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn login_failures_are_uniform() {
    let (app, _state, _dir) = setup().await;

    let (status, wrong_pw) = send(
        &app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({"email": "admin@diskmensagem.local", "password": "nope"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status2, unknown) = send(
        &app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({"email": "ghost@diskmensagem.local", "password": "nope"})),
    )
    .await;
    assert_eq!(status2, StatusCode::BAD_REQUEST);
    // Same error either way — no account enumeration
    assert_eq!(wrong_pw["message"], unknown["message"]);
}

#[tokio::test]
async fn password_change_flow() {
    let (app, _state, _dir) = setup().await;
    let token = login(&app).await;

    let (status, me) = send(&app, "GET", "/api/auth/me", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["email"], "admin@diskmensagem.local");

    // Wrong current password
    let (status, _) = send(
        &app,
        "POST",
        "/api/auth/change-password",
        Some(&token),
        Some(json!({"current_password": "wrong", "new_password": "nova-senha"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        "POST",
        "/api/auth/change-password",
        Some(&token),
        Some(json!({"current_password": "admin123", "new_password": "nova-senha"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // Old password no longer works, new one does
    let (status, _) = send(
        &app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({"email": "admin@diskmensagem.local", "password": "admin123"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({"email": "admin@diskmensagem.local", "password": "nova-senha"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

// ── Order listing & status transitions ──────────────────────────────

#[tokio::test]
async fn order_list_is_newest_first_and_filterable() {
    let (app, _state, _dir) = setup().await;
    let token = login(&app).await;
    let message_id = seeded_message_id(&app).await;

    let first = create_order(&app, message_id, &tomorrow(), "08:00").await;
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    let second = create_order(&app, message_id, &tomorrow(), "09:00").await;
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    let third = create_order(&app, message_id, &tomorrow(), "10:00").await;

    let (status, listed) = send(&app, "GET", "/api/admin/orders", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<i64> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["id"].as_i64().unwrap())
        .collect();
    assert_eq!(
        ids,
        vec![
            third["id"].as_i64().unwrap(),
            second["id"].as_i64().unwrap(),
            first["id"].as_i64().unwrap()
        ]
    );

    // Same query again → same order (stability)
    let (_, listed_again) = send(&app, "GET", "/api/admin/orders", Some(&token), None).await;
    assert_eq!(listed, listed_again);

    // Cancel one, filter by status
    let uri = format!("/api/admin/orders/{}/status", first["id"].as_i64().unwrap());
    let (status, _) = send(
        &app,
        "PUT",
        &uri,
        Some(&token),
        Some(json!({"status": "canceled"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, canceled) = send(
        &app,
        "GET",
        "/api/admin/orders?status=canceled",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(canceled.as_array().unwrap().len(), 1);

    // Unknown status filter is rejected
    let (status, _) = send(
        &app,
        "GET",
        "/api/admin/orders?status=shipped",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Free-text search over recipient name
    let (_, found) = send(
        &app,
        "GET",
        "/api/admin/orders?q=Maria",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(found.as_array().unwrap().len(), 3);
    let (_, none) = send(
        &app,
        "GET",
        "/api/admin/orders?q=Zacarias",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(none.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn status_transitions_are_permissive_but_validated() {
    let (app, _state, _dir) = setup().await;
    let token = login(&app).await;
    let message_id = seeded_message_id(&app).await;
    let order = create_order(&app, message_id, &tomorrow(), "09:00").await;
    let uri = format!("/api/admin/orders/{}/status", order["id"].as_i64().unwrap());

    // Any status is reachable from any other, including reopening
    for status_value in ["done", "pending", "scheduled", "paid", "canceled", "pending"] {
        let (status, body) = send(
            &app,
            "PUT",
            &uri,
            Some(&token),
            Some(json!({"status": status_value})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], status_value);
    }

    // Unknown status value
    let (status, body) = send(
        &app,
        "PUT",
        &uri,
        Some(&token),
        Some(json!({"status": "shipped"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");

    // Unknown order id → NotFound, never a silent success
    let (status, _) = send(
        &app,
        "PUT",
        "/api/admin/orders/424242/status",
        Some(&token),
        Some(json!({"status": "done"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ── Payments ────────────────────────────────────────────────────────

#[tokio::test]
async fn payment_generation_is_idempotent() {
    let (app, _state, _dir) = setup().await;
    let message_id = seeded_message_id(&app).await;
    let order = create_order(&app, message_id, &tomorrow(), "09:00").await;
    let order_id = order["id"].as_i64().unwrap();

    let (status, first) = send(
        &app,
        "POST",
        "/api/public/payments/pix",
        None,
        Some(json!({"order_id": order_id})),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{first}");
    assert_eq!(first["provider"], "static");
    assert_eq!(first["amount_cents"], 7000);
    let brcode = first["brcode"].as_str().unwrap();
    assert!(brcode.starts_with("000201"));
    assert!(brcode.contains("BR.GOV.BCB.PIX"));

    // Second call returns the same record, no re-minting
    let (status, second) = send(
        &app,
        "POST",
        "/api/public/payments/pix",
        None,
        Some(json!({"order_id": order_id})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["reference_code"], second["reference_code"]);
    assert_eq!(first["payment_id"], second["payment_id"]);
    assert_eq!(first["brcode"], second["brcode"]);
}

#[tokio::test]
async fn payment_generation_rejects_canceled_and_unknown_orders() {
    let (app, _state, _dir) = setup().await;
    let token = login(&app).await;
    let message_id = seeded_message_id(&app).await;
    let order = create_order(&app, message_id, &tomorrow(), "09:00").await;
    let order_id = order["id"].as_i64().unwrap();

    let (status, _) = send(
        &app,
        "PUT",
        &format!("/api/admin/orders/{order_id}/status"),
        Some(&token),
        Some(json!({"status": "canceled"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(
        &app,
        "POST",
        "/api/public/payments/pix",
        None,
        Some(json!({"order_id": order_id})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "invalid_state");

    let (status, _) = send(
        &app,
        "POST",
        "/api/public/payments/pix",
        None,
        Some(json!({"order_id": 777})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn webhook_confirms_payment_and_advances_order() {
    let (app, _state, _dir) = setup().await;
    let message_id = seeded_message_id(&app).await;
    let order = create_order(&app, message_id, &tomorrow(), "09:00").await;
    let order_id = order["id"].as_i64().unwrap();
    send(
        &app,
        "POST",
        "/api/public/payments/pix",
        None,
        Some(json!({"order_id": order_id})),
    )
    .await;

    // Bad token is rejected
    let request = Request::builder()
        .method("POST")
        .uri("/api/webhooks/pix")
        .header(header::CONTENT_TYPE, "application/json")
        .header("x-webhook-token", "wrong")
        .body(Body::from(
            json!({"order_id": order_id, "status": "confirmed"}).to_string(),
        ))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // Valid settlement: payment confirmed, order advanced pending → paid
    let request = Request::builder()
        .method("POST")
        .uri("/api/webhooks/pix")
        .header(header::CONTENT_TYPE, "application/json")
        .header("x-webhook-token", "troque-este-token")
        .body(Body::from(
            json!({"order_id": order_id, "status": "confirmed"}).to_string(),
        ))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["order_status"], "paid");

    let (_, lookup) = send(&app, "GET", &format!("/api/public/orders/{order_id}"), None, None).await;
    assert_eq!(lookup["status"], "paid");

    // Re-fetching the charge shows the confirmed settlement status
    let (_, record) = send(
        &app,
        "POST",
        "/api/public/payments/pix",
        None,
        Some(json!({"order_id": order_id})),
    )
    .await;
    assert_eq!(record["status"], "confirmed");
}

// ── Agenda ──────────────────────────────────────────────────────────

#[tokio::test]
async fn agenda_is_date_scoped_and_time_sorted() {
    let (app, _state, _dir) = setup().await;
    let token = login(&app).await;
    let message_id = seeded_message_id(&app).await;

    let day = "2031-12-25";
    create_order(&app, message_id, day, "08:00").await;
    create_order(&app, message_id, day, "14:00").await;
    let canceled = create_order(&app, message_id, day, "09:00").await;
    create_order(&app, message_id, "2031-12-26", "07:00").await;

    // Cancel one of the day's orders — it must stay on the agenda
    let (status, _) = send(
        &app,
        "PUT",
        &format!("/api/admin/orders/{}/status", canceled["id"].as_i64().unwrap()),
        Some(&token),
        Some(json!({"status": "canceled"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, agenda) = send(
        &app,
        "GET",
        &format!("/api/admin/agenda?date={day}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let times: Vec<&str> = agenda["entries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["delivery_time"].as_str().unwrap())
        .collect();
    assert_eq!(times, vec!["08:00", "09:00", "14:00"]);

    // Empty day is a valid agenda
    let (status, empty) = send(
        &app,
        "GET",
        "/api/admin/agenda?date=2031-01-01",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(empty["entries"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn agenda_document_download() {
    let (app, _state, _dir) = setup().await;
    let token = login(&app).await;
    let message_id = seeded_message_id(&app).await;
    create_order(&app, message_id, "2031-12-25", "09:00").await;

    let request = Request::builder()
        .method("GET")
        .uri("/api/admin/agenda/document?date=2031-12-25")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let disposition = response
        .headers()
        .get(header::CONTENT_DISPOSITION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(disposition.contains("agenda-2031-12-25.txt"));

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.contains("Agenda — 2031-12-25"));
    assert!(text.contains("Maria"));
}

// ── Catalog ─────────────────────────────────────────────────────────

#[tokio::test]
async fn inactive_categories_are_hidden_from_public_picker() {
    let (app, _state, _dir) = setup().await;
    let token = login(&app).await;

    let (status, created) = send(
        &app,
        "POST",
        "/api/admin/categories",
        Some(&token),
        Some(json!({"name": "Formatura"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let id = created["id"].as_i64().unwrap();

    let (_, public) = send(&app, "GET", "/api/public/categories", None, None).await;
    assert!(
        public
            .as_array()
            .unwrap()
            .iter()
            .any(|c| c["name"] == "Formatura")
    );

    // Deactivate and it disappears from the picker but stays in admin list
    let (status, _) = send(
        &app,
        "PUT",
        &format!("/api/admin/categories/{id}"),
        Some(&token),
        Some(json!({"is_active": false})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, public) = send(&app, "GET", "/api/public/categories", None, None).await;
    assert!(
        !public
            .as_array()
            .unwrap()
            .iter()
            .any(|c| c["name"] == "Formatura")
    );
    let (_, all) = send(&app, "GET", "/api/admin/categories", Some(&token), None).await;
    assert!(all.as_array().unwrap().iter().any(|c| c["name"] == "Formatura"));
}

#[tokio::test]
async fn public_message_search_and_snippets() {
    let (app, _state, _dir) = setup().await;

    // "coração", percent-encoded for the request line
    let (status, hits) = send(
        &app,
        "GET",
        "/api/public/messages?q=cora%C3%A7%C3%A3o",
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(!hits.as_array().unwrap().is_empty());
    for hit in hits.as_array().unwrap() {
        assert!(hit.get("snippet").is_some());
        // Full body is not leaked in the listing
        assert!(hit.get("body").is_none());
    }

    let (_, none) = send(
        &app,
        "GET",
        "/api/public/messages?q=xyzzy-nada",
        None,
        None,
    )
    .await;
    assert_eq!(none.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn message_crud_and_referential_check() {
    let (app, _state, _dir) = setup().await;
    let token = login(&app).await;

    // Creating against a missing category fails
    let (status, _) = send(
        &app,
        "POST",
        "/api/admin/messages",
        Some(&token),
        Some(json!({"category_id": 999_999, "title": "T", "body": "B"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, categories) = send(&app, "GET", "/api/admin/categories", Some(&token), None).await;
    let category_id = categories.as_array().unwrap()[0]["id"].as_i64().unwrap();

    let (status, message) = send(
        &app,
        "POST",
        "/api/admin/messages",
        Some(&token),
        Some(json!({
            "category_id": category_id,
            "title": "Nova homenagem",
            "body": "Texto da homenagem."
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let id = message["id"].as_i64().unwrap();

    let (status, updated) = send(
        &app,
        "PUT",
        &format!("/api/admin/messages/{id}"),
        Some(&token),
        Some(json!({"is_active": false})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["is_active"], false);

    // Inactive messages cannot anchor new orders
    let (status, _) = send(
        &app,
        "POST",
        "/api/public/orders",
        None,
        Some(order_payload(id, &tomorrow(), "09:00")),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        "DELETE",
        &format!("/api/admin/messages/{id}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn bulk_import_creates_messages_and_categories() {
    let (app, _state, _dir) = setup().await;
    let token = login(&app).await;

    let text = "Categoria: Formatura\n\
                Título: Formatura – Conquista\n\
                Parabéns pela conquista!\n\
                Cada passo valeu a pena.\n\
                ---\n\
                Título: Formatura – Orgulho\n\
                Estamos orgulhosos de você.\n";

    let request = Request::builder()
        .method("POST")
        .uri("/api/admin/messages/import")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .header(header::CONTENT_TYPE, "text/plain; charset=utf-8")
        .body(Body::from(text))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["imported"], 2);

    // The on-demand category is now part of the catalog
    let (_, public) = send(&app, "GET", "/api/public/categories", None, None).await;
    assert!(
        public
            .as_array()
            .unwrap()
            .iter()
            .any(|c| c["name"] == "Formatura")
    );
}

// ── Settings ────────────────────────────────────────────────────────

#[tokio::test]
async fn settings_update_is_wholesale() {
    let (app, _state, _dir) = setup().await;
    let token = login(&app).await;

    let replacement = json!({
        "base_price_cents": 8500,
        "city_name": "Presidente Prudente",
        "pix_key": "contato@diskmensagem.local",
        "whats_e164": "+5518999990000",
        "phone_display": "(18) 99999-0000",
    });
    let (status, updated) = send(
        &app,
        "PUT",
        "/api/admin/settings",
        Some(&token),
        Some(replacement.clone()),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, fetched) = send(&app, "GET", "/api/admin/settings", Some(&token), None).await;
    for key in [
        "base_price_cents",
        "city_name",
        "pix_key",
        "whats_e164",
        "phone_display",
    ] {
        assert_eq!(fetched[key], replacement[key], "field {key}");
        assert_eq!(updated[key], replacement[key], "field {key}");
    }

    // Negative price is rejected
    let mut bad = replacement.clone();
    bad["base_price_cents"] = json!(-1);
    let (status, _) = send(&app, "PUT", "/api/admin/settings", Some(&token), Some(bad)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
