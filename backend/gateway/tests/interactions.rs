//! End-to-end tests for the HTTP surface, driving the router in-process.

use axum::Router;
use axum::body::{Body, Bytes};
use axum::http::{Request, StatusCode, header};
use ed25519_dalek::{Signer, SigningKey};
use gork_core::{ASK_GORK_MARKER, Dispatcher, GORK_RESPONSES, ResponsePool};
use gork_gateway::{GatewayState, build_router};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

const TIMESTAMP: &str = "1700000000";

fn signing_key() -> SigningKey {
    SigningKey::from_bytes(&[0x07; 32])
}

fn public_key() -> String {
    hex::encode(signing_key().verifying_key().to_bytes())
}

fn app() -> Router {
    let public_key = public_key();
    build_router(GatewayState::new(Some(public_key.as_str())).with_application_id(Some("123")))
}

fn sign(timestamp: &str, body: &[u8]) -> String {
    let mut message = timestamp.as_bytes().to_vec();
    message.extend_from_slice(body);
    hex::encode(signing_key().sign(&message).to_bytes())
}

fn interaction_request(
    signature: Option<&str>,
    timestamp: Option<&str>,
    body: &str,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/interactions")
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(signature) = signature {
        builder = builder.header("x-signature-ed25519", signature);
    }
    if let Some(timestamp) = timestamp {
        builder = builder.header("x-signature-timestamp", timestamp);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn signed(body: &str) -> Request<Body> {
    let signature = sign(TIMESTAMP, body.as_bytes());
    interaction_request(Some(signature.as_str()), Some(TIMESTAMP), body)
}

async fn send(app: Router, req: Request<Body>) -> (StatusCode, Bytes) {
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let body = resp.into_body().collect().await.unwrap().to_bytes();
    (status, body)
}

async fn send_json(req: Request<Body>) -> Value {
    let (status, body) = send(app(), req).await;
    assert_eq!(status, StatusCode::OK, "body: {:?}", body);
    serde_json::from_slice(&body).unwrap()
}

// ============================================================================
// Liveness
// ============================================================================

#[tokio::test]
async fn liveness_greets() {
    let req = Request::builder().uri("/").body(Body::empty()).unwrap();
    let (status, body) = send(app(), req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(&body[..], "👋 123".as_bytes());
}

#[tokio::test]
async fn get_on_interactions_is_not_routed() {
    let req = Request::builder().uri("/interactions").body(Body::empty()).unwrap();
    let (status, _) = send(app(), req).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

// ============================================================================
// Dispatch
// ============================================================================

#[tokio::test]
async fn ping_is_acknowledged() {
    let (status, body) = send(app(), signed(r#"{"type":1}"#)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(serde_json::from_slice::<Value>(&body).unwrap(), json!({ "type": 1 }));
}

#[tokio::test]
async fn gork_command_replies_in_channel() {
    let value = send_json(signed(r#"{"type":2,"data":{"name":"gork"}}"#)).await;
    assert_eq!(value["type"], 4);
    assert_eq!(value["data"]["flags"], 0);
    assert!(GORK_RESPONSES.contains(value["data"]["content"].as_str().unwrap()));
}

#[tokio::test]
async fn gork_ephemeral_command_is_ephemeral() {
    let value = send_json(signed(r#"{"type":2,"data":{"name":"gork-ephemeral"}}"#)).await;
    assert_eq!(value["type"], 4);
    assert_eq!(value["data"]["flags"], 64);
    assert!(GORK_RESPONSES.contains(value["data"]["content"].as_str().unwrap()));
}

#[tokio::test]
async fn ask_gork_button_reply_is_marked() {
    let value = send_json(signed(r#"{"type":3,"data":{"custom_id":"ask_gork"}}"#)).await;
    assert_eq!(value["type"], 4);
    assert_eq!(value["data"]["flags"], 64);
    let content = value["data"]["content"].as_str().unwrap();
    let rest = content.strip_prefix(ASK_GORK_MARKER).unwrap();
    assert!(GORK_RESPONSES.contains(rest));
}

#[tokio::test]
async fn injected_dispatcher_pool_is_used() {
    const ONLY: ResponsePool = match ResponsePool::new(&["certainly"]) {
        Some(pool) => pool,
        None => panic!("empty pool"),
    };
    let public_key = public_key();
    let state =
        GatewayState::new(Some(public_key.as_str())).with_dispatcher(Dispatcher::new(ONLY));
    let req = signed(r#"{"type":2,"data":{"name":"gork"}}"#);
    let (status, body) = send(build_router(state), req).await;
    assert_eq!(status, StatusCode::OK);
    let value: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(value["data"]["content"], "certainly");
}

#[tokio::test]
async fn odd_data_on_ping_is_still_acknowledged() {
    let value = send_json(signed(r#"{"type":1,"data":"x"}"#)).await;
    assert_eq!(value, json!({ "type": 1 }));
}

#[tokio::test]
async fn success_is_json() {
    let resp = app().oneshot(signed(r#"{"type":1}"#)).await.unwrap();
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );
}

#[tokio::test]
async fn unrecognized_interactions_are_bad_requests() {
    for body in [
        r#"{"type":2,"data":{"name":"unknown-cmd"}}"#,
        r#"{"type":3,"data":{"custom_id":"something_else"}}"#,
        r#"{"type":99}"#,
        r#"{"type":2}"#,
    ] {
        let (status, resp) = send(app(), signed(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
        assert_eq!(&resp[..], b"Unknown Type", "{body}");
    }
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    for body in ["not json", r#"{"data":{}}"#, ""] {
        let (status, resp) = send(app(), signed(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{body:?}");
        assert_eq!(&resp[..], b"Malformed payload.", "{body:?}");
    }
}

// ============================================================================
// Authentication
// ============================================================================

async fn assert_unauthorized(app: Router, req: Request<Body>) {
    let (status, body) = send(app, req).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(&body[..], b"Bad request signature.");
}

#[tokio::test]
async fn missing_headers_are_rejected() {
    let body = r#"{"type":1}"#;
    let signature = sign(TIMESTAMP, body.as_bytes());

    assert_unauthorized(app(), interaction_request(None, Some(TIMESTAMP), body)).await;
    assert_unauthorized(app(), interaction_request(Some(signature.as_str()), None, body)).await;
    assert_unauthorized(app(), interaction_request(None, None, body)).await;
}

#[tokio::test]
async fn missing_public_key_rejects_everything() {
    let app = build_router(GatewayState::new(None));
    assert_unauthorized(app, signed(r#"{"type":1}"#)).await;
}

#[tokio::test]
async fn malformed_public_key_rejects_everything() {
    let odd_length = "0".repeat(63);
    for key in ["zz", "abcd", odd_length.as_str()] {
        let app = build_router(GatewayState::new(Some(key)));
        assert_unauthorized(app, signed(r#"{"type":1}"#)).await;
    }
}

#[tokio::test]
async fn tampering_is_rejected() {
    let body = r#"{"type":2,"data":{"name":"gork"}}"#;
    let signature = sign(TIMESTAMP, body.as_bytes());
    let signature = Some(signature.as_str());

    let tampered = r#"{"type":2,"data":{"name":"gorK"}}"#;
    assert_unauthorized(app(), interaction_request(signature, Some(TIMESTAMP), tampered)).await;

    assert_unauthorized(app(), interaction_request(signature, Some("1700000001"), body)).await;

    let mut flipped = sign(TIMESTAMP, body.as_bytes()).into_bytes();
    flipped[0] = if flipped[0] == b'0' { b'1' } else { b'0' };
    let flipped = String::from_utf8(flipped).unwrap();
    assert_unauthorized(app(), interaction_request(Some(&flipped), Some(TIMESTAMP), body)).await;
}

#[tokio::test]
async fn garbage_signature_is_rejected_without_detail() {
    let body = r#"{"type":1}"#;
    assert_unauthorized(app(), interaction_request(Some("not-hex"), Some(TIMESTAMP), body)).await;
    assert_unauthorized(app(), interaction_request(Some("abcd"), Some(TIMESTAMP), body)).await;
}

#[tokio::test]
async fn unauthenticated_garbage_is_401_not_400() {
    assert_unauthorized(app(), interaction_request(None, None, "not json")).await;
}
