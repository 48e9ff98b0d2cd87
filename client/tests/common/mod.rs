//! Shared fixtures for the integration tests: a scripted checkout, a store that
//! records writes, and canned backend responses.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::{json, Value};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use society_client::app::App;
use society_client::config::ClientConfig;
use society_client::services::api::ApiClient;
use society_client::core::{KeyValueStore, PaymentGateway};
use society_client::services::gateway::{CheckoutOptions, GatewayOutcome, PaymentOutcome};
use society_client::services::storage::{MemoryStore, StorageError};

/// Checkout double that replays queued outcomes and records what it was asked to open.
///
/// With nothing queued it behaves like a resident closing the modal.
#[derive(Default)]
pub struct ScriptedGateway {
    outcomes: Mutex<VecDeque<GatewayOutcome>>,
    opened: Mutex<Vec<CheckoutOptions>>,
}

impl ScriptedGateway {
    pub fn new(outcomes: impl IntoIterator<Item = GatewayOutcome>) -> Arc<Self> {
        Arc::new(Self {
            outcomes: Mutex::new(outcomes.into_iter().collect()),
            opened: Mutex::new(Vec::new()),
        })
    }

    pub fn opened(&self) -> Vec<CheckoutOptions> {
        self.opened.lock().clone()
    }
}

#[async_trait]
impl PaymentGateway for ScriptedGateway {
    async fn open(&self, checkout: CheckoutOptions) -> GatewayOutcome {
        self.opened.lock().push(checkout);
        self.outcomes
            .lock()
            .pop_front()
            .unwrap_or(GatewayOutcome::Dismissed)
    }
}

/// Store operation seen by [`RecordingStore`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreOp {
    Set(String, String),
    Remove(String),
}

/// In-memory store that logs every write
#[derive(Default)]
pub struct RecordingStore {
    inner: MemoryStore,
    ops: Mutex<Vec<StoreOp>>,
}

impl RecordingStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_token(token: &str) -> Arc<Self> {
        let store = Self::default();
        store
            .inner
            .set("token", token)
            .expect("seed token in test");
        Arc::new(store)
    }

    pub fn ops(&self) -> Vec<StoreOp> {
        self.ops.lock().clone()
    }

    pub fn token(&self) -> Option<String> {
        self.inner.get("token").expect("read token in test")
    }
}

impl KeyValueStore for RecordingStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.ops
            .lock()
            .push(StoreOp::Set(key.to_string(), value.to_string()));
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.ops.lock().push(StoreOp::Remove(key.to_string()));
        self.inner.remove(key)
    }
}

/// Config pointed at the mock backend with short timeouts
pub fn test_config(server: &MockServer) -> ClientConfig {
    ClientConfig {
        api_base_url: server.uri(),
        login_timeout: Duration::from_millis(300),
        request_timeout: Duration::from_millis(300),
        ..ClientConfig::default()
    }
}

pub fn build_app(
    server: &MockServer,
    gateway: Arc<ScriptedGateway>,
    store: Arc<RecordingStore>,
) -> App {
    let config = test_config(server);
    App::with_services(&config, Arc::new(ApiClient::new(&config)), gateway, store)
}

pub fn user_json() -> Value {
    json!({
        "_id": "u1",
        "name": "Asha Rao",
        "email": "user@x.com",
        "phone": "9876543210",
        "flatNumber": "101",
        "wing": "A",
        "floor": "1",
        "role": "resident",
        "isEmailVerified": true
    })
}

pub fn auth_body(token: &str) -> Value {
    json!({ "success": true, "data": { "user": user_json(), "token": token } })
}

pub fn bills_body() -> Value {
    json!({
        "bills": [
            {
                "_id": "b1",
                "type": "maintenance",
                "amount": 150000,
                "description": "March maintenance",
                "dueDate": "2026-03-31T00:00:00.000Z"
            },
            {
                "_id": "b2",
                "type": "gym",
                "amount": 200000,
                "description": "Gym Q1",
                "dueDate": "2026-03-31T00:00:00.000Z"
            }
        ]
    })
}

pub fn order_body(order_id: &str) -> Value {
    json!({ "success": true, "data": { "razorpayOrder": { "id": order_id, "amount": 150000, "currency": "INR" } } })
}

pub fn completed(order_id: &str, payment_id: &str) -> GatewayOutcome {
    GatewayOutcome::Completed(PaymentOutcome {
        razorpay_order_id: order_id.to_string(),
        razorpay_payment_id: payment_id.to_string(),
        razorpay_signature: "sig_abc".to_string(),
    })
}

/// Mount a successful login for `tok1`
pub async fn mount_login(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(auth_body("tok1")))
        .mount(server)
        .await;
}

/// Mount `GET /payments/bills/pending` returning the two canned bills
pub async fn mount_bills(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/payments/bills/pending"))
        .and(header("Authorization", "Bearer tok1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(bills_body()))
        .mount(server)
        .await;
}

/// App signed in as `tok1` with both canned bills loaded
pub async fn signed_in_app(
    server: &MockServer,
    gateway: Arc<ScriptedGateway>,
) -> (App, Arc<RecordingStore>) {
    mount_login(server).await;
    mount_bills(server).await;

    let store = RecordingStore::new();
    let app = build_app(server, gateway, store.clone());
    app.auth
        .login("user@x.com", "secret")
        .await
        .expect("login in test");
    app.payments
        .load_pending_bills()
        .await
        .expect("bills in test");
    (app, store)
}
