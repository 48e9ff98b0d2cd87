//! # Service Traits
//!
//! Traits for dependency injection, enabling better testability and modularity.
//!
//! The controllers in [`crate::app`] only ever talk to these traits:
//!
//! - [`ApiService`]: the society backend (implemented by [`crate::services::api::ApiClient`])
//! - [`PaymentGateway`]: the hosted Razorpay checkout (implemented by
//!   [`crate::services::gateway::BridgeGateway`])
//! - [`KeyValueStore`]: device-local storage (implemented by
//!   [`crate::services::storage::MemoryStore`] and [`crate::services::storage::FileStore`])

use async_trait::async_trait;
use shared::{
    AuthData, CreateOrderRequest, LoginRequest, PendingBill, RazorpayOrder, RegisterRequest,
    VerifyPaymentRequest,
};

use crate::services::api::ApiError;
use crate::services::gateway::{CheckoutOptions, GatewayOutcome};
use crate::services::storage::StorageError;

/// Trait for backend API operations
///
/// Every method is a single request/response cycle. Authenticated calls take the
/// bearer token explicitly; the service never caches it.
#[async_trait]
pub trait ApiService: Send + Sync {
    /// `POST /auth/register`
    async fn register(&self, request: RegisterRequest) -> Result<AuthData, ApiError>;

    /// `POST /auth/login` (bounded by the configured login timeout)
    async fn login(&self, request: LoginRequest) -> Result<AuthData, ApiError>;

    /// `POST /auth/logout`
    async fn logout(&self, token: &str) -> Result<(), ApiError>;

    /// `GET /auth/verify`
    async fn verify_token(&self, token: &str) -> Result<AuthData, ApiError>;

    /// `GET /payments/bills/pending`
    async fn pending_bills(&self, token: &str) -> Result<Vec<PendingBill>, ApiError>;

    /// `POST /payments/create-order`
    async fn create_order(
        &self,
        token: &str,
        request: CreateOrderRequest,
    ) -> Result<RazorpayOrder, ApiError>;

    /// `POST /payments/verify-razorpay`
    async fn verify_payment(
        &self,
        token: &str,
        request: VerifyPaymentRequest,
    ) -> Result<(), ApiError>;
}

/// Trait for the external payment gateway
///
/// `open` resolves when the checkout modal is closed, however long that takes.
/// A dismissed modal is a normal [`GatewayOutcome::Dismissed`], not an error.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn open(&self, checkout: CheckoutOptions) -> GatewayOutcome;
}

/// Trait for device-local key-value storage
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
