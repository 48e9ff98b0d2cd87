//! # API Client
//!
//! Main HTTP client for backend API communication.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use shared::{
    ApiResponse, AuthData, CreateOrderRequest, LoginRequest, PendingBill, RazorpayOrder,
    RegisterRequest, VerifyPaymentRequest,
};

use super::error::ApiError;
use crate::config::ClientConfig;
use crate::core::service::ApiService;

/// HTTP client for communicating with the society backend.
///
/// This client handles all REST API calls and maintains a connection pool
/// for efficient HTTP/2 multiplexing.
#[derive(Debug, Clone)]
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
    pub(crate) login_timeout: Duration,
}

impl ApiClient {
    /// Create a new API client from configuration.
    ///
    /// All requests share the configured request timeout; login additionally uses
    /// the shorter login timeout.
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            login_timeout: config.login_timeout,
        }
    }

    /// Base URL for API requests (no trailing slash).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach `Authorization: Bearer <token>`.
    pub(crate) fn authorized(builder: RequestBuilder, token: &str) -> RequestBuilder {
        builder.bearer_auth(token)
    }
}

/// Read a `{ success, data, message }` envelope and return `data`.
///
/// `success: false`, a non-2xx status or a missing `data` all count as a rejection,
/// carrying the server message when one is present.
pub(crate) async fn read_envelope<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let body = response.text().await?;

    match serde_json::from_str::<ApiResponse<T>>(&body) {
        Ok(envelope) if status.is_success() && envelope.success => {
            envelope.data.ok_or_else(|| ApiError::Decode("response is missing data".to_string()))
        }
        Ok(envelope) => Err(ApiError::Rejected {
            status: status.as_u16(),
            message: envelope.message,
        }),
        Err(e) if status.is_success() => Err(ApiError::Decode(e.to_string())),
        Err(_) => Err(ApiError::Rejected {
            status: status.as_u16(),
            message: rejection_message(&body),
        }),
    }
}

/// Check an acknowledgement-only response (`2xx`, optional `{ success, message }` body).
///
/// Only for calls whose outcome the client ignores, such as logout.
pub(crate) async fn read_ack(response: Response) -> Result<(), ApiError> {
    let status = response.status();
    let body = response.text().await?;
    let envelope = serde_json::from_str::<ApiResponse<serde_json::Value>>(&body).ok();

    match envelope {
        Some(envelope) if status.is_success() && envelope.success => Ok(()),
        Some(envelope) => Err(ApiError::Rejected {
            status: status.as_u16(),
            message: envelope.message,
        }),
        // Some endpoints answer 204 / plain text
        None if status.is_success() => Ok(()),
        None => Err(ApiError::Rejected {
            status: status.as_u16(),
            message: rejection_message(&body),
        }),
    }
}

/// Check a response that must positively confirm the request.
///
/// Unlike [`read_ack`], a 2xx without a `{ success: true }` envelope is a
/// [`ApiError::Decode`] error.
pub(crate) async fn read_confirmation(response: Response) -> Result<(), ApiError> {
    let status = response.status();
    let body = response.text().await?;

    match serde_json::from_str::<ApiResponse<serde_json::Value>>(&body) {
        Ok(envelope) if status.is_success() && envelope.success => Ok(()),
        Ok(envelope) => Err(ApiError::Rejected {
            status: status.as_u16(),
            message: envelope.message,
        }),
        Err(e) if status.is_success() => Err(ApiError::Decode(e.to_string())),
        Err(_) => Err(ApiError::Rejected {
            status: status.as_u16(),
            message: rejection_message(&body),
        }),
    }
}

/// Best-effort extraction of `message` / `error` from an error body.
pub(crate) fn rejection_message(body: &str) -> Option<String> {
    serde_json::from_str::<shared::ErrorResponse>(body)
        .ok()
        .map(|e| e.message)
        .filter(|m| !m.is_empty())
}

// Implement ApiService trait for ApiClient
#[async_trait]
impl ApiService for ApiClient {
    async fn register(&self, request: RegisterRequest) -> Result<AuthData, ApiError> {
        super::auth::register(self, request).await
    }

    async fn login(&self, request: LoginRequest) -> Result<AuthData, ApiError> {
        super::auth::login(self, request).await
    }

    async fn logout(&self, token: &str) -> Result<(), ApiError> {
        super::auth::logout(self, token).await
    }

    async fn verify_token(&self, token: &str) -> Result<AuthData, ApiError> {
        super::auth::verify_token(self, token).await
    }

    async fn pending_bills(&self, token: &str) -> Result<Vec<PendingBill>, ApiError> {
        super::payments::pending_bills(self, token).await
    }

    async fn create_order(
        &self,
        token: &str,
        request: CreateOrderRequest,
    ) -> Result<RazorpayOrder, ApiError> {
        super::payments::create_order(self, token, request).await
    }

    async fn verify_payment(
        &self,
        token: &str,
        request: VerifyPaymentRequest,
    ) -> Result<(), ApiError> {
        super::payments::verify_payment(self, token, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let config = ClientConfig {
            api_base_url: "http://localhost:5000/api/".to_string(),
            ..ClientConfig::default()
        };
        let client = ApiClient::new(&config);

        assert_eq!(client.base_url(), "http://localhost:5000/api");
        assert_eq!(client.url("/auth/login"), "http://localhost:5000/api/auth/login");
        assert_eq!(client.login_timeout, Duration::from_millis(2000));
    }

    #[test]
    fn test_rejection_message() {
        assert_eq!(
            rejection_message(r#"{"message":"Invalid credentials"}"#),
            Some("Invalid credentials".to_string())
        );
        assert_eq!(
            rejection_message(r#"{"error":"Token expired"}"#),
            Some("Token expired".to_string())
        );
        assert_eq!(rejection_message("<html>502</html>"), None);
        assert_eq!(rejection_message(r#"{"message":""}"#), None);
    }
}
