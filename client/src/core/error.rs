//! # Common Error Types
//!
//! Consolidated error handling for the society client.
//!
//! This module provides a centralized error type [`AppError`] that every controller
//! returns. Transport errors ([`crate::services::api::ApiError`]) and storage errors
//! ([`crate::services::storage::StorageError`]) never cross the controller boundary
//! as-is; they are converted into one of the categories below.
//!
//! ## Error Categories
//!
//! - **Validation**: Local, pre-network input problems (missing field, bad phone number).
//!   Resolved inline on the form, never shown as an alert.
//! - **Auth**: The backend rejected credentials or the session token.
//! - **Network**: Backend unreachable or the request timed out.
//! - **Api**: The backend refused a non-auth request (e.g. order creation).
//! - **PaymentGateway**: The resident dismissed the checkout or the gateway reported a failure.
//!   No server call was made; the payment can be started again.
//! - **VerificationAmbiguous**: The gateway reported success but the backend could not
//!   confirm it. The charge may have gone through.
//! - **State**: A guard rejected the call (double tap, not signed in, busy).
//! - **Storage**: The device token store failed.
//!
//! ## Usage Pattern
//!
//! ```rust,no_run
//! use society_client::core::error::AppError;
//!
//! fn validate_amount(rupees: u64) -> Result<u64, AppError> {
//!     if rupees == 0 {
//!         return Err(AppError::Validation("Please enter a valid amount greater than 0.".to_string()));
//!     }
//!     Ok(rupees)
//! }
//! ```

use thiserror::Error;

/// Reason the payment gateway returned without a successful payment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// The resident closed the checkout modal.
    #[error("Payment cancelled")]
    Cancelled,

    /// The gateway reported a failure (card declined, network inside the SDK, ...).
    #[error("Payment failed: {description}")]
    Failed {
        code: Option<i64>,
        description: String,
    },
}

/// Application-wide error type covering all error scenarios in the client.
///
/// Each variant includes a descriptive message for context. `Clone` so results can be
/// carried inside [`crate::app::AppEvent`].
///
/// # Example
///
/// ```rust
/// use society_client::core::error::AppError;
///
/// let auth_err = AppError::Auth("Invalid credentials".to_string());
/// let validation_err = AppError::Validation("Phone number must be exactly 10 digits".to_string());
///
/// assert_eq!(auth_err.to_string(), "Authentication error: Invalid credentials");
/// assert!(!validation_err.is_user_visible());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// Input validation error, raised before any network call.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Credentials or token rejected by the backend.
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Backend unreachable or timed out.
    #[error("Network error: {0}")]
    Network(String),

    /// Backend refused a non-auth request.
    #[error("API error: {0}")]
    Api(String),

    /// Checkout dismissed or failed inside the gateway.
    #[error("Payment gateway error: {0}")]
    PaymentGateway(#[from] GatewayError),

    /// The gateway reported success but the backend could not confirm the payment.
    ///
    /// The order and payment ids are kept so the resident can quote them to support.
    #[error("Payment {payment_id} for order {order_id} could not be verified: {reason}")]
    VerificationAmbiguous {
        order_id: String,
        payment_id: String,
        reason: String,
    },

    /// Guard rejection or invalid state transition.
    #[error("State error: {0}")]
    State(String),

    /// Device token store failure.
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    /// Whether this error should be shown to the resident as an alert.
    ///
    /// Validation errors are rendered inline next to the offending field instead.
    pub fn is_user_visible(&self) -> bool {
        !matches!(self, AppError::Validation(_))
    }

    /// Whether the same action may simply be tried again.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            AppError::Network(_) | AppError::PaymentGateway(_) | AppError::Api(_)
        )
    }

    /// Alert title and body for the acting screen.
    pub fn user_message(&self) -> (&'static str, String) {
        match self {
            AppError::Validation(msg) => ("Error", msg.clone()),
            AppError::Auth(msg) => ("Login Failed", msg.clone()),
            AppError::Network(msg) => ("Connection Problem", msg.clone()),
            AppError::Api(msg) => ("Error", msg.clone()),
            AppError::PaymentGateway(GatewayError::Cancelled) => {
                ("Payment Cancelled", "You cancelled the payment.".to_string())
            }
            AppError::PaymentGateway(GatewayError::Failed { description, .. }) => {
                ("Payment Failed", description.clone())
            }
            AppError::VerificationAmbiguous {
                order_id,
                payment_id,
                ..
            } => (
                "Payment Not Confirmed",
                format!(
                    "Your payment may have succeeded but we could not confirm it. \
                     Please do not pay again; contact the society office with \
                     payment ID {} (order {}).",
                    payment_id, order_id
                ),
            ),
            AppError::State(msg) => ("Please Wait", msg.clone()),
            AppError::Storage(msg) => ("Error", msg.clone()),
        }
    }
}

impl From<crate::services::storage::StorageError> for AppError {
    fn from(err: crate::services::storage::StorageError) -> Self {
        AppError::Storage(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_are_inline_only() {
        assert!(!AppError::Validation("Name is required".into()).is_user_visible());
        assert!(AppError::Auth("Invalid credentials".into()).is_user_visible());
        assert!(AppError::Network("timeout".into()).is_user_visible());
    }

    #[test]
    fn test_verification_ambiguous_message_is_distinct() {
        let ambiguous = AppError::VerificationAmbiguous {
            order_id: "order_1".into(),
            payment_id: "pay_1".into(),
            reason: "Signature mismatch".into(),
        };
        let failed = AppError::from(GatewayError::Failed {
            code: Some(2),
            description: "Card declined".into(),
        });

        let (title, body) = ambiguous.user_message();
        assert_eq!(title, "Payment Not Confirmed");
        assert!(body.contains("pay_1"));
        assert!(body.contains("may have succeeded"));
        assert_ne!(title, failed.user_message().0);
        assert!(!ambiguous.is_retryable());
        assert!(failed.is_retryable());
    }

    #[test]
    fn test_cancel_converts_from_gateway_error() {
        let err: AppError = GatewayError::Cancelled.into();
        assert_eq!(err, AppError::PaymentGateway(GatewayError::Cancelled));
        assert_eq!(err.user_message().1, "You cancelled the payment.");
    }
}
