//! # Payment Gateway Bridge
//!
//! The Razorpay checkout is a native modal owned by the platform SDK. The client
//! core hands it a [`CheckoutOptions`] and waits for exactly one [`GatewayOutcome`].
//!
//! [`BridgeGateway`] is the production [`PaymentGateway`]: it forwards each checkout
//! over a channel to whatever hosts the SDK (the mobile shell) and awaits the reply.
//!
//! ```text
//! PaymentController ──open()──▶ BridgeGateway ──CheckoutRequest──▶ platform shell
//!        ▲                                                            │
//!        └──────────────── GatewayOutcome (oneshot) ◀─────────────────┘
//! ```
//!
//! If the shell drops the request without replying (modal torn down, app
//! backgrounded and killed), the outcome is [`GatewayOutcome::Dismissed`].

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::oneshot;

use shared::VerifyPaymentRequest;

use crate::core::service::PaymentGateway;

/// Options passed to the Razorpay checkout.
///
/// Serializes to the JSON shape the Razorpay SDKs accept, so the platform shell can
/// pass it straight through.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckoutOptions {
    /// Publishable key id (`rzp_test_...` / `rzp_live_...`)
    pub key: String,
    /// Amount in paise; must match the order
    pub amount: u64,
    pub currency: String,
    /// Merchant name shown in the modal header
    pub name: String,
    pub description: String,
    pub order_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub prefill: Prefill,
    pub theme: Theme,
}

/// Contact details pre-filled from the resident profile
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Prefill {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Theme {
    pub color: String,
}

/// Signed success payload from the checkout
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaymentOutcome {
    pub razorpay_order_id: String,
    pub razorpay_payment_id: String,
    pub razorpay_signature: String,
}

impl From<PaymentOutcome> for VerifyPaymentRequest {
    fn from(outcome: PaymentOutcome) -> Self {
        VerifyPaymentRequest {
            razorpay_order_id: outcome.razorpay_order_id,
            razorpay_payment_id: outcome.razorpay_payment_id,
            razorpay_signature: outcome.razorpay_signature,
        }
    }
}

/// How the checkout modal closed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayOutcome {
    /// The gateway captured a payment and signed the result.
    Completed(PaymentOutcome),
    /// The resident closed the modal.
    Dismissed,
    /// The gateway reported an error (`{ code, description }` in the SDK callback).
    Failed {
        code: Option<i64>,
        description: String,
    },
}

/// A checkout waiting for the platform shell
#[derive(Debug)]
pub struct CheckoutRequest {
    pub options: CheckoutOptions,
    reply: oneshot::Sender<GatewayOutcome>,
}

impl CheckoutRequest {
    /// Report how the modal closed. Consumes the request; a checkout has one outcome.
    pub fn resolve(self, outcome: GatewayOutcome) {
        if self.reply.send(outcome).is_err() {
            tracing::warn!(
                order_id = %self.options.order_id,
                "Checkout outcome arrived after the payment flow stopped waiting"
            );
        }
    }
}

/// [`PaymentGateway`] that hands checkouts to the platform shell over a channel.
#[derive(Debug, Clone)]
pub struct BridgeGateway {
    requests: async_channel::Sender<CheckoutRequest>,
}

impl BridgeGateway {
    /// Create the bridge and the receiving end the platform shell listens on.
    pub fn new() -> (Self, async_channel::Receiver<CheckoutRequest>) {
        let (tx, rx) = async_channel::unbounded();
        (Self { requests: tx }, rx)
    }
}

#[async_trait]
impl PaymentGateway for BridgeGateway {
    #[tracing::instrument(skip(self, checkout), fields(order_id = %checkout.order_id, amount = checkout.amount))]
    async fn open(&self, checkout: CheckoutOptions) -> GatewayOutcome {
        let (reply, outcome) = oneshot::channel();
        let request = CheckoutRequest {
            options: checkout,
            reply,
        };

        if self.requests.send(request).await.is_err() {
            tracing::error!("No platform shell is listening for checkouts");
            return GatewayOutcome::Failed {
                code: None,
                description: "Payment service is not available on this device.".to_string(),
            };
        }

        match outcome.await {
            Ok(outcome) => outcome,
            Err(_) => {
                tracing::info!("Checkout dropped without an outcome; treating as dismissed");
                GatewayOutcome::Dismissed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> CheckoutOptions {
        CheckoutOptions {
            key: "rzp_test_key".to_string(),
            amount: 100_000,
            currency: "INR".to_string(),
            name: "Society App".to_string(),
            description: "Payment for Society Maintenance".to_string(),
            order_id: "order_1".to_string(),
            image: None,
            prefill: Prefill {
                email: Some("asha@example.com".to_string()),
                ..Default::default()
            },
            theme: Theme {
                color: "#007AFF".to_string(),
            },
        }
    }

    #[test]
    fn test_checkout_options_match_sdk_shape() {
        let json = serde_json::to_value(options()).unwrap();

        assert_eq!(json["order_id"], "order_1");
        assert_eq!(json["amount"], 100_000);
        assert_eq!(json["prefill"]["email"], "asha@example.com");
        assert!(json["prefill"].get("contact").is_none());
        assert!(json.get("image").is_none());
    }

    #[tokio::test]
    async fn test_bridge_returns_shell_outcome() {
        let (gateway, shell) = BridgeGateway::new();

        tokio::spawn(async move {
            let request = shell.recv().await.unwrap();
            assert_eq!(request.options.order_id, "order_1");
            request.resolve(GatewayOutcome::Completed(PaymentOutcome {
                razorpay_order_id: "order_1".to_string(),
                razorpay_payment_id: "pay_1".to_string(),
                razorpay_signature: "sig".to_string(),
            }));
        });

        match gateway.open(options()).await {
            GatewayOutcome::Completed(outcome) => assert_eq!(outcome.razorpay_payment_id, "pay_1"),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_dropped_request_is_dismissed() {
        let (gateway, shell) = BridgeGateway::new();

        tokio::spawn(async move {
            let request = shell.recv().await.unwrap();
            drop(request);
        });

        assert_eq!(gateway.open(options()).await, GatewayOutcome::Dismissed);
    }

    #[tokio::test]
    async fn test_missing_shell_is_a_gateway_failure() {
        let (gateway, shell) = BridgeGateway::new();
        drop(shell);

        assert!(matches!(
            gateway.open(options()).await,
            GatewayOutcome::Failed { code: None, .. }
        ));
    }
}
