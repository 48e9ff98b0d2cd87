//! # Payment Controller
//!
//! Pending bills, payment selection and the Razorpay checkout flow.
//!
//! ## Payment Flow
//!
//! ```text
//! initiate()
//!   │ validate selection (amount > 0)
//!   ▼
//! POST /payments/create-order ──▶ order id
//!   │
//!   ▼
//! PaymentGateway::open() ── Dismissed ──▶ Cancelled   (re-initiable)
//!   │                    └─ Failed ─────▶ Failed      (re-initiable)
//!   │ Completed
//!   ▼
//! POST /payments/verify-razorpay (once)
//!   ├─ ok ───────▶ Succeeded   (selection cleared)
//!   └─ any error ▶ Unconfirmed (blocks initiate until acknowledged)
//! ```
//!
//! Amounts enter in rupees and leave in paise; the conversion happens once in
//! [`Selection::amount_paise`].

use std::sync::Arc;

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use parking_lot::RwLock;
use shared::{BillType, CreateOrderRequest, PendingBill, UserProfile};
use tracing::Instrument;

use super::auth::NETWORK_ERROR_MESSAGE;
use super::bills::Selection;
use super::events::{AppEvent, EventSender};
use super::session::SessionMachine;
use super::state::{PaymentPhase, PaymentState};
use crate::config::GatewayConfig;
use crate::core::error::{AppError, GatewayError, Result};
use crate::core::service::{ApiService, PaymentGateway};
use crate::debug::new_trace_id;
use crate::services::api::ApiError;
use crate::services::gateway::{CheckoutOptions, GatewayOutcome, Prefill, Theme};

/// Days until an ad-hoc charge falls due
const AD_HOC_DUE_DAYS: i64 = 7;

/// Result of a verified payment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentReceipt {
    pub order_id: String,
    pub payment_id: String,
    /// Amount in paise
    pub amount: u64,
    pub bill_id: Option<String>,
}

/// Convert a failed payments call into a client error.
pub(crate) fn payment_api_error(err: ApiError, fallback: &str) -> AppError {
    match err {
        ApiError::Timeout => AppError::Network(NETWORK_ERROR_MESSAGE.to_string()),
        ApiError::Transport(msg) => {
            tracing::debug!(detail = %msg, "Payments request did not reach the backend");
            AppError::Network(NETWORK_ERROR_MESSAGE.to_string())
        }
        ApiError::Rejected { status: 401, message } => AppError::Auth(
            message.unwrap_or_else(|| "Session expired. Please log in again.".to_string()),
        ),
        ApiError::Rejected { message, .. } => {
            AppError::Api(message.unwrap_or_else(|| fallback.to_string()))
        }
        ApiError::Decode(detail) => {
            tracing::warn!(detail = %detail, "Unreadable payments response");
            AppError::Api(fallback.to_string())
        }
    }
}

/// Description sent with ad-hoc orders and shown in the checkout header
fn ad_hoc_description(bill_type: BillType) -> String {
    format!("Payment for {}", bill_type.label())
}

/// Build the `create-order` body for a selection.
///
/// Bill payments send only the bill id and amount; ad-hoc payments describe the
/// charge, due seven days from `now`.
pub fn order_request(selection: &Selection, amount: u64, now: DateTime<Utc>) -> CreateOrderRequest {
    match selection {
        Selection::Bill(bill) => CreateOrderRequest {
            bill_id: Some(bill.id.clone()),
            amount,
            ..Default::default()
        },
        Selection::AdHoc { bill_type, .. } => CreateOrderRequest {
            bill_id: None,
            amount,
            bill_type: Some(*bill_type),
            description: Some(ad_hoc_description(*bill_type)),
            due_date: Some(
                (now + Duration::days(AD_HOC_DUE_DAYS)).to_rfc3339_opts(SecondsFormat::Millis, true),
            ),
            month: Some(now.format("%m").to_string()),
            year: Some(now.format("%Y").to_string()),
        },
    }
}

/// Build the checkout options for an order.
pub fn checkout_options(
    config: &GatewayConfig,
    selection: &Selection,
    amount: u64,
    order_id: &str,
    user: Option<&UserProfile>,
) -> CheckoutOptions {
    let description = match selection {
        Selection::Bill(bill) if !bill.description.is_empty() => bill.description.clone(),
        other => ad_hoc_description(other.bill_type()),
    };

    CheckoutOptions {
        key: config.key_id.clone(),
        amount,
        currency: config.currency.clone(),
        name: config.merchant_name.clone(),
        description,
        order_id: order_id.to_string(),
        image: config.logo_url.clone(),
        prefill: Prefill {
            name: user.map(|u| u.name.clone()).filter(|n| !n.is_empty()),
            email: user.map(|u| u.email.clone()).filter(|e| !e.is_empty()),
            contact: user.and_then(|u| u.phone.clone()).filter(|p| !p.is_empty()),
        },
        theme: Theme {
            color: config.theme_color.clone(),
        },
    }
}

/// Drives bill loading, selection and checkout.
#[derive(Clone)]
pub struct PaymentController {
    api: Arc<dyn ApiService>,
    gateway: Arc<dyn PaymentGateway>,
    session: Arc<RwLock<SessionMachine>>,
    state: Arc<RwLock<PaymentState>>,
    config: GatewayConfig,
    events: EventSender,
}

impl PaymentController {
    pub fn new(
        api: Arc<dyn ApiService>,
        gateway: Arc<dyn PaymentGateway>,
        session: Arc<RwLock<SessionMachine>>,
        config: GatewayConfig,
        events: EventSender,
    ) -> Self {
        Self {
            api,
            gateway,
            session,
            state: Arc::new(RwLock::new(PaymentState::default())),
            config,
            events,
        }
    }

    /// Shared payment state handle, for rendering
    pub fn state(&self) -> Arc<RwLock<PaymentState>> {
        Arc::clone(&self.state)
    }

    pub fn bills(&self) -> Vec<PendingBill> {
        self.state.read().cache.bills().to_vec()
    }

    pub fn selection(&self) -> Selection {
        self.state.read().cache.selection().clone()
    }

    pub fn phase(&self) -> PaymentPhase {
        self.state.read().phase.clone()
    }

    /// Fetch pending bills and replace the cache.
    ///
    /// On failure the previously cached bills are kept. Returns the bill count.
    pub async fn load_pending_bills(&self) -> Result<usize> {
        let token = self.token()?;
        self.state.write().cache.begin_refresh()?;

        let span = tracing::info_span!("load_pending_bills", trace_id = %new_trace_id());
        let result = self.api.pending_bills(&token).instrument(span).await;

        let outcome = match result {
            Ok(bills) => {
                let count = bills.len();
                self.state.write().cache.replace(bills);
                tracing::info!(count, "Pending bills refreshed");
                Ok(count)
            }
            Err(e) => {
                self.state.write().cache.abort_refresh();
                let err = payment_api_error(e, "Failed to load pending bills");
                tracing::warn!(error = %err, "Pending bill refresh failed; keeping cached bills");
                Err(err)
            }
        };

        self.events.emit(AppEvent::BillsUpdated(outcome.clone()));
        outcome
    }

    /// Pay a cached bill. Clears any ad-hoc choice.
    pub fn select_bill(&self, bill_id: &str) -> Result<PendingBill> {
        let mut state = self.state.write();
        Self::ensure_idle(&state.phase)?;
        state.cache.select_bill(bill_id)
    }

    /// Pay an ad-hoc type. Clears any selected bill; `None` uses the type's default amount.
    pub fn select_ad_hoc(&self, bill_type: BillType, amount_rupees: Option<u64>) -> Result<()> {
        let mut state = self.state.write();
        Self::ensure_idle(&state.phase)?;
        state.cache.select_ad_hoc(bill_type, amount_rupees)
    }

    /// Edit the ad-hoc amount in rupees. Rejected while a bill is selected.
    pub fn set_amount(&self, amount_rupees: u64) -> Result<()> {
        let mut state = self.state.write();
        Self::ensure_idle(&state.phase)?;
        state.cache.set_amount(amount_rupees)
    }

    /// Run one payment for the current selection.
    ///
    /// Cancelled and failed checkouts leave the selection in place so the resident
    /// can try again. A payment the backend could not verify is reported as
    /// [`AppError::VerificationAmbiguous`] and is never retried.
    pub async fn initiate(&self) -> Result<PaymentReceipt> {
        let (token, user) = {
            let session = self.session.read();
            let token = session
                .token()
                .map(str::to_string)
                .ok_or_else(|| AppError::Auth("Please log in to make a payment".to_string()))?;
            (token, session.user().cloned())
        };

        let (selection, amount) = {
            let mut state = self.state.write();
            if !state.phase.can_initiate() {
                if let PaymentPhase::Unconfirmed { payment_id, .. } = &state.phase {
                    return Err(AppError::State(format!(
                        "Payment {} is still unconfirmed. Contact the society office before paying again.",
                        payment_id
                    )));
                }
                return Err(AppError::State(
                    "A payment is already in progress".to_string(),
                ));
            }

            let selection = state.cache.selection().clone();
            let amount = selection.amount_paise()?;
            if amount == 0 {
                return Err(AppError::Validation(
                    "Please enter a valid amount greater than 0.".to_string(),
                ));
            }

            state.phase = PaymentPhase::CreatingOrder;
            (selection, amount)
        };
        self.progress();

        let span = tracing::info_span!(
            "payment",
            trace_id = %new_trace_id(),
            bill_type = selection.bill_type().as_str(),
            amount
        );
        let outcome = self
            .run_checkout(&token, user.as_ref(), &selection, amount)
            .instrument(span)
            .await;

        self.events.emit(AppEvent::PaymentFinished(
            outcome.as_ref().map(|r| r.payment_id.clone()).map_err(Clone::clone),
        ));
        outcome
    }

    /// Clear an unconfirmed payment once the resident has seen the warning.
    ///
    /// Returns the `(order_id, payment_id)` pair to quote to support.
    pub fn acknowledge_unconfirmed(&self) -> Option<(String, String)> {
        let acknowledged = {
            let mut state = self.state.write();
            match std::mem::take(&mut state.phase) {
                PaymentPhase::Unconfirmed {
                    order_id,
                    payment_id,
                } => Some((order_id, payment_id)),
                other => {
                    state.phase = other;
                    None
                }
            }
        };

        if let Some((order_id, payment_id)) = &acknowledged {
            tracing::info!(%order_id, %payment_id, "Unconfirmed payment acknowledged");
            self.progress();
        }
        acknowledged
    }

    /// Drop bills, selection and phase, e.g. after logout
    pub fn reset(&self) {
        self.state.write().reset();
        self.progress();
    }

    async fn run_checkout(
        &self,
        token: &str,
        user: Option<&UserProfile>,
        selection: &Selection,
        amount: u64,
    ) -> Result<PaymentReceipt> {
        let start = std::time::Instant::now();

        // 1. Order
        let request = order_request(selection, amount, Utc::now());
        let order = match self.api.create_order(token, request).await {
            Ok(order) if !order.id.is_empty() => order,
            Ok(_) => {
                return Err(self.fail("Payment order was not created".to_string()));
            }
            Err(e) => {
                let err = payment_api_error(e, "Failed to create payment order");
                tracing::warn!(error = %err, "Order creation failed");
                return Err(self.fail_with(err));
            }
        };
        let order_id = order.id;
        tracing::info!(%order_id, "Payment order created");

        // 2. Checkout
        self.set_phase(PaymentPhase::AwaitingGateway {
            order_id: order_id.clone(),
        });
        let options = checkout_options(&self.config, selection, amount, &order_id, user);
        let payment = match self.gateway.open(options).await {
            GatewayOutcome::Completed(payment) => payment,
            GatewayOutcome::Dismissed => {
                tracing::info!(%order_id, "Checkout dismissed");
                self.set_phase(PaymentPhase::Cancelled);
                return Err(GatewayError::Cancelled.into());
            }
            GatewayOutcome::Failed { code, description } => {
                tracing::warn!(%order_id, ?code, %description, "Checkout failed");
                self.set_phase(PaymentPhase::Failed {
                    reason: description.clone(),
                });
                return Err(GatewayError::Failed { code, description }.into());
            }
        };

        if payment.razorpay_order_id != order_id {
            tracing::warn!(
                %order_id,
                gateway_order_id = %payment.razorpay_order_id,
                "Gateway returned a different order id"
            );
        }

        // 3. Verification, exactly once
        let payment_id = payment.razorpay_payment_id.clone();
        self.set_phase(PaymentPhase::Verifying {
            order_id: order_id.clone(),
        });

        match self.api.verify_payment(token, payment.into()).await {
            Ok(()) => {
                {
                    let mut state = self.state.write();
                    state.cache.clear_selection();
                    state.phase = PaymentPhase::Succeeded {
                        payment_id: payment_id.clone(),
                    };
                }
                self.progress();

                tracing::info!(
                    %order_id,
                    %payment_id,
                    duration_ms = start.elapsed().as_millis() as u64,
                    "Payment verified"
                );
                Ok(PaymentReceipt {
                    order_id,
                    payment_id,
                    amount,
                    bill_id: selection.bill_id().map(str::to_string),
                })
            }
            Err(e) => {
                let reason = e
                    .server_message()
                    .map(str::to_string)
                    .unwrap_or_else(|| e.to_string());
                tracing::error!(
                    %order_id,
                    %payment_id,
                    %reason,
                    "Payment captured by gateway but not verified"
                );
                self.set_phase(PaymentPhase::Unconfirmed {
                    order_id: order_id.clone(),
                    payment_id: payment_id.clone(),
                });
                Err(AppError::VerificationAmbiguous {
                    order_id,
                    payment_id,
                    reason,
                })
            }
        }
    }

    fn token(&self) -> Result<String> {
        self.session
            .read()
            .token()
            .map(str::to_string)
            .ok_or_else(|| AppError::Auth("Please log in to continue".to_string()))
    }

    fn ensure_idle(phase: &PaymentPhase) -> Result<()> {
        if phase.is_in_flight() {
            return Err(AppError::State(
                "A payment is already in progress".to_string(),
            ));
        }
        Ok(())
    }

    fn fail(&self, reason: String) -> AppError {
        self.fail_with(AppError::Api(reason))
    }

    fn fail_with(&self, err: AppError) -> AppError {
        self.set_phase(PaymentPhase::Failed {
            reason: err.user_message().1,
        });
        err
    }

    fn set_phase(&self, phase: PaymentPhase) {
        self.state.write().phase = phase;
        self.progress();
    }

    fn progress(&self) {
        let phase = self.state.read().phase.clone();
        self.events.emit(AppEvent::PaymentProgress(phase));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 28, 10, 30, 0).unwrap()
    }

    #[test]
    fn test_bill_order_sends_only_id_and_amount() {
        let bill = PendingBill {
            id: "b1".to_string(),
            bill_type: BillType::Maintenance,
            amount: 150_000,
            description: "March maintenance".to_string(),
            due_date: "2026-03-31".to_string(),
        };

        let request = order_request(&Selection::Bill(bill), 150_000, now());
        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(body, serde_json::json!({ "billId": "b1", "amount": 150000 }));
    }

    #[test]
    fn test_ad_hoc_order_describes_charge() {
        let request = order_request(&Selection::ad_hoc(BillType::Gym), 200_000, now());

        assert_eq!(request.amount, 200_000);
        assert_eq!(request.bill_type, Some(BillType::Gym));
        assert_eq!(request.description.as_deref(), Some("Payment for Gym Membership"));
        assert_eq!(request.due_date.as_deref(), Some("2026-04-04T10:30:00.000Z"));
        assert_eq!(request.month.as_deref(), Some("03"));
        assert_eq!(request.year.as_deref(), Some("2026"));
    }

    #[test]
    fn test_checkout_options_use_profile_and_config() {
        let user = UserProfile {
            email: "user@x.com".to_string(),
            phone: Some("9876543210".to_string()),
            ..Default::default()
        };
        let config = GatewayConfig::default();

        let options = checkout_options(
            &config,
            &Selection::ad_hoc(BillType::Maintenance),
            100_000,
            "order_1",
            Some(&user),
        );

        assert_eq!(options.order_id, "order_1");
        assert_eq!(options.amount, 100_000);
        assert_eq!(options.currency, "INR");
        assert_eq!(options.name, "Society App");
        assert_eq!(options.theme.color, "#007AFF");
        assert_eq!(options.prefill.email.as_deref(), Some("user@x.com"));
        assert_eq!(options.prefill.contact.as_deref(), Some("9876543210"));
        assert_eq!(options.prefill.name, None);
    }

    #[test]
    fn test_unauthorized_maps_to_auth() {
        let err = payment_api_error(
            ApiError::Rejected {
                status: 401,
                message: None,
            },
            "Failed to create payment order",
        );
        assert!(matches!(err, AppError::Auth(_)));

        let err = payment_api_error(
            ApiError::Rejected {
                status: 400,
                message: None,
            },
            "Failed to create payment order",
        );
        assert_eq!(err, AppError::Api("Failed to create payment order".to_string()));
    }
}
