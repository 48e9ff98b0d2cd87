//! # Application State Types
//!
//! Screens and payment flow state. Session state lives in [`super::session`].

use super::bills::BillCache;
use super::session::SessionStatus;

/// Application screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Shown while the stored token is being verified
    Splash,
    Login,
    Register,
    /// Resident home with pending bills
    Dashboard,
    /// Bill / ad-hoc payment form
    Payment,
}

impl Screen {
    /// Get screen title for header display
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Splash => "Society App",
            Screen::Login => "Login",
            Screen::Register => "Register",
            Screen::Dashboard => "Dashboard",
            Screen::Payment => "Make Payment",
        }
    }

    /// Check if screen requires authentication
    pub fn requires_auth(&self) -> bool {
        matches!(self, Screen::Dashboard | Screen::Payment)
    }

    /// Where a session in `status` should land
    pub fn landing_for(status: &SessionStatus) -> Screen {
        match status {
            SessionStatus::Restoring => Screen::Splash,
            SessionStatus::Authenticated => Screen::Dashboard,
            _ => Screen::Login,
        }
    }
}

/// Where a payment currently stands
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PaymentPhase {
    /// Nothing in flight; a payment may be initiated
    #[default]
    Ready,
    CreatingOrder,
    /// Checkout modal open, waiting for the resident
    AwaitingGateway { order_id: String },
    /// Gateway outcome forwarded to the backend
    Verifying { order_id: String },
    Succeeded { payment_id: String },
    /// Modal dismissed; the same selection can be paid again
    Cancelled,
    /// Order creation or the gateway failed; no money moved
    Failed { reason: String },
    /// Gateway captured the payment, the backend did not confirm it.
    ///
    /// Blocks new payments until acknowledged.
    Unconfirmed { order_id: String, payment_id: String },
}

impl PaymentPhase {
    /// A request or the checkout modal is outstanding
    pub fn is_in_flight(&self) -> bool {
        matches!(
            self,
            PaymentPhase::CreatingOrder
                | PaymentPhase::AwaitingGateway { .. }
                | PaymentPhase::Verifying { .. }
        )
    }

    /// Whether `initiate` is allowed from here
    pub fn can_initiate(&self) -> bool {
        !self.is_in_flight() && !matches!(self, PaymentPhase::Unconfirmed { .. })
    }
}

/// Payment screen state: the bill cache and the flow phase
#[derive(Debug, Clone, Default)]
pub struct PaymentState {
    pub cache: BillCache,
    pub phase: PaymentPhase,
}

impl PaymentState {
    /// Drop everything, e.g. on logout
    pub fn reset(&mut self) {
        *self = PaymentState::default();
    }
}
