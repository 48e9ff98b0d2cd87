//! # Application Orchestrator
//!
//! [`App`] wires the controllers to their services and owns the one session of
//! the process.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     UI / platform shell                     │
//! │   reads state, calls controllers, drains AppEvents          │
//! └───────┬──────────────────────────────┬──────────────────────┘
//!         │                              │ CheckoutRequest
//! ┌───────▼──────────────────────┐       │ (BridgeGateway)
//! │  App                         │       │
//! │  ├── AuthController ─────────┼──┐    │
//! │  └── PaymentController ──────┼──┤    │
//! └───────┬──────────────────────┘  │    │
//!         │                         │    │
//! ┌───────▼──────────────────────┐  │  ┌─▼──────────────────┐
//! │ Arc<RwLock<SessionMachine>>  │  │  │ Razorpay checkout  │
//! │ Arc<RwLock<PaymentState>>    │  │  └────────────────────┘
//! └──────────────────────────────┘  │
//!                                   ▼
//!                           ApiService (reqwest)
//! ```
//!
//! ## State Management Pattern
//!
//! Shared state sits behind `Arc<parking_lot::RwLock<..>>`. Locks are taken
//! for a single statement or block and never held across an `.await`.
//! Overlapping operations are rejected by guards in the state itself
//! (session status, bill `loading` flag, payment phase) instead of queued.
//!
//! ## Event-Driven Communication
//!
//! Controllers emit [`AppEvent`]s after every state change:
//!
//! ```rust,ignore
//! while let Ok(event) = app.events().try_recv() {
//!     render(&app, event);
//! }
//! ```

pub mod auth;
pub mod bills;
pub mod events;
pub mod payments;
pub mod session;
pub mod state;

pub use auth::AuthController;
pub use bills::{BillCache, Selection};
pub use events::{AppEvent, EventSender};
pub use payments::{PaymentController, PaymentReceipt};
pub use session::{Session, SessionMachine, SessionStatus};
pub use state::{PaymentPhase, PaymentState, Screen};

use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::ClientConfig;
use crate::core::error::{AppError, Result};
use crate::core::service::{ApiService, KeyValueStore, PaymentGateway};
use crate::services::api::ApiClient;
use crate::services::gateway::{BridgeGateway, CheckoutRequest};
use crate::services::storage::{FileStore, TokenStore};

/// Main application orchestrator
pub struct App {
    pub auth: AuthController,
    pub payments: PaymentController,
    session: Arc<RwLock<SessionMachine>>,
    events: async_channel::Receiver<AppEvent>,
}

impl App {
    /// Build the production wiring: HTTP backend, file token store and the
    /// bridged Razorpay checkout.
    ///
    /// The returned receiver yields checkouts for the platform shell to open.
    pub fn new(config: &ClientConfig) -> (Self, async_channel::Receiver<CheckoutRequest>) {
        let api = Arc::new(ApiClient::new(config));
        let store = Arc::new(FileStore::new(&config.storage_path));
        let (gateway, checkouts) = BridgeGateway::new();

        tracing::info!(
            api_base_url = %config.api_base_url,
            storage = %config.storage_path.display(),
            "Client services initialized"
        );

        (
            Self::with_services(config, api, Arc::new(gateway), store),
            checkouts,
        )
    }

    /// Build with explicit services
    pub fn with_services(
        config: &ClientConfig,
        api: Arc<dyn ApiService>,
        gateway: Arc<dyn PaymentGateway>,
        store: Arc<dyn KeyValueStore>,
    ) -> Self {
        let session = Arc::new(RwLock::new(SessionMachine::new(TokenStore::new(store))));
        let (events, receiver) = EventSender::channel();

        let auth = AuthController::new(Arc::clone(&api), Arc::clone(&session), events.clone());
        let payments = PaymentController::new(
            api,
            gateway,
            Arc::clone(&session),
            config.gateway.clone(),
            events,
        );

        Self {
            auth,
            payments,
            session,
            events: receiver,
        }
    }

    /// Shared session handle
    pub fn session(&self) -> Arc<RwLock<SessionMachine>> {
        Arc::clone(&self.session)
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.read().is_authenticated()
    }

    /// Screen matching the current session status
    pub fn current_screen(&self) -> Screen {
        Screen::landing_for(self.session.read().status())
    }

    /// Event stream for the UI
    pub fn events(&self) -> async_channel::Receiver<AppEvent> {
        self.events.clone()
    }

    /// Cold start: verify the stored token before showing any screen.
    ///
    /// Returns the screen to show.
    pub async fn restore_session(&self) -> Result<Screen> {
        self.auth.verify_token().await?;
        Ok(self.current_screen())
    }

    /// Sign out and drop all cached payment state.
    pub async fn logout(&self) -> Result<()> {
        let result = self.auth.logout().await;
        if !matches!(result, Err(AppError::State(_))) {
            self.payments.reset();
        }
        result
    }
}
