//! # Society App Client - Library Root
//!
//! Resident-side client for a housing-society management backend: sign in,
//! keep the session on the device, list pending bills and pay them through the
//! Razorpay checkout.
//!
//! ## Architecture
//!
//! ### Technology Stack
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              society-client (this crate)               │
//! ├────────────────────────────────────────────────────────┤
//! │  Tokio         - Async runtime                         │
//! │  Reqwest       - HTTP client                           │
//! │  parking_lot   - Shared state locks                    │
//! │  async-channel - UI notifications                      │
//! │  tracing       - Structured logging                    │
//! └────────────────────────────────────────────────────────┘
//!          │                              │
//!          │ HTTP (bearer token)          │ Checkout bridge
//!          ▼                              ▼
//! ┌─────────────────┐          ┌─────────────────────────┐
//! │  Society API    │          │   Razorpay checkout     │
//! │  (/auth, /pay…) │          │   (platform shell)      │
//! └─────────────────┘          └─────────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: Controllers and state
//!   - `session`: the session state machine and token persistence
//!   - `auth`: login, registration, logout, cold-start restore
//!   - `payments`: pending bills, selection, checkout and verification
//! - **core**: Error taxonomy and service traits
//! - **services**: Backend HTTP client, Razorpay bridge, device storage
//! - **config**: Environment-driven configuration
//! - **debug**: Logging setup
//! - **utils**: Form validation
//!
//! ### Module Dependency Graph
//!
//! ```text
//! main.rs
//!   │
//!   └── app (App, controllers, state)
//!       ├── core (AppError, ApiService, PaymentGateway, KeyValueStore)
//!       ├── services::api      (ApiClient)
//!       ├── services::gateway  (BridgeGateway)
//!       ├── services::storage  (FileStore, TokenStore)
//!       └── utils::validation
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use society_client::app::App;
//! use society_client::config::ClientConfig;
//!
//! # async fn run() -> society_client::Result<()> {
//! let config = ClientConfig::default();
//! let (app, _checkouts) = App::new(&config);
//!
//! app.restore_session().await?;
//! if !app.is_authenticated() {
//!     app.auth.login("user@x.com", "secret").await?;
//! }
//! app.payments.load_pending_bills().await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Testing
//!
//! ```bash
//! cargo test -p society-client
//! ```
//!
//! Integration tests under `tests/` run the controllers against a `wiremock`
//! backend and a scripted checkout.

pub mod app;
pub mod config;
pub mod core;
pub mod debug;
pub mod services;
pub mod utils;

pub use app::{App, AppEvent, Screen};
pub use core::{AppError, Result};
