//! # Auth Controller
//!
//! Login, registration, logout and cold-start token verification.
//!
//! ```text
//! UI ──▶ AuthController ──▶ ApiService (HTTP)
//!             │
//!             ├──▶ SessionMachine (status, profile, token store)
//!             └──▶ EventSender (SessionChanged)
//! ```
//!
//! Every transport failure is converted to an [`AppError`] here; callers never
//! see an [`ApiError`].

use std::sync::Arc;

use parking_lot::RwLock;
use shared::{AuthData, LoginRequest, RegisterRequest, UserProfile};
use tracing::Instrument;

use super::events::{AppEvent, EventSender};
use super::session::SessionMachine;
use crate::core::error::{AppError, Result};
use crate::core::service::ApiService;
use crate::debug::new_trace_id;
use crate::services::api::ApiError;
use crate::utils::validation::{validate_login, validate_registration};

/// Shown when the backend cannot be reached or does not answer in time
pub const NETWORK_ERROR_MESSAGE: &str = "Network error or server unreachable";

/// Convert a failed auth call into the error shown on the login / register screen.
pub(crate) fn auth_error(err: ApiError, fallback: &str) -> AppError {
    match err {
        ApiError::Timeout => AppError::Network(NETWORK_ERROR_MESSAGE.to_string()),
        ApiError::Transport(msg) if msg.is_empty() => {
            AppError::Network(NETWORK_ERROR_MESSAGE.to_string())
        }
        ApiError::Transport(msg) => AppError::Network(msg),
        ApiError::Rejected { message, .. } => {
            AppError::Auth(message.unwrap_or_else(|| fallback.to_string()))
        }
        ApiError::Decode(detail) => {
            tracing::warn!(detail = %detail, "Unreadable auth response");
            AppError::Auth(fallback.to_string())
        }
    }
}

/// Drives the session through login, registration, logout and restore.
#[derive(Clone)]
pub struct AuthController {
    api: Arc<dyn ApiService>,
    session: Arc<RwLock<SessionMachine>>,
    events: EventSender,
}

impl AuthController {
    pub fn new(
        api: Arc<dyn ApiService>,
        session: Arc<RwLock<SessionMachine>>,
        events: EventSender,
    ) -> Self {
        Self {
            api,
            session,
            events,
        }
    }

    /// Shared session handle
    pub fn session(&self) -> Arc<RwLock<SessionMachine>> {
        Arc::clone(&self.session)
    }

    /// Register a new resident and sign them in.
    ///
    /// Invalid input fails with [`AppError::Validation`] before any request is sent.
    pub async fn register(&self, request: RegisterRequest) -> Result<UserProfile> {
        validate_registration(&request)?;

        let span = tracing::info_span!("register", trace_id = %new_trace_id());
        async {
            self.begin()?;
            let result = self.api.register(request).await;
            self.finish(result, "Registration failed")
        }
        .instrument(span)
        .await
    }

    /// Sign in with email and password.
    ///
    /// A second call while one is outstanding is rejected with [`AppError::State`].
    pub async fn login(&self, email: &str, password: &str) -> Result<UserProfile> {
        validate_login(email, password)?;

        let span = tracing::info_span!("login", trace_id = %new_trace_id());
        async {
            self.begin()?;
            let request = LoginRequest {
                email: email.trim().to_string(),
                password: password.to_string(),
            };
            let result = self.api.login(request).await;
            self.finish(result, "Login failed")
        }
        .instrument(span)
        .await
    }

    /// Sign out.
    ///
    /// The session always ends `Idle` with the stored token deleted. An `Err` only
    /// reports that the backend could not invalidate the token, or
    /// [`AppError::State`] when a sign-in, restore or logout is still running (the
    /// session is then left untouched).
    pub async fn logout(&self) -> Result<()> {
        let span = tracing::info_span!("logout", trace_id = %new_trace_id());
        async {
            let begun = {
                let mut session = self.session.write();
                if session.status().is_busy() {
                    return Err(AppError::State(
                        "Please wait for the current sign-in to finish".to_string(),
                    ));
                }
                session.begin_logout()
            };
            let token = match begun {
                Ok(token) => token,
                Err(_) => {
                    // Nothing to invalidate remotely; still make sure nothing lingers locally
                    self.session.write().reset();
                    self.notify();
                    return Ok(());
                }
            };
            self.notify();

            let result = self.api.logout(&token).await;

            self.session.write().finish_logout();
            self.notify();

            result.map_err(|e| {
                tracing::warn!(error = %e, "Backend logout failed; local session cleared anyway");
                match e {
                    ApiError::Timeout | ApiError::Transport(_) => {
                        AppError::Network(NETWORK_ERROR_MESSAGE.to_string())
                    }
                    other => AppError::Api(other.to_string()),
                }
            })
        }
        .instrument(span)
        .await
    }

    /// Restore a session from the stored token.
    ///
    /// Returns `Ok(false)` without a request when no token is stored. Any
    /// verification failure deletes the token and leaves the session `Idle`.
    pub async fn verify_token(&self) -> Result<bool> {
        let stored = self.session.read().stored_token();
        let token = match stored {
            Ok(Some(token)) => token,
            Ok(None) => return Ok(false),
            Err(e) => {
                tracing::warn!(error = %e, "Stored token unreadable; starting signed out");
                self.session.write().reset();
                return Ok(false);
            }
        };

        let span = tracing::info_span!("restore_session", trace_id = %new_trace_id());
        async {
            self.session.write().begin_restore()?;
            self.notify();

            let result = self.api.verify_token(&token).await;

            let restored = match result {
                Ok(data) => {
                    let token = if data.token.is_empty() { token } else { data.token };
                    let completed = self.session.write().complete_auth(data.user, token);
                    completed.is_ok()
                }
                Err(e) => {
                    self.session.write().abort_restore(&e.to_string());
                    false
                }
            };
            self.notify();

            tracing::info!(restored, "Session restore finished");
            Ok(restored)
        }
        .instrument(span)
        .await
    }

    fn begin(&self) -> Result<()> {
        self.session.write().begin_auth()?;
        self.notify();
        Ok(())
    }

    fn finish(
        &self,
        result: std::result::Result<AuthData, ApiError>,
        fallback: &str,
    ) -> Result<UserProfile> {
        let outcome = match result {
            Ok(data) => {
                let user = data.user.clone();
                self.session
                    .write()
                    .complete_auth(data.user, data.token)
                    .map(|_| user)
            }
            Err(e) => {
                let err = auth_error(e, fallback);
                self.session.write().fail_auth(&err.user_message().1);
                Err(err)
            }
        };
        self.notify();

        match &outcome {
            Ok(user) => tracing::info!(user_id = %user.id, "Signed in"),
            Err(e) => tracing::warn!(error = %e, "Sign-in failed"),
        }
        outcome
    }

    fn notify(&self) {
        let status = self.session.read().status().clone();
        self.events.emit(AppEvent::SessionChanged(status));
    }
}
