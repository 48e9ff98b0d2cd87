//! # Session State Machine
//!
//! Owns the live [`Session`] and the [`TokenStore`]. Every auth transition goes
//! through one of the methods below; nothing else writes the token.
//!
//! ```text
//!            begin_restore            complete_auth
//!   Idle ───────────────▶ Restoring ───────────────▶ Authenticated
//!    │ ▲                     │ abort_restore              │
//!    │ └─────────────────────┘                            │ begin_logout
//!    │ begin_auth                                         ▼
//!    ▼              complete_auth                     LoggingOut
//! Authenticating ──────────────────▶ Authenticated        │ finish_logout
//!    │ fail_auth                                          ▼
//!    ▼          take_error / dismiss_error               Idle
//!  Failed ─────────────────────────────▶ Idle
//! ```
//!
//! Entering `Authenticated` writes the token store; leaving it deletes the entry.

use shared::UserProfile;

use crate::core::error::{AppError, Result};
use crate::services::storage::TokenStore;

/// Session lifecycle status
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionStatus {
    /// Signed out
    Idle,
    /// Cold-start token verification in flight
    Restoring,
    /// Login or registration in flight
    Authenticating,
    Authenticated,
    /// Backend logout in flight; local state clears regardless of its result
    LoggingOut,
    /// Last auth attempt failed; error not yet shown to the resident
    Failed,
}

impl SessionStatus {
    /// Whether a request is outstanding
    pub fn is_busy(&self) -> bool {
        matches!(
            self,
            SessionStatus::Restoring | SessionStatus::Authenticating | SessionStatus::LoggingOut
        )
    }
}

/// Live identity context of the running client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub status: SessionStatus,
    pub user: Option<UserProfile>,
    pub token: Option<String>,
    pub last_error: Option<String>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            status: SessionStatus::Idle,
            user: None,
            token: None,
            last_error: None,
        }
    }
}

/// The one place session transitions happen.
#[derive(Debug)]
pub struct SessionMachine {
    session: Session,
    tokens: TokenStore,
}

impl SessionMachine {
    pub fn new(tokens: TokenStore) -> Self {
        Self {
            session: Session::default(),
            tokens,
        }
    }

    /// Current session snapshot
    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn status(&self) -> &SessionStatus {
        &self.session.status
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.status == SessionStatus::Authenticated
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.session.user.as_ref()
    }

    /// Bearer token for authenticated requests
    pub fn token(&self) -> Option<&str> {
        match self.session.status {
            SessionStatus::Authenticated => self.session.token.as_deref(),
            _ => None,
        }
    }

    /// Token persisted on the device, used only for cold-start restore.
    pub fn stored_token(&self) -> Result<Option<String>> {
        Ok(self.tokens.load()?)
    }

    /// Error waiting to be shown, if any
    pub fn last_error(&self) -> Option<&str> {
        self.session.last_error.as_deref()
    }

    /// Idle → Restoring
    pub fn begin_restore(&mut self) -> Result<()> {
        match self.session.status {
            SessionStatus::Idle | SessionStatus::Failed => {
                self.session.status = SessionStatus::Restoring;
                self.session.last_error = None;
                Ok(())
            }
            ref other => Err(AppError::State(format!(
                "Cannot restore session while {:?}",
                other
            ))),
        }
    }

    /// Restoring → Idle, deleting the stored token.
    ///
    /// Restore failures are not shown to the resident; they simply land on login.
    pub fn abort_restore(&mut self, reason: &str) {
        tracing::info!(reason, "Session restore failed; clearing stored token");
        self.clear_local();
    }

    /// Idle/Failed → Authenticating, clearing any previous error.
    pub fn begin_auth(&mut self) -> Result<()> {
        match self.session.status {
            SessionStatus::Idle | SessionStatus::Failed => {
                self.session.status = SessionStatus::Authenticating;
                self.session.last_error = None;
                Ok(())
            }
            SessionStatus::Authenticated => {
                Err(AppError::State("Already signed in".to_string()))
            }
            _ => Err(AppError::State(
                "Another sign-in request is still in progress".to_string(),
            )),
        }
    }

    /// Authenticating/Restoring → Authenticated, persisting the token.
    ///
    /// If the token cannot be persisted the attempt fails: an authenticated
    /// session always has its token on disk.
    pub fn complete_auth(&mut self, user: UserProfile, token: String) -> Result<()> {
        if !matches!(
            self.session.status,
            SessionStatus::Authenticating | SessionStatus::Restoring
        ) {
            return Err(AppError::State(format!(
                "Cannot complete sign-in while {:?}",
                self.session.status
            )));
        }

        if token.is_empty() {
            self.fail_auth("Server returned an empty session token");
            return Err(AppError::Auth("Server returned an empty session token".to_string()));
        }

        if let Err(e) = self.tokens.save(&token) {
            tracing::error!(error = %e, "Failed to persist session token");
            let err = AppError::from(e);
            self.fail_auth(&err.to_string());
            return Err(err);
        }

        tracing::info!(user_id = %user.id, "Session authenticated");
        self.session = Session {
            status: SessionStatus::Authenticated,
            user: Some(user),
            token: Some(token),
            last_error: None,
        };
        Ok(())
    }

    /// Authenticating → Failed(reason). A failed restore goes straight to Idle.
    pub fn fail_auth(&mut self, reason: &str) {
        match self.session.status {
            SessionStatus::Authenticating => {
                self.session.status = SessionStatus::Failed;
                self.session.user = None;
                self.session.token = None;
                self.session.last_error = Some(reason.to_string());
            }
            SessionStatus::Restoring => self.abort_restore(reason),
            ref other => {
                tracing::warn!(status = ?other, reason, "fail_auth outside of an auth attempt ignored");
            }
        }
    }

    /// Hand the pending error to the UI exactly once; Failed → Idle.
    pub fn take_error(&mut self) -> Option<String> {
        let error = self.session.last_error.take();
        if self.session.status == SessionStatus::Failed {
            self.session.status = SessionStatus::Idle;
        }
        error
    }

    /// Drop the pending error without showing it; Failed → Idle.
    pub fn dismiss_error(&mut self) {
        self.take_error();
    }

    /// Authenticated → LoggingOut. Returns the token for the backend call.
    pub fn begin_logout(&mut self) -> Result<String> {
        if self.session.status != SessionStatus::Authenticated {
            return Err(AppError::State("Not signed in".to_string()));
        }

        let token = self.session.token.clone().unwrap_or_default();
        self.session.status = SessionStatus::LoggingOut;
        Ok(token)
    }

    /// LoggingOut → Idle. Always clears the token store and profile.
    pub fn finish_logout(&mut self) {
        tracing::info!("Session cleared after logout");
        self.clear_local();
    }

    /// Force Idle from any state, deleting the stored token.
    pub fn reset(&mut self) {
        self.clear_local();
    }

    fn clear_local(&mut self) {
        if let Err(e) = self.tokens.clear() {
            // The in-memory session is cleared regardless; a stale token on disk
            // fails verification on the next start and is removed then.
            tracing::error!(error = %e, "Failed to delete stored session token");
        }
        self.session = Session::default();
    }
}
