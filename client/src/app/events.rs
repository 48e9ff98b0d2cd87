//! # Application Events
//!
//! Notifications sent from the controllers to whatever renders the client.
//! The UI re-reads state on each event; events only say what changed.

use super::session::SessionStatus;
use super::state::PaymentPhase;
use crate::core::error::AppError;

/// State change notifications sent to the UI
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// Session moved to a new status
    SessionChanged(SessionStatus),
    /// Pending bill fetch finished (`Ok(count)` or the error shown to the resident)
    BillsUpdated(Result<usize, AppError>),
    /// Payment flow moved to a new phase
    PaymentProgress(PaymentPhase),
    /// Payment flow reached an outcome
    PaymentFinished(Result<String, AppError>),
}

/// Sending half shared by controllers
#[derive(Debug, Clone)]
pub struct EventSender {
    tx: async_channel::Sender<AppEvent>,
}

impl EventSender {
    pub fn channel() -> (Self, async_channel::Receiver<AppEvent>) {
        let (tx, rx) = async_channel::unbounded();
        (Self { tx }, rx)
    }

    /// Send without waiting. Drops the event only if nobody is listening.
    pub fn emit(&self, event: AppEvent) {
        if let Err(e) = self.tx.try_send(event) {
            tracing::debug!(error = %e, "App event dropped");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emit_delivers_in_order() {
        let (events, rx) = EventSender::channel();
        events.emit(AppEvent::SessionChanged(SessionStatus::Authenticating));
        events.emit(AppEvent::SessionChanged(SessionStatus::Authenticated));

        assert_eq!(
            rx.try_recv().expect("first event in test"),
            AppEvent::SessionChanged(SessionStatus::Authenticating)
        );
        assert_eq!(
            rx.try_recv().expect("second event in test"),
            AppEvent::SessionChanged(SessionStatus::Authenticated)
        );
    }

    #[test]
    fn test_emit_without_listener_does_not_panic() {
        let (events, rx) = EventSender::channel();
        drop(rx);
        events.emit(AppEvent::BillsUpdated(Ok(0)));
    }

    #[test]
    fn test_slow_listener_still_gets_final_event() {
        let (events, rx) = EventSender::channel();
        for _ in 0..500 {
            events.emit(AppEvent::PaymentProgress(PaymentPhase::Ready));
        }
        events.emit(AppEvent::PaymentFinished(Ok("pay_1".to_string())));

        assert_eq!(rx.len(), 501);
        let last = std::iter::from_fn(|| rx.try_recv().ok()).last();
        assert_eq!(last, Some(AppEvent::PaymentFinished(Ok("pay_1".to_string()))));
    }
}
