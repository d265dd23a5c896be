//! Alert state.
//!
//! At most one alert is visible at a time; showing a new one replaces the
//! current one. Every alert gets a fresh `AlertId`, and the auto-dismiss
//! timer is tied to that id: a timer firing for an alert that has since
//! been replaced or dismissed must not hide the newer one. The stored
//! cancellation token additionally lets the reducer stop the pending timer
//! outright when the alert goes away early.

use std::time::Duration;

use tokio_util::sync::CancellationToken;

/// How long an alert stays visible before auto-dismissing.
pub const ALERT_TTL: Duration = Duration::from_secs(5);

/// Identity of a single shown alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AlertId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Alert {
    pub id: AlertId,
    pub kind: AlertKind,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct AlertState {
    current: Option<Alert>,
    /// Token for the pending auto-dismiss timer, if any.
    dismiss: Option<CancellationToken>,
    next_id: u64,
}

impl AlertState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&Alert> {
        self.current.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }

    /// Shows an alert, replacing any visible one.
    ///
    /// Returns the new alert's id and the cancellation token its dismiss
    /// timer must watch. The previous timer's token (if any) must already
    /// have been taken via `take_dismiss_token` so the reducer can cancel it.
    pub fn show(
        &mut self,
        kind: AlertKind,
        message: impl Into<String>,
    ) -> (AlertId, CancellationToken) {
        let id = AlertId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);

        self.current = Some(Alert {
            id,
            kind,
            message: message.into(),
        });

        let token = CancellationToken::new();
        self.dismiss = Some(token.clone());
        (id, token)
    }

    /// Takes the pending dismiss token, leaving none in place.
    pub fn take_dismiss_token(&mut self) -> Option<CancellationToken> {
        self.dismiss.take()
    }

    /// Hides the alert immediately. Returns the pending timer token so the
    /// reducer can emit a cancellation effect.
    pub fn dismiss(&mut self) -> Option<CancellationToken> {
        self.current = None;
        self.dismiss.take()
    }

    /// Handles an expired timer. Hides the alert only if `id` still names
    /// the visible one; a stale timer is a no-op.
    pub fn timed_out(&mut self, id: AlertId) -> bool {
        if self.current.as_ref().is_some_and(|alert| alert.id == id) {
            self.current = None;
            self.dismiss = None;
            true
        } else {
            false
        }
    }
}
