//! UI event types.
//!
//! This module defines the unified event enum for the TUI. All external
//! inputs (terminal, submit results, timer expiries) are converted to
//! `UiEvent` before being processed by the reducer.
//!
//! ## Inbox Pattern
//!
//! Async operations send events directly to the runtime's event inbox.
//! Results arrive as separate events.
//!
//! ## Task Lifecycle Events
//!
//! Submits use a uniform lifecycle:
//! - The runtime emits `UiEvent::TaskStarted` once a submit is actually spawned
//! - The runtime emits `UiEvent::TaskCompleted` with the result event when done
//! - The reducer is the only place that mutates `TaskState`

use crossterm::event::Event as CrosstermEvent;

use crate::alert::AlertId;
use crate::common::{TaskCompleted, TaskKind, TaskStarted};

/// Unified event enum for the TUI.
///
/// All inputs to the TUI are converted to this type before processing.
/// The reducer (`update`) pattern-matches on these events to update state.
#[derive(Debug)]
pub enum UiEvent {
    /// Timer tick (render cadence).
    Tick,

    /// Terminal input event (key, resize).
    Terminal(CrosstermEvent),

    /// Async login submission completed.
    ///
    /// `Err` carries the message to surface: the server's own text when it
    /// sent one, otherwise the operation fallback.
    LoginResult { result: Result<(), String> },

    /// Async signup submission completed.
    SignupResult { result: Result<(), String> },

    /// The auto-dismiss timer for an alert fired.
    ///
    /// Carries the id of the alert it was scheduled for; the reducer ignores
    /// it unless that alert is still the visible one.
    AlertTimedOut { id: AlertId },

    /// Task lifecycle: runtime started a submit.
    TaskStarted { kind: TaskKind, started: TaskStarted },

    /// Task lifecycle: runtime completed a submit (wraps the result event).
    TaskCompleted {
        kind: TaskKind,
        completed: TaskCompleted<Box<UiEvent>>,
    },
}
