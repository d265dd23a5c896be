//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(state, event)`
//! and executes the returned effects.
//!
//! This is the single source of truth for how events modify state.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

use crate::alert::AlertKind;
use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::form::{self, FormMode};
use crate::state::AppState;

/// Alert copy for a successful login.
const LOGIN_SUCCESS: &str = "Login successful!";
/// Alert copy for a successful signup.
const SIGNUP_SUCCESS: &str = "Signup successful! Please login.";

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(state: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => vec![],
        UiEvent::Terminal(term_event) => match term_event {
            Event::Key(key) => handle_key(state, key),
            _ => vec![],
        },
        UiEvent::TaskStarted { kind, started } => {
            state.tasks.state_mut(kind).on_started(&started);
            vec![]
        }
        UiEvent::TaskCompleted { kind, completed } => {
            let ok = state.tasks.state_mut(kind).finish_if_active(completed.id);
            if ok { update(state, *completed.result) } else { vec![] }
        }
        UiEvent::LoginResult { result } => match result {
            Ok(()) => {
                // Success clears only the submitting form.
                state.form.login.clear();
                show_alert(state, AlertKind::Success, LOGIN_SUCCESS)
            }
            Err(message) => show_alert(state, AlertKind::Error, message),
        },
        UiEvent::SignupResult { result } => match result {
            Ok(()) => {
                state.form.signup.clear();
                // A successful signup always lands the user on the login form.
                state.form.set_mode(FormMode::Login);
                show_alert(state, AlertKind::Success, SIGNUP_SUCCESS)
            }
            Err(message) => show_alert(state, AlertKind::Error, message),
        },
        UiEvent::AlertTimedOut { id } => {
            state.alert.timed_out(id);
            vec![]
        }
    }
}

/// Shows an alert, replacing the visible one and rescheduling auto-dismiss.
fn show_alert(state: &mut AppState, kind: AlertKind, message: impl Into<String>) -> Vec<UiEffect> {
    let mut effects = Vec::new();
    if let Some(token) = state.alert.take_dismiss_token() {
        effects.push(UiEffect::CancelAlertDismiss { token });
    }
    let (id, cancel) = state.alert.show(kind, message);
    effects.push(UiEffect::ScheduleAlertDismiss { id, cancel });
    effects
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if ctrl && key.code == KeyCode::Char('c') {
        return vec![UiEffect::Quit];
    }

    if key.code == KeyCode::Esc {
        // Esc dismisses a visible alert first; quits otherwise.
        if state.alert.is_visible() {
            let mut effects = Vec::new();
            if let Some(token) = state.alert.dismiss() {
                effects.push(UiEffect::CancelAlertDismiss { token });
            }
            return effects;
        }
        return vec![UiEffect::Quit];
    }

    form::handle_key(&mut state.form, &state.tasks, &mut state.task_seq, key)
}
