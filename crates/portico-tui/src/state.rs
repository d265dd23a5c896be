//! Application state composition.
//!
//! This module defines the single state container for the auth page:
//!
//! ```text
//! AppState
//! ├── form: FormState    (mode, both field-sets, focus, inline error)
//! ├── alert: AlertState  (visible alert + pending dismiss timer)
//! ├── task_seq: TaskSeq  (async task id generator)
//! └── tasks: Tasks       (submit lifecycle state)
//! ```
//!
//! All mutations happen in the reducer (`update`); nothing outside it holds
//! a reference to this state.

use crate::alert::AlertState;
use crate::common::{TaskSeq, Tasks};
use crate::form::FormState;

/// Combined application state for the auth page.
pub struct AppState {
    /// Flag indicating the app should quit.
    pub should_quit: bool,
    /// The login/signup forms.
    pub form: FormState,
    /// Transient outcome alert.
    pub alert: AlertState,
    /// Task id sequence for submits.
    pub task_seq: TaskSeq,
    /// Submit lifecycle state.
    pub tasks: Tasks,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            form: FormState::new(),
            alert: AlertState::new(),
            task_seq: TaskSeq::default(),
            tasks: Tasks::default(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
