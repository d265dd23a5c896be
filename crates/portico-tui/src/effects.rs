//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They represent I/O and task spawning only (no direct UI mutations).
//!
//! This keeps the reducer pure: it only mutates state and returns effects,
//! never performs I/O or spawns tasks directly.
//!
//! ## Cancellation Effects
//!
//! The alert dismiss timer is cancelled from the reducer via
//! `UiEffect::CancelAlertDismiss`. The runtime executes it by calling
//! `token.cancel()` on the provided token; the reducer decides when to
//! cancel, the runtime executes.

use tokio_util::sync::CancellationToken;

use crate::alert::AlertId;
use crate::common::TaskId;
use crate::form::{LoginFields, SignupFields};

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Submit login credentials to the auth service.
    SubmitLogin { task: TaskId, fields: LoginFields },

    /// Submit a signup registration to the auth service.
    SubmitSignup { task: TaskId, fields: SignupFields },

    /// Start the auto-dismiss countdown for the alert with this id.
    ///
    /// The token is already stored in `AlertState`; cancelling it via
    /// `CancelAlertDismiss` makes the countdown resolve without an event.
    ScheduleAlertDismiss {
        id: AlertId,
        cancel: CancellationToken,
    },

    /// Cancel a pending auto-dismiss countdown.
    CancelAlertDismiss { token: CancellationToken },
}
