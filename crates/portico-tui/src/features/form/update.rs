//! Form feature reducer: key handling for the presented form.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::{FormMode, FormState};
use crate::common::{TaskKind, TaskSeq, Tasks};
use crate::effects::UiEffect;

/// Handles a key event routed to the form.
///
/// Mutates the form in place and returns effects (a submit, at most).
pub fn handle_key(
    form: &mut FormState,
    tasks: &Tasks,
    task_seq: &mut TaskSeq,
    key: KeyEvent,
) -> Vec<UiEffect> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Tab | KeyCode::Down => {
            form.focus_next();
            vec![]
        }
        KeyCode::BackTab | KeyCode::Up => {
            form.focus_prev();
            vec![]
        }
        KeyCode::Left | KeyCode::Right => {
            form.set_mode(form.mode.toggled());
            vec![]
        }
        KeyCode::Enter => submit(form, tasks, task_seq),
        KeyCode::Backspace => {
            form.error = None;
            let field = form.focused_field();
            if let Some(slot) = form.field_mut(form.mode, field) {
                slot.pop();
            }
            vec![]
        }
        KeyCode::Char(c) if !ctrl => {
            form.error = None;
            let field = form.focused_field();
            if let Some(slot) = form.field_mut(form.mode, field) {
                slot.push(c);
            }
            vec![]
        }
        _ => vec![],
    }
}

/// Validates and submits the presented form.
///
/// Required-field enforcement lives here, at the form layer; the submit
/// path itself performs no validation. A submit while the same operation
/// is already in flight is ignored.
fn submit(form: &mut FormState, tasks: &Tasks, task_seq: &mut TaskSeq) -> Vec<UiEffect> {
    if let Some(field) = form.first_missing_field() {
        form.error = Some(format!("{} is required", field.label()));
        let fields = form.mode.fields();
        form.focus = fields.iter().position(|&f| f == field).unwrap_or(0);
        return vec![];
    }

    let kind = match form.mode {
        FormMode::Login => TaskKind::LoginSubmit,
        FormMode::Signup => TaskKind::SignupSubmit,
    };
    if tasks.state(kind).is_running() {
        return vec![];
    }

    form.error = None;
    let task = task_seq.next_id();
    match form.mode {
        FormMode::Login => vec![UiEffect::SubmitLogin {
            task,
            fields: form.login.clone(),
        }],
        FormMode::Signup => vec![UiEffect::SubmitSignup {
            task,
            fields: form.signup.clone(),
        }],
    }
}
