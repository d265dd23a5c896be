//! Transient alert feature: the outcome banner with auto-dismiss.

mod render;
mod state;

pub use render::render_alert_line;
pub use state::{ALERT_TTL, Alert, AlertId, AlertKind, AlertState};
