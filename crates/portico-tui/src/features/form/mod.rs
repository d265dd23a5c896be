//! Form feature: the login/signup field-sets and their key handling.

mod render;
mod state;
mod update;

pub use render::render_form_lines;
pub use state::{Field, FormMode, FormState, LoginFields, SignupFields};
pub use update::handle_key;
