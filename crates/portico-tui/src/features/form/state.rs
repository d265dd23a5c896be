//! Form state: the two field-sets and which one is presented.
//!
//! Both field-sets exist for the whole life of the page; switching modes
//! only changes which one is shown and edited, it never clears the other.
//! A field-set is cleared exclusively by its own successful submission.

/// Which of the two forms is currently presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Login,
    Signup,
}

impl Default for FormMode {
    fn default() -> Self {
        FormMode::Login
    }
}

impl FormMode {
    pub fn title(self) -> &'static str {
        match self {
            FormMode::Login => "Login",
            FormMode::Signup => "Sign Up",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            FormMode::Login => FormMode::Signup,
            FormMode::Signup => FormMode::Login,
        }
    }

    /// The fields this form presents, in display and focus order.
    pub fn fields(self) -> &'static [Field] {
        match self {
            FormMode::Login => &[Field::Email, Field::Password],
            FormMode::Signup => &[Field::Username, Field::Email, Field::Password],
        }
    }
}

/// A named input field of one of the forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Username,
    Email,
    Password,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::Username => "Username",
            Field::Email => "Email",
            Field::Password => "Password",
        }
    }

    /// Secret fields render masked.
    pub fn is_secret(self) -> bool {
        matches!(self, Field::Password)
    }
}

/// Login form values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginFields {
    pub email: String,
    pub password: String,
}

impl LoginFields {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn field(&self, field: Field) -> Option<&str> {
        match field {
            Field::Email => Some(&self.email),
            Field::Password => Some(&self.password),
            Field::Username => None,
        }
    }

    pub fn field_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::Email => Some(&mut self.email),
            Field::Password => Some(&mut self.password),
            Field::Username => None,
        }
    }
}

/// Signup form values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupFields {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl SignupFields {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn field(&self, field: Field) -> Option<&str> {
        match field {
            Field::Username => Some(&self.username),
            Field::Email => Some(&self.email),
            Field::Password => Some(&self.password),
        }
    }

    pub fn field_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::Username => Some(&mut self.username),
            Field::Email => Some(&mut self.email),
            Field::Password => Some(&mut self.password),
        }
    }
}

/// Combined form state: mode, both field-sets, focus, inline error.
#[derive(Debug, Default)]
pub struct FormState {
    pub mode: FormMode,
    pub login: LoginFields,
    pub signup: SignupFields,
    /// Index into `mode.fields()` of the focused field.
    pub focus: usize,
    /// Inline validation message shown under the form.
    pub error: Option<String>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switches the presented form. Field values of both forms survive the
    /// switch; only focus and the inline error reset.
    pub fn set_mode(&mut self, mode: FormMode) {
        self.mode = mode;
        self.focus = 0;
        self.error = None;
    }

    pub fn focused_field(&self) -> Field {
        let fields = self.mode.fields();
        fields[self.focus.min(fields.len() - 1)]
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % self.mode.fields().len();
    }

    pub fn focus_prev(&mut self) {
        let len = self.mode.fields().len();
        self.focus = (self.focus + len - 1) % len;
    }

    /// Reads a field of the given form.
    pub fn field(&self, mode: FormMode, field: Field) -> Option<&str> {
        match mode {
            FormMode::Login => self.login.field(field),
            FormMode::Signup => self.signup.field(field),
        }
    }

    /// Sets a field of the given form. Fields the form does not have are
    /// left untouched.
    pub fn set_field(&mut self, mode: FormMode, field: Field, value: impl Into<String>) {
        if let Some(slot) = self.field_mut(mode, field) {
            *slot = value.into();
        }
    }

    pub fn field_mut(&mut self, mode: FormMode, field: Field) -> Option<&mut String> {
        match mode {
            FormMode::Login => self.login.field_mut(field),
            FormMode::Signup => self.signup.field_mut(field),
        }
    }

    /// First empty required field of the presented form, if any.
    pub fn first_missing_field(&self) -> Option<Field> {
        self.mode
            .fields()
            .iter()
            .copied()
            .find(|&field| self.field(self.mode, field).is_none_or(str::is_empty))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_switching_modes_preserves_both_field_sets() {
        let mut form = FormState::new();
        form.set_field(FormMode::Login, Field::Email, "test@example.com");
        form.set_field(FormMode::Signup, Field::Username, "testuser");

        form.set_mode(FormMode::Signup);
        form.set_mode(FormMode::Login);

        assert_eq!(form.login.email, "test@example.com");
        assert_eq!(form.signup.username, "testuser");
    }

    #[test]
    fn test_editing_one_form_never_touches_the_other() {
        let mut form = FormState::new();
        form.set_field(FormMode::Signup, Field::Email, "signup@example.com");

        form.set_field(FormMode::Login, Field::Email, "login@example.com");
        form.set_field(FormMode::Login, Field::Password, "pw");

        assert_eq!(form.signup, SignupFields {
            username: String::new(),
            email: "signup@example.com".to_string(),
            password: String::new(),
        });
    }

    #[test]
    fn test_login_form_has_no_username_slot() {
        let mut form = FormState::new();
        form.set_field(FormMode::Login, Field::Username, "ignored");

        assert_eq!(form.login, LoginFields::default());
    }

    #[test]
    fn test_focus_wraps_per_mode() {
        let mut form = FormState::new();
        assert_eq!(form.focused_field(), Field::Email);
        form.focus_next();
        assert_eq!(form.focused_field(), Field::Password);
        form.focus_next();
        assert_eq!(form.focused_field(), Field::Email);

        form.set_mode(FormMode::Signup);
        assert_eq!(form.focused_field(), Field::Username);
        form.focus_prev();
        assert_eq!(form.focused_field(), Field::Password);
    }

    #[test]
    fn test_first_missing_field_in_order() {
        let mut form = FormState::new();
        form.set_mode(FormMode::Signup);
        form.set_field(FormMode::Signup, Field::Username, "testuser");

        assert_eq!(form.first_missing_field(), Some(Field::Email));

        form.set_field(FormMode::Signup, Field::Email, "test@example.com");
        form.set_field(FormMode::Signup, Field::Password, "testPassword123");
        assert_eq!(form.first_missing_field(), None);
    }
}
