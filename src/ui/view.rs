//! Pure description of the rendered login surface
//!
//! `render` turns a [`FormState`] into a [`LoginView`] without touching the
//! terminal. The ratatui drawing code consumes the view, and tests can assert
//! on it directly.

use crate::state::{masked, FieldId, FormState, InputType};

/// Id of the error region; inputs reference it while it is shown
pub const ERROR_REGION_ID: &str = "login-error";

/// Accessibility role of the error region
pub const ERROR_ROLE: &str = "alert";

pub const SUBMIT_LABEL: &str = "Sign in";

pub const FORM_TITLE: &str = "Login";

/// One labeled input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputView {
    pub id: &'static str,
    pub label: &'static str,
    pub input_type: InputType,
    pub autocomplete: &'static str,
    /// Display value, masked for password inputs unless revealed
    pub value: String,
    /// Error region id, present while the error is shown
    pub described_by: Option<&'static str>,
}

/// The error region below the inputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorRegion {
    pub id: &'static str,
    pub role: &'static str,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginView {
    pub title: &'static str,
    pub email: InputView,
    pub password: InputView,
    pub error: Option<ErrorRegion>,
    pub submit_label: &'static str,
}

impl LoginView {
    pub fn input(&self, field: FieldId) -> &InputView {
        match field {
            FieldId::Email => &self.email,
            FieldId::Password => &self.password,
        }
    }
}

/// Render `state` into a view description
pub fn render(state: &FormState, mask_password: bool) -> LoginView {
    let error = state.error_message.as_ref().map(|message| ErrorRegion {
        id: ERROR_REGION_ID,
        role: ERROR_ROLE,
        message: message.clone(),
    });
    let described_by = error.as_ref().map(|region| region.id);

    let input = |field: FieldId| {
        let raw = state.value(field);
        let value = if field.input_type() == InputType::Password && mask_password {
            masked(raw)
        } else {
            raw.to_string()
        };
        InputView {
            id: field.name(),
            label: field.label(),
            input_type: field.input_type(),
            autocomplete: field.autocomplete(),
            value,
            described_by,
        }
    };

    LoginView {
        title: FORM_TITLE,
        email: input(FieldId::Email),
        password: input(FieldId::Password),
        error,
        submit_label: SUBMIT_LABEL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FormEvent;
    use pretty_assertions::assert_eq;

    fn invalid_state() -> FormState {
        FormState::new().dispatch(FormEvent::Submit).0
    }

    #[test]
    fn test_clean_state_has_no_error_region() {
        let view = render(&FormState::new(), true);
        assert!(view.error.is_none());
        assert!(view.email.described_by.is_none());
        assert!(view.password.described_by.is_none());
    }

    #[test]
    fn test_invalid_state_shows_alert_region() {
        let view = render(&invalid_state(), true);
        assert_eq!(
            view.error,
            Some(ErrorRegion {
                id: "login-error",
                role: "alert",
                message: "Please fill in all fields".to_string(),
            })
        );
        assert_eq!(view.email.described_by, Some("login-error"));
        assert_eq!(view.password.described_by, Some("login-error"));
    }

    #[test]
    fn test_input_contracts() {
        let view = render(&FormState::new(), true);

        assert_eq!(view.email.id, "email");
        assert_eq!(view.email.input_type, InputType::Email);
        assert_eq!(view.email.autocomplete, "username");

        assert_eq!(view.password.id, "password");
        assert_eq!(view.password.input_type, InputType::Password);
        assert_eq!(view.password.autocomplete, "current-password");

        assert_eq!(view.submit_label, "Sign in");
    }

    #[test]
    fn test_password_masked_unless_revealed() {
        let mut state = FormState::new();
        state.apply(FormEvent::change(FieldId::Email, "me@example.com"));
        state.apply(FormEvent::change(FieldId::Password, "s3cr3t"));

        let masked_view = render(&state, true);
        assert_eq!(masked_view.email.value, "me@example.com");
        assert_eq!(masked_view.password.value, "••••••");

        let revealed = render(&state, false);
        assert_eq!(revealed.password.value, "s3cr3t");
    }

    #[test]
    fn test_render_is_pure() {
        let state = invalid_state();
        assert_eq!(render(&state, true), render(&state, true));
        assert_eq!(state, invalid_state());
    }

    #[test]
    fn test_input_lookup() {
        let view = render(&FormState::new(), true);
        assert_eq!(view.input(FieldId::Email).id, "email");
        assert_eq!(view.input(FieldId::Password).id, "password");
    }
}
