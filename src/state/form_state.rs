//! Login form state and its reducer

use super::field::FieldId;
use crate::error::ValidationError;

/// Events the form reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// A field received a new value (the full value, not a delta)
    Change { field: FieldId, value: String },
    /// Submit button, submit shortcut, or Enter in the password field
    Submit,
}

impl FormEvent {
    pub fn change(field: FieldId, value: impl Into<String>) -> Self {
        FormEvent::Change {
            field,
            value: value.into(),
        }
    }
}

/// Values captured by a successful submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Derived validation phase of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No error message is shown
    Clean,
    /// The last submit failed validation and the message is shown
    Invalid,
}

/// Everything the login form remembers between events
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub email: String,
    pub password: String,
    pub error_message: Option<String>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of a field
    pub fn value(&self, field: FieldId) -> &str {
        match field {
            FieldId::Email => &self.email,
            FieldId::Password => &self.password,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.error_message.is_some() {
            Phase::Invalid
        } else {
            Phase::Clean
        }
    }

    /// Check the submit rule without changing anything
    pub fn validate(&self) -> Result<Credentials, ValidationError> {
        if self.email.is_empty() || self.password.is_empty() {
            return Err(ValidationError::MissingField);
        }
        Ok(Credentials {
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }

    /// Pure reducer: the state after `event`, plus the credentials to emit
    /// when the event was an accepted submit.
    pub fn dispatch(mut self, event: FormEvent) -> (Self, Option<Credentials>) {
        let emitted = self.apply(event);
        (self, emitted)
    }

    /// In-place form of [`FormState::dispatch`]
    pub fn apply(&mut self, event: FormEvent) -> Option<Credentials> {
        match event {
            FormEvent::Change { field, value } => {
                // Edits never touch the error message; only a successful submit clears it
                match field {
                    FieldId::Email => self.email = value,
                    FieldId::Password => self.password = value,
                }
                None
            }
            FormEvent::Submit => match self.validate() {
                Ok(credentials) => {
                    self.reset();
                    Some(credentials)
                }
                Err(err) => {
                    self.error_message = Some(err.to_string());
                    None
                }
            },
        }
    }

    /// Back to the freshly mounted state
    pub fn reset(&mut self) {
        self.email.clear();
        self.password.clear();
        self.error_message = None;
    }
}
