//! The login form component: state, sink and submit observer wired together

use crate::error::ValidationError;
use crate::sink::LoginSink;
use crate::state::{FieldEdit, FieldId, FormEvent, FormState};
use crate::ui::view::{render, LoginView};

/// Hook run with the current state at the start of every submit, before validation
pub type SubmitObserver = Box<dyn Fn(&FormState) + Send + Sync>;

/// Result of a submit trigger
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Credentials went to the sink and the form was reset
    Delivered { email: String },
    /// Validation failed; the error message is now shown
    Rejected(ValidationError),
}

pub struct LoginForm {
    state: FormState,
    sink: Box<dyn LoginSink>,
    observer: Option<SubmitObserver>,
}

impl LoginForm {
    /// Create an empty form reporting to `sink`
    pub fn new(sink: Box<dyn LoginSink>) -> Self {
        Self {
            state: FormState::new(),
            sink,
            observer: None,
        }
    }

    pub fn with_observer(mut self, observer: SubmitObserver) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Store a new value for `field`
    pub fn change(&mut self, field: FieldId, value: impl Into<String>) {
        self.state.apply(FormEvent::change(field, value));
    }

    /// Apply a keystroke-level edit to `field`
    pub fn edit(&mut self, field: FieldId, edit: FieldEdit) {
        let value = edit.apply(self.state.value(field));
        self.change(field, value);
    }

    /// Run the submit path: observer, validation, then delivery and reset
    pub async fn submit(&mut self) -> SubmitOutcome {
        if let Some(observer) = &self.observer {
            observer(&self.state);
        }

        let (next, emitted) = std::mem::take(&mut self.state).dispatch(FormEvent::Submit);
        self.state = next;

        match emitted {
            Some(credentials) => {
                tracing::debug!(email = %credentials.email, "Submission accepted");
                self.sink.deliver(&credentials).await;
                SubmitOutcome::Delivered {
                    email: credentials.email,
                }
            }
            None => {
                tracing::debug!("Submission rejected: empty field");
                SubmitOutcome::Rejected(ValidationError::MissingField)
            }
        }
    }

    pub fn view(&self, mask_password: bool) -> LoginView {
        render(&self.state, mask_password)
    }
}
