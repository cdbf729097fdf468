//! Keyboard focus ring for the login form

use super::field::FieldId;

/// Which element of the form receives key input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Email,
    Password,
    SubmitButton,
}

impl Focus {
    const RING: [Focus; 3] = [Focus::Email, Focus::Password, Focus::SubmitButton];

    fn index(&self) -> usize {
        match self {
            Focus::Email => 0,
            Focus::Password => 1,
            Focus::SubmitButton => 2,
        }
    }

    /// Move to the next element (wraps around)
    pub fn next(self) -> Self {
        Self::RING[(self.index() + 1) % Self::RING.len()]
    }

    /// Move to the previous element (wraps around)
    pub fn prev(self) -> Self {
        let count = Self::RING.len();
        Self::RING[(self.index() + count - 1) % count]
    }

    /// The text field under focus, if any
    pub fn field(&self) -> Option<FieldId> {
        match self {
            Focus::Email => Some(FieldId::Email),
            Focus::Password => Some(FieldId::Password),
            Focus::SubmitButton => None,
        }
    }

    pub fn is_field(&self, field: FieldId) -> bool {
        self.field() == Some(field)
    }
}
