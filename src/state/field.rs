//! Form field identifiers and edit operations

/// Character drawn in place of each password character while masked
pub const MASK_CHAR: char = '•';

/// The two inputs of the login form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Email,
    Password,
}

impl FieldId {
    /// Fields in tab order
    pub const ALL: [FieldId; 2] = [FieldId::Email, FieldId::Password];

    /// Stable identifier, also used as the input's id on the rendered surface
    pub fn name(&self) -> &'static str {
        match self {
            FieldId::Email => "email",
            FieldId::Password => "password",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FieldId::Email => "Email",
            FieldId::Password => "Password",
        }
    }

    pub fn input_type(&self) -> InputType {
        match self {
            FieldId::Email => InputType::Email,
            FieldId::Password => InputType::Password,
        }
    }

    /// Autofill hint for password managers
    pub fn autocomplete(&self) -> &'static str {
        match self {
            FieldId::Email => "username",
            FieldId::Password => "current-password",
        }
    }
}

/// Kind of input the rendered surface must present
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputType {
    Email,
    Password,
}

/// A keystroke-level edit, turned into a full new value before dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    /// Append a single character
    Insert(char),
    /// Append a pasted string verbatim
    Paste(String),
    /// Remove the last character
    Backspace,
    /// Empty the field
    Clear,
}

impl FieldEdit {
    /// Produce the value that results from applying this edit to `current`
    pub fn apply(&self, current: &str) -> String {
        let mut value = current.to_string();
        match self {
            FieldEdit::Insert(c) => value.push(*c),
            FieldEdit::Paste(text) => value.push_str(text),
            FieldEdit::Backspace => {
                value.pop();
            }
            FieldEdit::Clear => value.clear(),
        }
        value
    }
}

/// Replace every character of `value` with [`MASK_CHAR`]
pub fn masked(value: &str) -> String {
    value.chars().map(|_| MASK_CHAR).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    mod field_id {
        use super::*;

        #[test]
        fn test_email_surface_contract() {
            assert_eq!(FieldId::Email.name(), "email");
            assert_eq!(FieldId::Email.label(), "Email");
            assert_eq!(FieldId::Email.input_type(), InputType::Email);
            assert_eq!(FieldId::Email.autocomplete(), "username");
        }

        #[test]
        fn test_password_surface_contract() {
            assert_eq!(FieldId::Password.name(), "password");
            assert_eq!(FieldId::Password.label(), "Password");
            assert_eq!(FieldId::Password.input_type(), InputType::Password);
            assert_eq!(FieldId::Password.autocomplete(), "current-password");
        }

        #[test]
        fn test_tab_order() {
            assert_eq!(FieldId::ALL, [FieldId::Email, FieldId::Password]);
        }
    }

    mod field_edit {
        use super::*;

        #[test]
        fn test_insert_appends() {
            assert_eq!(FieldEdit::Insert('c').apply("ab"), "abc");
        }

        #[test]
        fn test_insert_multibyte_char() {
            assert_eq!(FieldEdit::Insert('é').apply("caf"), "café");
        }

        #[test]
        fn test_backspace_removes_whole_char() {
            assert_eq!(FieldEdit::Backspace.apply("ü🔑"), "ü");
        }

        #[test]
        fn test_backspace_on_empty_is_noop() {
            assert_eq!(FieldEdit::Backspace.apply(""), "");
        }

        #[test]
        fn test_paste_is_verbatim() {
            let pasted = "<script>&\"quotes\"</script>";
            assert_eq!(
                FieldEdit::Paste(pasted.to_string()).apply("x"),
                format!("x{pasted}")
            );
        }

        #[test]
        fn test_clear_empties() {
            assert_eq!(FieldEdit::Clear.apply("something"), "");
        }
    }

    #[test]
    fn test_masked_counts_chars_not_bytes() {
        assert_eq!(masked("pässwörd"), "••••••••");
        assert_eq!(masked(""), "");
    }
}
