//! Domain errors for the login form

use thiserror::Error;

/// Reasons a submission is rejected before anything is emitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Email, password, or both were empty at submit time.
    /// All three cases share one user-facing message.
    #[error("Please fill in all fields")]
    MissingField,
}
