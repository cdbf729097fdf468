//! Form state module

mod field;
mod focus;
mod form_state;

pub use field::*;
pub use focus::*;
pub use form_state::*;
