//! Reusable UI components

mod button;
mod error_region;
mod field;

pub use button::{render_button, BUTTON_HEIGHT};
pub use error_region::{render_error_region, ERROR_REGION_HEIGHT};
pub use field::{draw_field, FIELD_HEIGHT};
