//! Login form with empty-field validation and pluggable credential sinks
//!
//! The form logic lives in [`state`] (a pure reducer) and [`form`] (the
//! component that feeds accepted submissions to a [`sink::LoginSink`]).
//! [`ui`] and [`app`] put it on a terminal.

pub mod app;
pub mod config;
pub mod error;
pub mod form;
pub mod logging;
pub mod platform;
pub mod sink;
pub mod state;
pub mod ui;

pub use error::ValidationError;
pub use form::{LoginForm, SubmitObserver, SubmitOutcome};
