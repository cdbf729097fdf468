//! Credential sinks: where accepted submissions are reported

mod callback_sink;
mod log_sink;
mod traits;

pub use callback_sink::CallbackSink;
pub use log_sink::LogSink;
pub use traits::LoginSink;

#[cfg(test)]
pub use traits::MockLoginSink;

use serde::{Deserialize, Serialize};

/// Which sink a form is built with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    /// Write credentials to the log
    #[default]
    Log,
    /// Pass the email to a success callback
    Callback,
}
