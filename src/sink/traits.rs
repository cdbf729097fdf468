//! Trait abstraction for credential sinks to enable mocking in tests

use crate::state::Credentials;
use async_trait::async_trait;

/// Receives the credentials of every accepted submission
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginSink: Send + Sync {
    /// Deliver one accepted submission. Called exactly once per accepted submit.
    async fn deliver(&self, credentials: &Credentials);
}
