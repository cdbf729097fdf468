//! Sink that hands the signed-in email to an injected callback

use super::traits::LoginSink;
use crate::state::Credentials;
use async_trait::async_trait;

/// Calls `on_login_success(email)` for every submission. The password is not forwarded.
pub struct CallbackSink<F>
where
    F: Fn(&str) + Send + Sync,
{
    on_login_success: F,
}

impl<F> CallbackSink<F>
where
    F: Fn(&str) + Send + Sync,
{
    pub fn new(on_login_success: F) -> Self {
        Self { on_login_success }
    }
}

#[async_trait]
impl<F> LoginSink for CallbackSink<F>
where
    F: Fn(&str) + Send + Sync,
{
    async fn deliver(&self, credentials: &Credentials) {
        tracing::debug!(email = %credentials.email, "Invoking login success callback");
        (self.on_login_success)(&credentials.email);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[tokio::test]
    async fn test_callback_receives_email_only() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let recorder = Arc::clone(&seen);
        let sink = CallbackSink::new(move |email: &str| {
            recorder.lock().unwrap().push(email.to_string());
        });

        sink.deliver(&Credentials {
            email: "user@example.com".to_string(),
            password: "hunter2".to_string(),
        })
        .await;

        assert_eq!(*seen.lock().unwrap(), vec!["user@example.com".to_string()]);
    }

    #[tokio::test]
    async fn test_callback_runs_once_per_delivery() {
        let calls = Arc::new(Mutex::new(0usize));
        let counter = Arc::clone(&calls);
        let sink = CallbackSink::new(move |_: &str| {
            *counter.lock().unwrap() += 1;
        });
        let credentials = Credentials {
            email: "a@b.c".to_string(),
            password: "pw".to_string(),
        };

        for _ in 0..3 {
            sink.deliver(&credentials).await;
        }

        assert_eq!(*calls.lock().unwrap(), 3);
    }
}
