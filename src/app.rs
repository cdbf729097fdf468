//! Application state and key handling

use crate::config::FormConfig;
use crate::form::{LoginForm, SubmitOutcome};
use crate::sink::{CallbackSink, LogSink, LoginSink, SinkKind};
use crate::state::{FieldEdit, Focus};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

/// Main application struct
pub struct App {
    /// The login form component
    pub form: LoginForm,
    /// Element receiving key input
    pub focus: Focus,
    /// Whether the password input is masked
    pub mask_password: bool,
    /// Sink the form was built with, for status wording
    pub sink_kind: SinkKind,
    /// Last outcome shown in the status bar
    pub status_message: Option<String>,
    /// Emails reported by the callback sink
    signed_in: Option<mpsc::UnboundedReceiver<String>>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create the app with the sink selected in `config`
    pub fn new(config: &FormConfig) -> Self {
        let sink_kind = config.sink_kind();
        let (sink, signed_in): (Box<dyn LoginSink>, _) = match sink_kind {
            SinkKind::Log => (Box::new(LogSink), None),
            SinkKind::Callback => {
                let (tx, rx) = mpsc::unbounded_channel();
                let sink = CallbackSink::new(move |email: &str| {
                    // The receiver lives as long as the app
                    let _ = tx.send(email.to_string());
                });
                (Box::new(sink), Some(rx))
            }
        };

        let mut app = Self::with_sink(sink, sink_kind, config.mask_password());
        app.signed_in = signed_in;
        app
    }

    /// Create the app around an already-built sink
    pub fn with_sink(sink: Box<dyn LoginSink>, sink_kind: SinkKind, mask_password: bool) -> Self {
        Self {
            form: LoginForm::new(sink),
            focus: Focus::default(),
            mask_password,
            sink_kind,
            status_message: None,
            signed_in: None,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Char('c') if ctrl => self.quit = true,
            KeyCode::Tab | KeyCode::Down => self.focus = self.focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.focus = self.focus.prev(),
            KeyCode::Enter => match self.focus {
                // Enter in the email field moves on rather than submitting
                Focus::Email => self.focus = Focus::Password,
                Focus::Password | Focus::SubmitButton => self.submit().await,
            },
            KeyCode::Char('s') if ctrl => self.submit().await,
            KeyCode::Char('r') if ctrl => self.mask_password = !self.mask_password,
            KeyCode::Char('u') if ctrl => self.edit_focused(FieldEdit::Clear),
            KeyCode::Char('v') if key.modifiers.contains(crate::platform::PASTE_MODIFIER) => {
                if let Err(err) = self.paste_from_clipboard() {
                    tracing::warn!("Clipboard paste failed: {err:#}");
                    self.status_message = Some("Clipboard unavailable".to_string());
                }
            }
            KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
                self.edit_focused(FieldEdit::Insert(c))
            }
            KeyCode::Backspace => self.edit_focused(FieldEdit::Backspace),
            _ => {}
        }
    }

    /// Handle a bracketed paste from the terminal
    pub fn handle_paste(&mut self, text: String) {
        self.edit_focused(FieldEdit::Paste(text));
    }

    /// Pick up emails reported by the callback sink since the last call
    pub fn poll_signed_in(&mut self) {
        if let Some(rx) = self.signed_in.as_mut() {
            while let Ok(email) = rx.try_recv() {
                tracing::info!(%email, "Login success callback fired");
                self.status_message = Some(format!("Signed in as {email}"));
            }
        }
    }

    async fn submit(&mut self) {
        match self.form.submit().await {
            SubmitOutcome::Delivered { email } => {
                self.focus = Focus::Email;
                self.status_message = match self.sink_kind {
                    SinkKind::Log => Some(format!("Credentials for {email} logged")),
                    // Set once the callback's message arrives
                    SinkKind::Callback => None,
                };
                self.poll_signed_in();
            }
            SubmitOutcome::Rejected(err) => {
                tracing::debug!("Submit rejected: {err}");
                self.status_message = None;
            }
        }
    }

    fn edit_focused(&mut self, edit: FieldEdit) {
        if let Some(field) = self.focus.field() {
            self.form.edit(field, edit);
        }
    }

    fn paste_from_clipboard(&mut self) -> Result<()> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        let text = clipboard.get_text()?;
        self.edit_focused(FieldEdit::Paste(text));
        Ok(())
    }
}
