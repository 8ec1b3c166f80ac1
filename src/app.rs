//! Application state and core logic

use crate::config::EnquiryConfig;
use crate::enquiry::{EnquiryReceipt, EnquirySender, SendError};
use crate::state::AppState;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot::{self, error::TryRecvError};

type SendResult = Result<EnquiryReceipt, SendError>;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Delivers validated enquiries
    sender: Arc<dyn EnquirySender>,
    /// Result channel of the in-flight submission, if any
    pending: Option<oneshot::Receiver<SendResult>>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance from configuration
    pub fn new(config: &EnquiryConfig) -> Self {
        let sender = config.sender();
        tracing::info!("Using simulated sender with {:?} delay", sender.delay());
        Self::with_sender(Arc::new(sender), config.toast_duration())
    }

    pub fn with_sender(sender: Arc<dyn EnquirySender>, toast_duration: Duration) -> Self {
        Self {
            state: AppState::new(toast_duration),
            sender,
            pending: None,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Whether a submission is in flight
    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    /// Per-frame housekeeping: expire toasts, advance the spinner
    pub fn tick(&mut self) {
        self.state.notifications.prune();
        self.state.tick_spinner();
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Esc dismisses the newest toast before anything else
        if key.code == KeyCode::Esc && !self.state.notifications.is_empty() {
            self.state.notifications.dismiss_latest();
            return;
        }

        if self.state.form.is_submitted() {
            self.handle_success_key(key);
            return;
        }

        let on_button = self.state.is_submit_button_active();

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.state.next_form_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.prev_form_field(),
            KeyCode::Char('s')
                if key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | crate::platform::SUBMIT_MODIFIER) =>
            {
                self.submit()
            }
            KeyCode::Enter if on_button => self.submit(),
            // Enter in a field moves on, like a single-line input
            KeyCode::Enter => self.state.next_form_field(),
            KeyCode::Char(c)
                if !key.modifiers.contains(KeyModifiers::CONTROL)
                    && !key.modifiers.contains(KeyModifiers::ALT) =>
            {
                self.state.form_input_char(c)
            }
            KeyCode::Backspace => self.state.form_backspace(),
            _ => {}
        }
    }

    /// Keys on the confirmation view: any of Enter/q/Esc leaves
    fn handle_success_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q')) {
            self.quit = true;
        }
    }

    /// Validate and start delivery in the background
    fn submit(&mut self) {
        if self.pending.is_some() {
            return;
        }
        let Some(values) = self.state.form.begin_submit(&mut self.state.notifications) else {
            return;
        };

        let sender = Arc::clone(&self.sender);
        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            let result = sender.send(&values).await;
            if tx.send(result).is_err() {
                tracing::warn!("submission result dropped: receiver gone");
            }
        });
        self.pending = Some(rx);
    }

    /// Apply the delivery result if it has arrived. Returns true when applied.
    pub fn poll_submission(&mut self) -> bool {
        let Some(rx) = self.pending.as_mut() else {
            return false;
        };
        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return false,
            // The task ended without reporting, e.g. it panicked
            Err(TryRecvError::Closed) => Err(SendError::Interrupted),
        };
        self.finish_submission(result);
        true
    }

    fn finish_submission(&mut self, result: SendResult) {
        self.pending = None;
        self.state
            .form
            .complete_submit(result, &mut self.state.notifications);
    }

    /// Wait for the in-flight submission and apply it
    #[cfg(test)]
    pub async fn wait_for_submission(&mut self) {
        if let Some(rx) = self.pending.take() {
            let result = rx.await.unwrap_or(Err(SendError::Interrupted));
            self.finish_submission(result);
        }
    }
}
