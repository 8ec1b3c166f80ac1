//! Application state definitions

use super::forms::{ContactForm, Field};
use super::notifications::NotificationQueue;
use std::time::Duration;

/// Index of the "Send Enquiry" button in the focus order
pub const SUBMIT_BUTTON_INDEX: usize = Field::ALL.len();

/// What currently has keyboard focus on the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    Field(Field),
    SubmitButton,
}

/// Full application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// The enquiry form and its lifecycle
    pub form: ContactForm,
    /// Focus position: 0..=9 are fields, 10 is the submit button
    pub active_form_field: usize,
    /// On-screen toasts
    pub notifications: NotificationQueue,
    /// Frame counter for the submit spinner
    pub spinner_frame: usize,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(NotificationQueue::DEFAULT_DURATION)
    }
}

impl AppState {
    pub fn new(toast_duration: Duration) -> Self {
        Self {
            form: ContactForm::new(),
            active_form_field: 0,
            notifications: NotificationQueue::new(toast_duration),
            spinner_frame: 0,
        }
    }

    /// Number of focus stops: every field plus the submit button
    pub fn form_field_count(&self) -> usize {
        SUBMIT_BUTTON_INDEX + 1
    }

    /// Move to next form field
    pub fn next_form_field(&mut self) {
        self.active_form_field = (self.active_form_field + 1) % self.form_field_count();
    }

    /// Move to previous form field
    pub fn prev_form_field(&mut self) {
        if self.active_form_field == 0 {
            self.active_form_field = self.form_field_count() - 1;
        } else {
            self.active_form_field -= 1;
        }
    }

    pub fn focus(&self) -> FormFocus {
        Field::ALL
            .get(self.active_form_field)
            .map_or(FormFocus::SubmitButton, |f| FormFocus::Field(*f))
    }

    pub fn is_submit_button_active(&self) -> bool {
        self.focus() == FormFocus::SubmitButton
    }

    /// Append a character to the focused field
    pub fn form_input_char(&mut self, c: char) {
        if let FormFocus::Field(field) = self.focus() {
            let mut value = self.form.values().get(field).to_string();
            value.push(c);
            self.form.handle_change(field, value);
        }
    }

    /// Remove the last character of the focused field
    pub fn form_backspace(&mut self) {
        if let FormFocus::Field(field) = self.focus() {
            let mut value = self.form.values().get(field).to_string();
            if value.pop().is_some() {
                self.form.handle_change(field, value);
            }
        }
    }

    /// Advance the spinner shown while submitting
    pub fn tick_spinner(&mut self) {
        if self.form.is_submitting() {
            self.spinner_frame = self.spinner_frame.wrapping_add(1);
        } else {
            self.spinner_frame = 0;
        }
    }
}
