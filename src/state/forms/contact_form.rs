//! Contact form state: values, errors and the submission lifecycle

use super::field::{Field, FormValues};
use super::validation::{validate_values, FieldErrors};
use crate::enquiry::{EnquiryReceipt, EnquirySender, SendError};
use crate::state::{Notification, Notifier};

pub const INVALID_FORM_MESSAGE: &str = "Please fix the form errors before submitting.";
pub const SUBMITTED_MESSAGE: &str = "Your enquiry has been submitted successfully.";
pub const SEND_FAILED_MESSAGE: &str = "Something went wrong. Please try again later.";

/// Where the form is in its submission lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    /// Accepting input. Initial state.
    #[default]
    Editing,
    /// Waiting on the sender; the submit control is disabled.
    Submitting,
    /// The enquiry was accepted. Terminal.
    Submitted,
}

/// The enquiry form: one value record, one error mapping, one lifecycle
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    values: FormValues,
    errors: FieldErrors,
    state: SubmissionState,
    receipt: Option<EnquiryReceipt>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    pub fn is_submitted(&self) -> bool {
        self.state == SubmissionState::Submitted
    }

    /// Receipt of the accepted enquiry, once submitted
    pub fn receipt(&self) -> Option<&EnquiryReceipt> {
        self.receipt.as_ref()
    }

    /// Overwrite `field` with `value` and drop any error recorded for it.
    ///
    /// No revalidation happens here. Ignored once the form is submitted.
    pub fn handle_change(&mut self, field: Field, value: String) {
        if self.is_submitted() {
            return;
        }
        self.values.set(field, value);
        if self.errors.contains(field) {
            self.errors.clear_field(field);
        }
    }

    /// Run every constraint; replaces the whole error mapping with the result.
    pub fn validate(&mut self) -> bool {
        self.errors = validate_values(&self.values);
        self.errors.is_empty()
    }

    /// Validate and, when valid, move to `Submitting`.
    ///
    /// Returns the values to hand to the sender, or `None` when nothing
    /// should be sent (invalid input, or a submission is not possible from
    /// the current state).
    pub fn begin_submit(&mut self, notifier: &mut impl Notifier) -> Option<FormValues> {
        if self.state != SubmissionState::Editing {
            tracing::debug!("submit ignored while {:?}", self.state);
            return None;
        }

        if !self.validate() {
            let failing: Vec<&str> = self.errors.fields().map(|f| f.as_str()).collect();
            tracing::info!(
                "validation failed for {} fields: {}",
                self.errors.len(),
                failing.join(", ")
            );
            notifier.notify(Notification::destructive("Error", INVALID_FORM_MESSAGE));
            return None;
        }

        tracing::info!(
            "submitting enquiry with {} filled fields",
            self.values.filled_count()
        );
        self.state = SubmissionState::Submitting;
        Some(self.values.clone())
    }

    /// Apply the sender's outcome. Always leaves `Submitting`.
    pub fn complete_submit(
        &mut self,
        result: Result<EnquiryReceipt, SendError>,
        notifier: &mut impl Notifier,
    ) {
        if self.state != SubmissionState::Submitting {
            tracing::warn!("submission result arrived while {:?}", self.state);
            return;
        }

        match result {
            Ok(receipt) => {
                tracing::info!("enquiry {} accepted", receipt.reference);
                self.state = SubmissionState::Submitted;
                self.receipt = Some(receipt);
                notifier.notify(Notification::normal("Success!", SUBMITTED_MESSAGE));
            }
            Err(err) => {
                tracing::error!("enquiry submission failed: {err}");
                self.state = SubmissionState::Editing;
                notifier.notify(Notification::destructive("Error", SEND_FAILED_MESSAGE));
            }
        }
    }

    /// Validate, send and apply the result in one go.
    ///
    /// The event loop can't await here without freezing the UI, so `App`
    /// drives the same steps through `begin_submit` and `complete_submit`.
    #[allow(dead_code)]
    pub async fn submit<S>(&mut self, sender: &S, notifier: &mut impl Notifier)
    where
        S: EnquirySender + ?Sized,
    {
        let Some(values) = self.begin_submit(notifier) else {
            return;
        };
        let result = sender.send(&values).await;
        self.complete_submit(result, notifier);
    }
}
