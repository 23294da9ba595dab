//! Feedback form state machine

use cli_log::*;

use crate::error::FeedbackError;
use crate::toast::Toaster;
use super::client::{FeedbackClient, FeedbackSubmission};

pub const FEEDBACK_PLACEHOLDER: &str = "Enter your feedback here...";
pub const SUCCESS_DESCRIPTION: &str = "Thank you for your feedback!";
pub const FAILURE_DESCRIPTION: &str = "Failed to submit feedback. Please try again.";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
}

#[derive(Debug, Default)]
pub struct FeedbackForm {
    message: String,
    status: FormStatus,
}

impl FeedbackForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == FormStatus::Submitting
    }

    pub fn button_label(&self) -> &'static str {
        match self.status {
            FormStatus::Idle => "Submit Feedback",
            FormStatus::Submitting => "Submitting...",
        }
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    pub fn push_char(&mut self, ch: char) {
        self.message.push(ch);
    }

    pub fn pop_char(&mut self) {
        self.message.pop();
    }

    /// Validate the message and move to `Submitting`.
    ///
    /// Returns the submission to send, or `None` after surfacing a
    /// validation toast when the message is blank.
    pub fn begin_submit(&mut self, toaster: &mut Toaster) -> Option<FeedbackSubmission> {
        if self.message.trim().is_empty() {
            info!("Feedback rejected: empty message");
            toaster.error("Error", FeedbackError::EmptyMessage.to_string());
            return None;
        }

        self.status = FormStatus::Submitting;
        Some(FeedbackSubmission {
            message: self.message.clone(),
        })
    }

    /// Apply the outcome of the request started by `begin_submit`.
    pub fn finish(&mut self, result: Result<(), FeedbackError>, toaster: &mut Toaster) {
        self.status = FormStatus::Idle;
        match result {
            Ok(()) => {
                info!("Feedback submitted");
                self.message.clear();
                toaster.success("Success", SUCCESS_DESCRIPTION);
            }
            Err(e) => {
                warn!("Feedback submission failed: {e}");
                toaster.error("Error", FAILURE_DESCRIPTION);
            }
        }
    }

    /// Validate, send and apply the result in one go.
    pub async fn submit(&mut self, client: &FeedbackClient, toaster: &mut Toaster) {
        let Some(submission) = self.begin_submit(toaster) else {
            return;
        };
        let result = client.submit(&submission).await;
        self.finish(result, toaster);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::ToastKind;
    use reqwest::StatusCode;

    #[test]
    fn blank_message_is_rejected_locally() {
        let mut form = FeedbackForm::new();
        let mut toaster = Toaster::new();
        form.set_message("   ");

        assert!(form.begin_submit(&mut toaster).is_none());
        assert_eq!(form.status(), FormStatus::Idle);
        assert_eq!(form.message(), "   ");
        let toast = toaster.latest().unwrap();
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(toast.description, "Please enter your feedback message");
    }

    #[test]
    fn begin_submit_sends_the_message_verbatim() {
        let mut form = FeedbackForm::new();
        let mut toaster = Toaster::new();
        form.set_message("  spaced out  ");

        let submission = form.begin_submit(&mut toaster).unwrap();
        assert_eq!(submission.message, "  spaced out  ");
        assert!(form.is_submitting());
        assert_eq!(form.button_label(), "Submitting...");
        assert!(toaster.is_empty());
    }

    #[test]
    fn success_clears_and_failure_keeps_the_message() {
        let mut toaster = Toaster::new();

        let mut form = FeedbackForm::new();
        form.set_message("Great app!");
        form.begin_submit(&mut toaster).unwrap();
        form.finish(Ok(()), &mut toaster);
        assert_eq!(form.status(), FormStatus::Idle);
        assert_eq!(form.message(), "");
        assert_eq!(toaster.latest().unwrap().kind, ToastKind::Success);

        form.set_message("Charts are slow");
        form.begin_submit(&mut toaster).unwrap();
        form.finish(Err(FeedbackError::Status(StatusCode::BAD_GATEWAY)), &mut toaster);
        assert_eq!(form.status(), FormStatus::Idle);
        assert_eq!(form.message(), "Charts are slow");
        let toast = toaster.latest().unwrap();
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(toast.description, FAILURE_DESCRIPTION);
    }

    #[test]
    fn typing_edits_the_message() {
        let mut form = FeedbackForm::new();
        for ch in "hi!".chars() {
            form.push_char(ch);
        }
        form.pop_char();
        assert_eq!(form.message(), "hi");
        assert_eq!(form.button_label(), "Submit Feedback");
    }
}
