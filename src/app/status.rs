use crate::{client::Prediction, form::Notice};

#[derive(Debug, Clone)]
pub struct StatusLine {
    message: String,
}

pub const READY_STATUS: &str = "Ready. Press Enter to submit for prediction.";

impl Default for StatusLine {
    fn default() -> Self {
        Self {
            message: READY_STATUS.to_string(),
        }
    }
}

impl StatusLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ready(&mut self) {
        self.message = READY_STATUS.to_string();
    }

    pub fn editing(&mut self, label: &str) {
        self.message = format!("Editing {label}");
    }

    pub fn submitting(&mut self, attempt: u64) {
        self.message = format!("Analyzing... (request #{attempt}, Esc to cancel)");
    }

    pub fn already_submitting(&mut self) {
        self.message = "A prediction is already in progress.".to_string();
    }

    pub fn blocked(&mut self, notice: Notice) {
        self.message = format!("Submission blocked: {}", notice.message());
    }

    pub fn cancelled(&mut self, attempt: u64) {
        self.message = format!("Request #{attempt} cancelled.");
    }

    pub fn cancel_pending(&mut self, attempt: u64) {
        self.message =
            format!("Waiting for cancelled request #{attempt} to finish before submitting again.");
    }

    pub fn settled(&mut self, prediction: Option<Prediction>, api_error: Option<&str>) {
        self.message = match (prediction, api_error) {
            (_, Some(_)) => "Prediction failed. Edit the form and resubmit.".to_string(),
            (Some(prediction), None) => format!("Prediction received: {prediction}"),
            (None, None) => READY_STATUS.to_string(),
        };
    }

    pub fn pending_exit(&mut self) {
        self.message = "A request is in flight. Press Ctrl+Q again to quit.".to_string();
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
