use serde_json::Value;
use thiserror::Error;

/// Fallback shown for every transport level failure.
pub const NETWORK_FAILURE: &str =
    "Failed to fetch prediction. Please ensure the backend server is running.";

pub const MALFORMED_RESPONSE: &str = "The prediction service returned a response in an unknown format.";

/// Why a submission attempt did not produce a prediction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("response body is not JSON: {0}")]
    Decode(String),
    #[error("response does not match the prediction envelope: {0}")]
    Malformed(String),
    #[error("server reported an error: {0}")]
    ServerReported(String),
    #[error("unexpected prediction value {0}")]
    UnexpectedPrediction(Value),
}

impl SubmitError {
    /// Text placed in the result region.
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Transport(_) | SubmitError::Status(_) | SubmitError::Decode(_) => {
                NETWORK_FAILURE.to_string()
            }
            SubmitError::Malformed(_) => MALFORMED_RESPONSE.to_string(),
            SubmitError::ServerReported(message) => message.clone(),
            SubmitError::UnexpectedPrediction(value) => {
                format!("The prediction service returned an unexpected value: {value}.")
            }
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(
            self,
            SubmitError::Transport(_) | SubmitError::Status(_) | SubmitError::Decode(_)
        )
    }
}
