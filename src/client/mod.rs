//! Outbound side of the form: turning a payload into a [`Prediction`].

mod error;
mod http;
mod response;

pub use error::{MALFORMED_RESPONSE, NETWORK_FAILURE, SubmitError};
pub use http::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT, HttpPredictionClient};
pub use response::{Prediction, interpret_body, interpret_value};

use crate::form::PredictionPayload;

/// Anything able to answer a single prediction request.
///
/// Implementations are called from a background thread and may block.
pub trait PredictionClient: Send + Sync {
    fn predict(&self, payload: &PredictionPayload) -> Result<Prediction, SubmitError>;
}
