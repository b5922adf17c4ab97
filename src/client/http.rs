use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use tracing::{debug, warn};

use crate::form::PredictionPayload;

use super::{
    PredictionClient,
    error::SubmitError,
    response::{Prediction, interpret_body},
};

/// Local Flask service shipped with the model.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/predict";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Blocking JSON client for the `/predict` endpoint.
#[derive(Debug, Clone)]
pub struct HttpPredictionClient {
    client: Client,
    endpoint: String,
}

impl HttpPredictionClient {
    /// `timeout` of `None` waits for the transport indefinitely.
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> Result<Self, SubmitError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| SubmitError::Transport(err.to_string()))?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl PredictionClient for HttpPredictionClient {
    fn predict(&self, payload: &PredictionPayload) -> Result<Prediction, SubmitError> {
        debug!(endpoint = %self.endpoint, fields = payload.len(), "posting prediction request");

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .json(payload)
            .send()
            .map_err(|err| {
                warn!(endpoint = %self.endpoint, error = %err, "prediction request failed");
                SubmitError::Transport(err.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "prediction service returned an error status");
            return Err(SubmitError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .map_err(|err| SubmitError::Transport(err.to_string()))?;
        interpret_body(&body)
    }
}
