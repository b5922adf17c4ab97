use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use crate::{
    client::{HttpPredictionClient, Prediction, PredictionClient},
    domain::FieldMap,
    form::FormModel,
    io::PredictorConfig,
};

use super::{options::UiOptions, runtime::App};

pub const DEFAULT_TITLE: &str = "Heart Disease Prediction";

/// Entry point: configure, then [`PredictorUI::run`] to take over the terminal.
pub struct PredictorUI {
    config: PredictorConfig,
    title: Option<String>,
    options: UiOptions,
    client: Option<Arc<dyn PredictionClient>>,
}

/// What the form held when the user quit.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionReport {
    pub values: FieldMap<String>,
    pub prediction: Option<Prediction>,
    pub api_error: Option<String>,
    pub attempts: u64,
}

impl From<FormModel> for SessionReport {
    fn from(model: FormModel) -> Self {
        Self {
            prediction: model.prediction(),
            api_error: model.api_error().map(str::to_string),
            attempts: model.attempts(),
            values: model.values().clone(),
        }
    }
}

impl Default for PredictorUI {
    fn default() -> Self {
        Self::new()
    }
}

impl PredictorUI {
    pub fn new() -> Self {
        Self {
            config: PredictorConfig::default(),
            title: None,
            options: UiOptions::default(),
            client: None,
        }
    }

    pub fn with_config(mut self, config: PredictorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_options(mut self, options: UiOptions) -> Self {
        self.options = options;
        self
    }

    /// Uses `client` instead of an HTTP client built from the config.
    pub fn with_client(mut self, client: Arc<dyn PredictionClient>) -> Self {
        self.client = Some(client);
        self
    }

    pub fn run(self) -> Result<SessionReport> {
        let PredictorUI {
            config,
            title,
            options,
            client,
        } = self;

        let values = config.initial_values()?;
        let client = match client {
            Some(client) => client,
            None => {
                let http = HttpPredictionClient::new(config.endpoint.clone(), config.timeout())
                    .context("failed to build HTTP client")?;
                Arc::new(http)
            }
        };
        info!(endpoint = %config.endpoint, timeout_secs = config.timeout_secs, "starting form");

        let app = App::new(
            FormModel::with_values(values),
            client,
            options,
            title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        );
        app.run().map(SessionReport::from)
    }
}
