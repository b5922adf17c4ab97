use std::{collections::BTreeMap, fs, path::Path, time::Duration};

use anyhow::{Context, Result, anyhow, bail};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::{
    client::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT},
    domain::{FieldId, FieldMap, default_values, validate},
};

use super::format::{DocumentFormat, parse_document_str};

/// Where to send predictions and what the form starts with.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PredictorConfig {
    pub endpoint: String,
    /// Request timeout in seconds; `0` waits forever.
    pub timeout_secs: u64,
    /// Initial values keyed by wire name; unnamed fields keep their defaults.
    pub defaults: BTreeMap<String, Value>,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
            defaults: BTreeMap::new(),
        }
    }
}

impl PredictorConfig {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let format = DocumentFormat::from_path(path)?;
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = Self::from_str_with_format(&contents, format)
            .with_context(|| format!("invalid config {}", path.display()))?;
        debug!(path = %path.display(), %format, "loaded predictor config");
        Ok(config)
    }

    pub fn from_str_with_format(contents: &str, format: DocumentFormat) -> Result<Self> {
        let value = parse_document_str(contents, format)?;
        let config: PredictorConfig =
            serde_json::from_value(value).context("config does not match the expected shape")?;
        config.initial_values()?;
        Ok(config)
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }

    /// Builds the starting form values, rejecting unknown names and values
    /// that would fail their field rule.
    pub fn initial_values(&self) -> Result<FieldMap<String>> {
        let mut values = default_values();
        for (name, raw) in &self.defaults {
            let field = name
                .parse::<FieldId>()
                .map_err(|err| anyhow!("defaults: {err}"))?;
            let text = match raw {
                Value::Number(number) => number.to_string(),
                Value::String(text) => text.clone(),
                other => bail!("defaults.{name}: expected a number, found {other}"),
            };
            if let Some(message) = validate(field, &text) {
                bail!("defaults.{name}: {message}");
            }
            values.set(field, text);
        }
        Ok(values)
    }
}
