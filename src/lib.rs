#![deny(rust_2018_idioms)]
//! Terminal form that validates thirteen clinical parameters and asks a
//! prediction service whether they indicate heart disease.

pub mod app;
pub mod client;
pub mod domain;
pub mod form;
pub mod io;
pub mod logging;
mod presentation;

#[cfg(test)]
mod tests;

pub use app::{PredictorUI, SessionReport, SubmissionController, UiOptions};
pub use client::{HttpPredictionClient, Prediction, PredictionClient, SubmitError};
pub use io::{DocumentFormat, PredictorConfig};

pub mod prelude {
    pub use super::{
        HttpPredictionClient, Prediction, PredictionClient, PredictorConfig, PredictorUI,
        SessionReport, SubmissionController, SubmitError, UiOptions,
    };
    pub use crate::domain::FieldId;
    pub use crate::form::{FormEvent, FormModel};
}
