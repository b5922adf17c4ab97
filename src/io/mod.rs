mod config;
mod format;

pub use config::PredictorConfig;
pub use format::{DocumentFormat, parse_document_str};
