mod actions;
mod editing;
mod error;
mod payload;
mod reducers;
mod state;

pub use actions::{Effect, FormEvent, SubmissionRequest};
pub use editing::{edit_value, step_value};
pub use error::FieldCoercionError;
pub use payload::PredictionPayload;
pub use reducers::{Transition, reduce};
pub use state::{FormModel, Notice, Phase};
