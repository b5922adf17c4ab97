mod controller;
mod input;
mod keymap;
mod options;
mod predictor_ui;
mod runtime;
mod status;
mod terminal;
mod worker;

pub use controller::{Dispatched, SubmissionController};
pub use input::KeyAction;
pub use options::UiOptions;
pub use predictor_ui::{DEFAULT_TITLE, PredictorUI, SessionReport};
