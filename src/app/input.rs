use std::sync::Arc;

use crossterm::event::KeyEvent;

use super::keymap::{KeymapContext, KeymapStore};

/// Command a key press resolves to before the form sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Submit,
    Quit,
    Cancel,
    Dismiss,
    ResetStatus,
    ClearResult,
    FieldStep(i32),
    /// Bound only for the help line; the key goes to the focused field.
    Passthrough,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CommandDispatch {
    Action(KeyAction),
    Input(KeyEvent),
}

#[derive(Clone)]
pub(crate) struct InputRouter {
    keymap: Arc<KeymapStore>,
}

impl InputRouter {
    pub(crate) fn new(keymap: Arc<KeymapStore>) -> Self {
        Self { keymap }
    }

    pub(crate) fn route(&self, key: &KeyEvent, context: KeymapContext) -> CommandDispatch {
        match self.keymap.classify(key, context) {
            Some(KeyAction::Passthrough) | None => CommandDispatch::Input(*key),
            Some(action) => CommandDispatch::Action(action),
        }
    }
}
