use std::{sync::Arc, time::Duration};

use super::keymap::{self, KeymapStore};

/// Knobs for the terminal front end.
#[derive(Clone)]
pub struct UiOptions {
    pub tick_rate: Duration,
    pub confirm_exit: bool,
    pub show_help: bool,
    pub(crate) keymap_store: Arc<KeymapStore>,
}

impl std::fmt::Debug for UiOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UiOptions")
            .field("tick_rate", &self.tick_rate)
            .field("confirm_exit", &self.confirm_exit)
            .field("show_help", &self.show_help)
            .finish_non_exhaustive()
    }
}

impl Default for UiOptions {
    fn default() -> Self {
        Self {
            tick_rate: Duration::from_millis(100),
            confirm_exit: true,
            show_help: true,
            keymap_store: keymap::default_store(),
        }
    }
}

impl UiOptions {
    pub fn with_help(mut self, show: bool) -> Self {
        self.show_help = show;
        self
    }

    /// Ask for a second Ctrl+Q before quitting with a request in flight.
    pub fn with_confirm_exit(mut self, confirm: bool) -> Self {
        self.confirm_exit = confirm;
        self
    }

    pub fn with_tick_rate(mut self, tick_rate: Duration) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    /// Replaces the bundled keymap with a JSON document of the same shape.
    pub fn with_keymap_json(mut self, source: &str) -> anyhow::Result<Self> {
        let store = KeymapStore::from_json(source).map_err(anyhow::Error::msg)?;
        self.keymap_store = Arc::new(store);
        Ok(self)
    }
}
