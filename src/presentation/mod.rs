mod components;
mod view;

pub use components::submit_label;
pub use view::{UiContext, draw};
