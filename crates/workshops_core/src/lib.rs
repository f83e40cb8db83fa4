//! Workshops core: pure state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use state::{AppState, LoadState, RequestId, Workshop};
pub use update::update;
pub use view_model::{filter_workshops, AppViewModel, DisplayState, WorkshopCardView};
