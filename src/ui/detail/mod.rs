mod intent;
mod reducer;
mod state;
mod view_model;

pub use intent::{DetailInput, DetailIntent, ToggleOutcome};
pub use reducer::DetailReducer;
pub use state::DetailState;
pub use view_model::{DetailHandle, DetailViewModel};
