mod intent;
mod reducer;
mod state;
mod view_model;

pub use intent::{ListInput, ListIntent};
pub use reducer::ListReducer;
pub use state::{ListState, LoadPhase};
pub use view_model::{ListHandle, ListViewModel};
