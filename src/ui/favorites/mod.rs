mod intent;
mod reducer;
mod state;
mod view_model;

pub use intent::{FavoritesInput, FavoritesIntent};
pub use reducer::FavoritesReducer;
pub use state::FavoritesState;
pub use view_model::{FavoritesHandle, FavoritesViewModel};
