use crate::ui::mvi::Reducer;

use super::intent::FavoritesIntent;
use super::state::FavoritesState;

pub struct FavoritesReducer;

impl Reducer for FavoritesReducer {
    type State = FavoritesState;
    type Intent = FavoritesIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FavoritesIntent::Synced { photos } => FavoritesState {
                photos,
                revision: state.revision + 1,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sync_replaces_photos_and_bumps_revision() {
        let state = FavoritesReducer::reduce(
            FavoritesState::default(),
            FavoritesIntent::Synced { photos: Vec::new() },
        );
        assert_eq!(state.revision, 1);
        assert!(state.photos.is_empty());
        assert!(!state.contains("x"));
    }
}
