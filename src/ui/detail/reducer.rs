use crate::ui::mvi::Reducer;

use super::intent::DetailIntent;
use super::state::DetailState;

pub struct DetailReducer;

impl Reducer for DetailReducer {
    type State = DetailState;
    type Intent = DetailIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DetailIntent::Opened { photo, is_favorite } => DetailState {
                photo: Some(photo),
                is_favorite,
                last_notice: None,
            },
            // Either outcome means the photo is now in favorites.
            DetailIntent::Toggled { outcome } => DetailState {
                is_favorite: true,
                last_notice: Some(outcome.notice()),
                ..state
            },
        }
    }
}
