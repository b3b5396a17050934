//! Reducer for the list screen.

use crate::ui::mvi::Reducer;

use super::intent::ListIntent;
use super::state::ListState;

/// Pure state transitions. Fetches and the in-flight guard live in the
/// view-model around the dispatch.
pub struct ListReducer;

impl Reducer for ListReducer {
    type State = ListState;
    type Intent = ListIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ListIntent::PageRequested { page } => {
                state.page = page;
                state.page_in_flight = true;
                state.error = None;
            }
            ListIntent::PageLoaded { photos, .. } => {
                state.feed.extend(photos);
                state.page_in_flight = false;
                state.has_loaded = true;
            }
            ListIntent::PageFailed { notice, .. } => {
                // Cursor and feed stay where they are.
                state.page_in_flight = false;
                state.error = Some(notice);
            }
            ListIntent::SearchStarted { .. } => {
                state.searches_in_flight += 1;
                state.error = None;
            }
            ListIntent::SearchLoaded { query, results } => {
                state.search_results = results;
                state.search_query = Some(query);
                state.searches_in_flight = state.searches_in_flight.saturating_sub(1);
                state.has_loaded = true;
            }
            ListIntent::SearchFailed { notice, .. } => {
                state.searches_in_flight = state.searches_in_flight.saturating_sub(1);
                state.error = Some(notice);
            }
            ListIntent::SearchDiscarded { .. } => {
                state.searches_in_flight = state.searches_in_flight.saturating_sub(1);
            }
            ListIntent::SearchCleared => {
                state.search_results.clear();
                state.search_query = None;
            }
        }
        state
    }
}
