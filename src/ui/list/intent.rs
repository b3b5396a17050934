use crate::api::Photo;
use crate::ui::mvi::Intent;
use crate::ui::notice::Notice;

/// Inputs the list view forwards to the view-model.
#[derive(Debug, Clone, PartialEq)]
pub enum ListInput {
    /// Fetch the current page once, when the screen first appears.
    LoadInitial,
    /// The view's prefetch signal reports the end of the feed is near.
    LoadMore,
    /// Search field changed. `None` or empty cancels the search.
    SetSearchText(Option<String>),
    /// A cell was tapped.
    SelectDetail(Photo),
}

/// State transitions of the list screen.
#[derive(Debug, Clone)]
pub enum ListIntent {
    PageRequested { page: u32 },
    PageLoaded { page: u32, photos: Vec<Photo> },
    PageFailed { page: u32, notice: Notice },
    SearchStarted { query: String },
    SearchLoaded { query: String, results: Vec<Photo> },
    SearchFailed { query: String, notice: Notice },
    /// A response for a search the user has since cleared.
    SearchDiscarded { query: String },
    SearchCleared,
}

impl Intent for ListIntent {}
