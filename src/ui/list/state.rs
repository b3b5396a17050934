use crate::api::Photo;
use crate::ui::mvi::UiState;
use crate::ui::notice::Notice;

/// Coarse loading phase derived from the loading flag and error slot.
///
/// Data is kept across phases: a `Loading` screen still shows the
/// previously loaded feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Idle,
    Loading,
    Loaded,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListState {
    /// Primary feed, append-only for the lifetime of the view-model.
    pub feed: Vec<Photo>,
    /// Results of the latest applied search, replaced on every search.
    pub search_results: Vec<Photo>,
    /// Query whose results are in `search_results`.
    pub search_query: Option<String>,
    /// Page cursor. Only ever moves forward.
    pub page: u32,
    pub page_in_flight: bool,
    pub searches_in_flight: usize,
    pub error: Option<Notice>,
    pub has_loaded: bool,
}

impl Default for ListState {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl UiState for ListState {}

impl ListState {
    pub fn starting_at(page: u32) -> Self {
        Self {
            feed: Vec::new(),
            search_results: Vec::new(),
            search_query: None,
            page,
            page_in_flight: false,
            searches_in_flight: 0,
            error: None,
            has_loaded: false,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.page_in_flight || self.searches_in_flight > 0
    }

    pub fn phase(&self) -> LoadPhase {
        if self.is_loading() {
            LoadPhase::Loading
        } else if self.error.is_some() {
            LoadPhase::Error
        } else if self.has_loaded {
            LoadPhase::Loaded
        } else {
            LoadPhase::Idle
        }
    }

    pub fn is_searching(&self) -> bool {
        self.search_query.is_some()
    }
}
