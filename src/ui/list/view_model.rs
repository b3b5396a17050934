//! List screen view-model: paginated feed plus debounced search.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::Instant;
use tracing::Instrument;
use uuid::Uuid;

use crate::api::PhotoApi;
use crate::config::FeedConfig;
use crate::ui::mvi::Reducer;
use crate::ui::notice::Notice;
use crate::ui::port::{sleep_until_deadline, StatePublisher, ViewModelHandle};
use crate::ui::routing::{send_route, Route, RouteSender};

use super::intent::{ListInput, ListIntent};
use super::reducer::ListReducer;
use super::state::ListState;

pub type ListHandle = ViewModelHandle<ListInput, ListState>;

impl ListHandle {
    pub fn load_initial(&self) -> Result<(), crate::ui::PortError> {
        self.send(ListInput::LoadInitial)
    }

    pub fn load_more(&self) -> Result<(), crate::ui::PortError> {
        self.send(ListInput::LoadMore)
    }

    pub fn set_search_text(&self, text: Option<String>) -> Result<(), crate::ui::PortError> {
        self.send(ListInput::SetSearchText(text))
    }

    pub fn select_detail(&self, photo: crate::api::Photo) -> Result<(), crate::ui::PortError> {
        self.send(ListInput::SelectDetail(photo))
    }
}

/// Effect result, tagged with the clear epoch its request started in.
struct Completion {
    search_epoch: u64,
    intent: ListIntent,
}

/// Search text waiting out the debounce window.
struct PendingSearch {
    text: String,
    deadline: Instant,
}

pub struct ListViewModel {
    api: Arc<dyn PhotoApi>,
    routes: RouteSender,
    debounce: Duration,
    state: ListState,
    publisher: StatePublisher<ListState>,
    inputs: mpsc::UnboundedReceiver<ListInput>,
    completions_tx: mpsc::UnboundedSender<Completion>,
    completions: mpsc::UnboundedReceiver<Completion>,
    pending_search: Option<PendingSearch>,
    /// Last query sent to the API, for duplicate suppression.
    last_query: Option<String>,
    /// Bumped on every clear. Search responses from an earlier epoch are
    /// discarded.
    search_epoch: u64,
}

impl ListViewModel {
    /// Start the view-model on the current tokio runtime.
    ///
    /// Nothing is fetched until the view sends `LoadInitial` or `LoadMore`.
    pub fn spawn(api: Arc<dyn PhotoApi>, feed: &FeedConfig, routes: RouteSender) -> ListHandle {
        let (input_tx, inputs) = mpsc::unbounded_channel();
        let (completions_tx, completions) = mpsc::unbounded_channel();
        let state = ListState::starting_at(feed.first_page);
        let (publisher, state_rx) = StatePublisher::new(state.clone());

        let view_model = Self {
            api,
            routes,
            debounce: feed.search_debounce(),
            state,
            publisher,
            inputs,
            completions_tx,
            completions,
            pending_search: None,
            last_query: None,
            search_epoch: 0,
        };

        let span = tracing::info_span!("view_model", screen = "list", instance = %Uuid::new_v4());
        tokio::spawn(view_model.run().instrument(span));

        ViewModelHandle::new(input_tx, state_rx)
    }

    async fn run(mut self) {
        loop {
            let deadline = self.pending_search.as_ref().map(|p| p.deadline);
            tokio::select! {
                input = self.inputs.recv() => match input {
                    Some(input) => self.handle_input(input),
                    None => break,
                },
                Some(completion) = self.completions.recv() => self.complete(completion),
                _ = sleep_until_deadline(deadline) => self.fire_search(),
            }
        }
        tracing::debug!("List view-model stopped");
    }

    fn handle_input(&mut self, input: ListInput) {
        match input {
            ListInput::LoadInitial => {
                if !self.state.feed.is_empty() {
                    tracing::debug!("Initial load skipped, feed already populated");
                    return;
                }
                self.request_page(self.state.page);
            }
            ListInput::LoadMore => match self.state.page.checked_add(1) {
                Some(next) => self.request_page(next),
                None => tracing::warn!(page = self.state.page, "Page cursor at limit, load ignored"),
            },
            ListInput::SetSearchText(text) => self.set_search_text(text),
            ListInput::SelectDetail(photo) => {
                tracing::debug!(photo_id = %photo.id, "Detail selected");
                send_route(&self.routes, Route::Detail(photo));
            }
        }
    }

    fn request_page(&mut self, page: u32) {
        if self.state.page_in_flight {
            tracing::debug!(page, "Page request ignored, fetch already in flight");
            return;
        }
        self.dispatch(ListIntent::PageRequested { page });

        let api = Arc::clone(&self.api);
        let completions = self.completions_tx.clone();
        let search_epoch = self.search_epoch;
        tokio::spawn(
            async move {
                let intent = match api.fetch_page(page).await {
                    Ok(photos) => ListIntent::PageLoaded { page, photos },
                    Err(e) => {
                        tracing::warn!(
                            page,
                            error = %e,
                            kind = e.error_type(),
                            retryable = e.is_retryable(),
                            "Page fetch failed"
                        );
                        ListIntent::PageFailed {
                            page,
                            notice: Notice::from_network_error(&e),
                        }
                    }
                };
                let _ = completions.send(Completion {
                    search_epoch,
                    intent,
                });
            }
            .in_current_span(),
        );
    }

    fn set_search_text(&mut self, text: Option<String>) {
        match text.filter(|t| !t.is_empty()) {
            Some(text) => {
                self.pending_search = Some(PendingSearch {
                    text,
                    deadline: Instant::now() + self.debounce,
                });
            }
            None => {
                self.pending_search = None;
                self.last_query = None;
                self.search_epoch += 1;
                self.dispatch(ListIntent::SearchCleared);
            }
        }
    }

    /// Debounce window elapsed: send the pending text unless it repeats the
    /// previous query.
    fn fire_search(&mut self) {
        let Some(PendingSearch { text, .. }) = self.pending_search.take() else {
            return;
        };
        if self.last_query.as_deref() == Some(text.as_str()) {
            tracing::debug!(query = %text, "Duplicate search suppressed");
            return;
        }
        self.last_query = Some(text.clone());
        self.dispatch(ListIntent::SearchStarted {
            query: text.clone(),
        });

        let api = Arc::clone(&self.api);
        let completions = self.completions_tx.clone();
        let search_epoch = self.search_epoch;
        tokio::spawn(
            async move {
                // Superseded searches are not cancelled; whichever completes
                // last is what the view shows.
                let intent = match api.search(&text).await {
                    Ok(result) => ListIntent::SearchLoaded {
                        query: text,
                        results: result.results,
                    },
                    Err(e) => {
                        tracing::warn!(
                            query = %text,
                            error = %e,
                            retryable = e.is_retryable(),
                            "Search failed"
                        );
                        ListIntent::SearchFailed {
                            query: text,
                            notice: Notice::from_network_error(&e),
                        }
                    }
                };
                let _ = completions.send(Completion {
                    search_epoch,
                    intent,
                });
            }
            .in_current_span(),
        );
    }

    /// Apply an effect result. A search that was in flight when the text
    /// was cleared only releases its in-flight slot.
    fn complete(&mut self, Completion { search_epoch, intent }: Completion) {
        let cleared_since = search_epoch != self.search_epoch;
        match intent {
            ListIntent::SearchLoaded { query, .. } | ListIntent::SearchFailed { query, .. }
                if cleared_since =>
            {
                tracing::debug!(query = %query, "Search response after clear discarded");
                self.dispatch(ListIntent::SearchDiscarded { query });
            }
            intent => self.dispatch(intent),
        }
    }

    fn dispatch(&mut self, intent: ListIntent) {
        tracing::trace!(?intent, "List intent");
        self.state = ListReducer::reduce(std::mem::take(&mut self.state), intent);
        self.publisher.publish(&self.state);
    }
}
