//! Detail screen view-model: one photo and the save-to-favorites action.

use tokio::sync::mpsc;
use tracing::Instrument;
use uuid::Uuid;

use crate::api::Photo;
use crate::storage::FavoritesStore;
use crate::ui::mvi::Reducer;
use crate::ui::notice::Notice;
use crate::ui::port::{PortError, StatePublisher, ViewModelHandle};
use crate::ui::routing::{send_route, Route, RouteSender};

use super::intent::{DetailInput, DetailIntent, ToggleOutcome};
use super::reducer::DetailReducer;
use super::state::DetailState;

/// View-side handle for a detail screen.
///
/// Besides the state port it carries the one-shot notice stream the view
/// turns into alerts.
pub struct DetailHandle {
    photo: Photo,
    port: ViewModelHandle<DetailInput, DetailState>,
    notices: mpsc::UnboundedReceiver<Notice>,
}

impl DetailHandle {
    /// The photo this screen was opened with.
    pub fn photo(&self) -> &Photo {
        &self.photo
    }

    pub fn state(&self) -> DetailState {
        self.port.state()
    }

    pub fn toggle_favorite(&self) -> Result<(), PortError> {
        self.port.send(DetailInput::ToggleFavorite)
    }

    pub fn back(&self) -> Result<(), PortError> {
        self.port.send(DetailInput::Back)
    }

    /// Next toggle notice, waiting if none is queued yet.
    pub async fn next_notice(&mut self) -> Option<Notice> {
        self.notices.recv().await
    }

    pub fn try_next_notice(&mut self) -> Option<Notice> {
        self.notices.try_recv().ok()
    }
}

pub struct DetailViewModel {
    photo: Photo,
    store: FavoritesStore,
    routes: RouteSender,
    state: DetailState,
    publisher: StatePublisher<DetailState>,
    inputs: mpsc::UnboundedReceiver<DetailInput>,
    notices: mpsc::UnboundedSender<Notice>,
}

impl DetailViewModel {
    pub fn spawn(photo: Photo, store: FavoritesStore, routes: RouteSender) -> DetailHandle {
        let (input_tx, inputs) = mpsc::unbounded_channel();
        let (notice_tx, notice_rx) = mpsc::unbounded_channel();

        let is_favorite = store.contains(&photo.id);
        let state = DetailReducer::reduce(
            DetailState::default(),
            DetailIntent::Opened {
                photo: photo.clone(),
                is_favorite,
            },
        );
        let (publisher, state_rx) = StatePublisher::new(state.clone());

        let view_model = Self {
            photo: photo.clone(),
            store,
            routes,
            state,
            publisher,
            inputs,
            notices: notice_tx,
        };

        let span = tracing::info_span!(
            "view_model",
            screen = "detail",
            instance = %Uuid::new_v4(),
            photo_id = %photo.id
        );
        tokio::spawn(view_model.run().instrument(span));

        DetailHandle {
            photo,
            port: ViewModelHandle::new(input_tx, state_rx),
            notices: notice_rx,
        }
    }

    async fn run(mut self) {
        while let Some(input) = self.inputs.recv().await {
            match input {
                DetailInput::ToggleFavorite => self.toggle_favorite(),
                DetailInput::Back => send_route(
                    &self.routes,
                    Route::Back {
                        photo_id: self.photo.id.clone(),
                    },
                ),
            }
        }
        tracing::debug!("Detail view-model stopped");
    }

    fn toggle_favorite(&mut self) {
        let outcome = if self.store.contains(&self.photo.id) {
            ToggleOutcome::AlreadyFavorite
        } else {
            self.store.add(self.photo.clone());
            ToggleOutcome::Added
        };
        tracing::debug!(?outcome, "Toggle favorite");

        self.state = DetailReducer::reduce(
            std::mem::take(&mut self.state),
            DetailIntent::Toggled { outcome },
        );
        self.publisher.publish(&self.state);

        if self.notices.send(outcome.notice()).is_err() {
            tracing::trace!("Notice dropped (view gone)");
        }
    }
}
