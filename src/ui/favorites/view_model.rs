//! Favorites screen view-model: mirrors the favorites store.

use tokio::sync::mpsc;
use tracing::Instrument;
use uuid::Uuid;

use crate::api::Photo;
use crate::storage::FavoritesStore;
use crate::ui::mvi::Reducer;
use crate::ui::port::{PortError, StatePublisher, ViewModelHandle};
use crate::ui::routing::{send_route, Route, RouteSender};

use super::intent::{FavoritesInput, FavoritesIntent};
use super::reducer::FavoritesReducer;
use super::state::FavoritesState;

pub type FavoritesHandle = ViewModelHandle<FavoritesInput, FavoritesState>;

impl FavoritesHandle {
    pub fn refresh(&self) -> Result<(), PortError> {
        self.send(FavoritesInput::Refresh)
    }

    pub fn delete_by_id(&self, id: impl Into<String>) -> Result<(), PortError> {
        self.send(FavoritesInput::DeleteById(id.into()))
    }

    pub fn select_detail(&self, photo: Photo) -> Result<(), PortError> {
        self.send(FavoritesInput::SelectDetail(photo))
    }
}

pub struct FavoritesViewModel {
    store: FavoritesStore,
    routes: RouteSender,
    state: FavoritesState,
    publisher: StatePublisher<FavoritesState>,
    inputs: mpsc::UnboundedReceiver<FavoritesInput>,
}

impl FavoritesViewModel {
    /// Start the view-model. The store is not read until the first
    /// `Refresh`.
    pub fn spawn(store: FavoritesStore, routes: RouteSender) -> FavoritesHandle {
        let (input_tx, inputs) = mpsc::unbounded_channel();
        let (publisher, state_rx) = StatePublisher::new(FavoritesState::default());

        let view_model = Self {
            store,
            routes,
            state: FavoritesState::default(),
            publisher,
            inputs,
        };

        let span = tracing::info_span!("view_model", screen = "favorites", instance = %Uuid::new_v4());
        tokio::spawn(view_model.run().instrument(span));

        ViewModelHandle::new(input_tx, state_rx)
    }

    async fn run(mut self) {
        while let Some(input) = self.inputs.recv().await {
            match input {
                FavoritesInput::Refresh => self.sync(),
                FavoritesInput::DeleteById(id) => {
                    self.store.remove(&id);
                    self.sync();
                }
                FavoritesInput::SelectDetail(photo) => {
                    tracing::debug!(photo_id = %photo.id, "Detail selected");
                    send_route(&self.routes, Route::Detail(photo));
                }
            }
        }
        tracing::debug!("Favorites view-model stopped");
    }

    fn sync(&mut self) {
        let photos = self.store.read_all();
        tracing::debug!(count = photos.len(), "Favorites synced");
        self.state = FavoritesReducer::reduce(
            std::mem::take(&mut self.state),
            FavoritesIntent::Synced { photos },
        );
        self.publisher.publish(&self.state);
    }
}
