//! Composition root for the three screens.
//!
//! The coordinator owns the single `FavoritesStore` shared by every
//! view-model, consumes route events from the list, favorites and detail
//! screens, and keeps the stack of open detail screens.

use std::sync::Arc;

use crate::api::PhotoApi;
use crate::config::FeedConfig;
use crate::storage::FavoritesStore;
use crate::ui::detail::{DetailHandle, DetailViewModel};
use crate::ui::favorites::{FavoritesHandle, FavoritesViewModel};
use crate::ui::list::{ListHandle, ListViewModel};
use crate::ui::routing::{route_channel, Route, RouteReceiver, RouteSender};

/// Root tabs, as in the tab bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Photos,
    Favorites,
}

/// Navigation change applied by the coordinator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    DetailOpened { photo_id: String },
    DetailClosed { photo_id: String },
}

pub struct AppCoordinator {
    store: FavoritesStore,
    routes_tx: RouteSender,
    routes: RouteReceiver,
    list: ListHandle,
    favorites: FavoritesHandle,
    details: Vec<DetailHandle>,
    tab: Tab,
}

impl AppCoordinator {
    /// Spawn the list and favorites view-models and kick off the first
    /// page load.
    pub fn start(api: Arc<dyn PhotoApi>, store: FavoritesStore, feed: &FeedConfig) -> Self {
        let (routes_tx, routes) = route_channel();
        let list = ListViewModel::spawn(api, feed, routes_tx.clone());
        let favorites = FavoritesViewModel::spawn(store.clone(), routes_tx.clone());

        if list.load_initial().is_err() {
            tracing::warn!("List view-model stopped before initial load");
        }

        tracing::info!("Coordinator started");
        Self {
            store,
            routes_tx,
            routes,
            list,
            favorites,
            details: Vec::new(),
            tab: Tab::Photos,
        }
    }

    pub fn list(&self) -> &ListHandle {
        &self.list
    }

    pub fn favorites(&self) -> &FavoritesHandle {
        &self.favorites
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    /// Switch tabs. Showing favorites re-reads the store.
    pub fn show_tab(&mut self, tab: Tab) {
        self.tab = tab;
        if tab == Tab::Favorites && self.details.is_empty() {
            self.refresh_favorites();
        }
    }

    /// Topmost open detail screen.
    pub fn current_detail(&mut self) -> Option<&mut DetailHandle> {
        self.details.last_mut()
    }

    /// Open detail screens, bottom first.
    pub fn details(&self) -> &[DetailHandle] {
        &self.details
    }

    pub fn depth(&self) -> usize {
        self.details.len()
    }

    /// Wait for the next route and apply it.
    ///
    /// Returns `None` only if every route sender is gone, which cannot
    /// happen while the coordinator is alive.
    pub async fn next_navigation(&mut self) -> Option<Navigation> {
        loop {
            let route = self.routes.recv().await?;
            if let Some(navigation) = self.apply(route) {
                return Some(navigation);
            }
        }
    }

    /// Apply one already-queued route, if any.
    pub fn try_next_navigation(&mut self) -> Option<Navigation> {
        while let Ok(route) = self.routes.try_recv() {
            if let Some(navigation) = self.apply(route) {
                return Some(navigation);
            }
        }
        None
    }

    fn apply(&mut self, route: Route) -> Option<Navigation> {
        match route {
            Route::Detail(photo) => {
                let photo_id = photo.id.clone();
                let handle =
                    DetailViewModel::spawn(photo, self.store.clone(), self.routes_tx.clone());
                self.details.push(handle);
                tracing::info!(photo_id = %photo_id, depth = self.details.len(), "Detail opened");
                Some(Navigation::DetailOpened { photo_id })
            }
            Route::Back { photo_id } => {
                let on_top = self.details.last().map(|top| top.photo().id.as_str());
                if on_top != Some(photo_id.as_str()) {
                    tracing::debug!(photo_id = %photo_id, "Back from a detail not on top ignored");
                    return None;
                }
                self.details.pop();
                tracing::info!(photo_id = %photo_id, depth = self.details.len(), "Detail closed");

                // The favorites screen becomes visible again.
                if self.tab == Tab::Favorites && self.details.is_empty() {
                    self.refresh_favorites();
                }
                Some(Navigation::DetailClosed { photo_id })
            }
        }
    }

    fn refresh_favorites(&self) {
        if self.favorites.refresh().is_err() {
            tracing::warn!("Favorites view-model stopped");
        }
    }
}
