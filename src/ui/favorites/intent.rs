use crate::api::Photo;
use crate::ui::mvi::Intent;

/// Inputs the favorites view forwards to the view-model.
#[derive(Debug, Clone, PartialEq)]
pub enum FavoritesInput {
    /// Screen became visible: re-read the store.
    Refresh,
    /// Swipe-to-delete on a cell.
    DeleteById(String),
    /// A cell was tapped.
    SelectDetail(Photo),
}

#[derive(Debug, Clone)]
pub enum FavoritesIntent {
    Synced { photos: Vec<Photo> },
}

impl Intent for FavoritesIntent {}
