use crate::api::Photo;
use crate::ui::mvi::Intent;
use crate::ui::notice::Notice;

/// Inputs the detail view forwards to the view-model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailInput {
    /// Like button: save the photo unless it is already a favorite.
    ToggleFavorite,
    /// Back button.
    Back,
}

/// Result of a toggle-favorite request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    /// Matched by id only; a changed record under the same id is not saved.
    AlreadyFavorite,
}

impl ToggleOutcome {
    pub fn notice(&self) -> Notice {
        match self {
            ToggleOutcome::Added => Notice::new("Great!", "Your photo has been added to favorites"),
            ToggleOutcome::AlreadyFavorite => {
                Notice::new("Error", "Photo is already in the Favorites")
            }
        }
    }
}

#[derive(Debug, Clone)]
pub enum DetailIntent {
    Opened { photo: Photo, is_favorite: bool },
    Toggled { outcome: ToggleOutcome },
}

impl Intent for DetailIntent {}
