use crate::api::Photo;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FavoritesState {
    /// Store contents in insertion order.
    pub photos: Vec<Photo>,
    /// Number of store reads applied so far.
    pub revision: u64,
}

impl UiState for FavoritesState {}

impl FavoritesState {
    pub fn contains(&self, id: &str) -> bool {
        self.photos.iter().any(|photo| photo.id == id)
    }
}
