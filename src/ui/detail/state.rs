use crate::api::Photo;
use crate::ui::mvi::UiState;
use crate::ui::notice::Notice;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DetailState {
    /// Set once when the screen opens.
    pub photo: Option<Photo>,
    pub is_favorite: bool,
    pub last_notice: Option<Notice>,
}

impl UiState for DetailState {}
