//! Base trait for screen state in MVI architecture.

/// Marker trait for published screen state.
///
/// States should be:
/// - Cheap to snapshot (Clone) for every subscriber
/// - Self-contained (all data needed to render the screen)
/// - Comparable (PartialEq for detecting changes)
pub trait UiState: Clone + PartialEq + Default + Send + Sync + 'static {}
