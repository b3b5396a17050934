//! Base trait for intents in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions forwarded by the view (scroll near end, search text)
/// - Effect completions (page loaded, search failed)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
