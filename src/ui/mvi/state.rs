//! Base trait for screen state.

/// Marker trait for screen state. `Default` is the state of a freshly
/// mounted screen.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
