//! Base trait for intents.

/// Marker trait for intent objects: user gestures or system events that a
/// reducer turns into a new screen state.
pub trait Intent: Send + 'static {}
