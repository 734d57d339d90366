//! Landing screen: notes input and the submit/processing status line.
//!
//! - `state.rs` - notes text and status
//! - `intent.rs` - typing, clear, submission lifecycle
//! - `reducer.rs` - state transitions (pure)
//! - `view.rs` - rendering

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::LandingIntent;
pub use reducer::LandingReducer;
pub use state::{LandingState, LandingStatus};
pub use view::render_landing;
