mod state;

pub use state::{ResourceState, STATE_VERSION, StateError, StateFile, default_state_path};
