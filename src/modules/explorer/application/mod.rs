pub mod controller;
pub mod engine_state;
pub mod outcomes;
pub mod request_tracker;

pub use controller::BirthdayExplorerController;
pub use engine_state::{EngineState, ExplorerStatus};
pub use outcomes::{FavoriteToggle, LoadOutcome, NextBirthdayOutcome};
