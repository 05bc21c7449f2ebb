pub mod application;
pub mod commands;

// Re-exports for easy external access
pub use application::{
    BirthdayExplorerController, EngineState, ExplorerStatus, FavoriteToggle, LoadOutcome,
    NextBirthdayOutcome,
};
