pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use domain::{BirthRecord, BirthsFeed, ResultSet};
pub use infrastructure::WikimediaClient;
