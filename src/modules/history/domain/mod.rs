pub mod birth_record;
pub mod births_feed;

pub use birth_record::{BirthRecord, ResultSet};
pub use births_feed::BirthsFeed;

#[cfg(test)]
pub use births_feed::MockBirthsFeed;
