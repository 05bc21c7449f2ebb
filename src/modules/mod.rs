pub mod calendar;
pub mod explorer;
pub mod favorites;
pub mod history;
pub mod search;
