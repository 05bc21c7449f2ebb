pub mod wikimedia;

pub use wikimedia::WikimediaClient;
