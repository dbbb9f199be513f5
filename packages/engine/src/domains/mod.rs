pub mod chains;
pub mod ingest;
pub mod places;
pub mod reviews;
pub mod search;
pub mod users;
