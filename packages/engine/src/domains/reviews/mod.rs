pub mod data;
pub mod models;
pub mod scoring;

pub use data::review_view::ReviewView;
pub use models::review::{CreateReview, Review};
pub use scoring::{ReviewSignals, FLAG_THRESHOLD};
