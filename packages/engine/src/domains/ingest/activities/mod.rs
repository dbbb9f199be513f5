pub mod datapack;
pub mod ingest_review;
pub mod resolve_chain;
pub mod resolve_place;
pub mod resolve_user;

pub use datapack::{upload_places, upload_reviews, UploadReport};
pub use ingest_review::{ingest_review, ReviewIngest};
pub use resolve_chain::resolve_or_create_chain;
pub use resolve_place::resolve_or_create_place;
pub use resolve_user::resolve_or_create_user;
