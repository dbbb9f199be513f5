pub mod activities;
pub mod payload;

pub use activities::datapack::{upload_places, upload_reviews, UploadReport};
pub use activities::ingest_review::{ingest_review, ReviewIngest};
pub use activities::resolve_chain::resolve_or_create_chain;
pub use activities::resolve_place::resolve_or_create_place;
pub use activities::resolve_user::resolve_or_create_user;
pub use payload::{PlacePayload, RawReviewRecord, ReviewPayload, UserPayload};
