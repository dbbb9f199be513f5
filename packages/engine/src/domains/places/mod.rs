pub mod activities;
pub mod data;
pub mod models;

pub use activities::refresh::refresh_place;
pub use data::place_view::{PlaceSummary, PlaceView};
pub use models::place::{CreatePlace, Place};
