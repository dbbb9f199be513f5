pub mod place_view;

pub use place_view::{PlaceSummary, PlaceView};
