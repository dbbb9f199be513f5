pub mod place;

pub use place::{CreatePlace, Place};
