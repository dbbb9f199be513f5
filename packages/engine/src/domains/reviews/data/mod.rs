pub mod review_view;

pub use review_view::ReviewView;
