pub mod deps;
pub mod test_dependencies;
pub mod traits;

pub use deps::{DetectorAdapter, EngineDeps};
pub use test_dependencies::MockFeatureExtractor;
pub use traits::*;
