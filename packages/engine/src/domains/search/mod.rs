pub mod ratio;
pub mod resolver;

pub use ratio::{token_ratio, RELEVANCE_FLOOR};
pub use resolver::{rank_candidates, search_by_address, search_by_name, RankedMatch};
