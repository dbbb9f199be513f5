pub mod activities;
pub mod models;

pub use activities::refresh::refresh_chain;
pub use models::chain::Chain;
