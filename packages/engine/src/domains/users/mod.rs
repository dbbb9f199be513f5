pub mod activities;
pub mod models;

pub use activities::refresh::refresh_user;
pub use models::user::User;
