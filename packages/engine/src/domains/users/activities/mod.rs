pub mod refresh;

pub use refresh::refresh_user;
