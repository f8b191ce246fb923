//! HTTP Handlers

mod activity;
mod auth;
mod ping;
mod root;

pub use activity::*;
pub use auth::*;
pub use ping::*;
pub use root::*;
