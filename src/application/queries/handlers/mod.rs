//! Query Handlers 实现
//!
//! 所有 QueryHandler 的具体实现

mod activity_handlers;
mod auth_handlers;

pub use activity_handlers::*;
pub use auth_handlers::*;
