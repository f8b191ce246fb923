//! Command Handlers 实现
//!
//! 所有 CommandHandler 的具体实现

mod activity_handlers;
mod auth_handlers;

pub use activity_handlers::*;
pub use auth_handlers::*;
