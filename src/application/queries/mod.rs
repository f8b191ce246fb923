//! 应用层 - 查询（读操作）
//!
//! CQRS 查询侧：活动列表与登录状态

mod activity_queries;
mod auth_queries;

pub mod handlers;

pub use activity_queries::*;
pub use auth_queries::*;
