//! 应用层 - 命令（写操作）
//!
//! CQRS 命令侧：报名名单修改与会话创建/删除

mod activity_commands;
mod auth_commands;

pub mod handlers;

pub use activity_commands::*;
pub use auth_commands::*;
