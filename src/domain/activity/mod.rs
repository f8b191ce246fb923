//! Activity Context - 课外活动限界上下文
//!
//! 职责:
//! - 活动报名名单管理
//! - 容量与重复报名校验
//! - 初始活动目录

mod aggregate;
mod catalog;
mod errors;

pub use aggregate::Activity;
pub use catalog::default_activities;
pub use errors::ActivityError;
