//! Domain Layer - 领域层
//!
//! 限界上下文:
//! - Activity Context: 课外活动与报名名单

pub mod activity;

pub use activity::{default_activities, Activity, ActivityError};
