//! Memory Layer - In-Memory State Management
//!
//! 实现 ActivityRepository 和 SessionManager，进程重启后所有状态丢失

mod activity_store;
mod session_manager;

pub use activity_store::InMemoryActivityStore;
pub use session_manager::InMemorySessionManager;
