//! Mergington - 课外活动报名服务
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Activity Context: 活动、报名名单及其不变量
//!
//! 应用层 (application/):
//! - Ports: ActivityRepository, SessionManager, CredentialSource
//! - Commands: 报名、取消报名、登录、登出
//! - Queries: 活动列表、登录状态
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API + 静态前端 + 教师身份中间件
//! - Memory: 活动表与会话表的内存实现
//! - Adapters: teachers.json 凭据来源

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
