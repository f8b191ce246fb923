//! Session Manager Port - 登录会话生命周期管理
//!
//! 定义会话管理的抽象接口，具体实现在 infrastructure/memory 层

use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

/// Session Manager 错误
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Session not found")]
    NotFound,

    #[error("Session already exists: {0}")]
    AlreadyExists(String),
}

/// 教师登录会话（in-memory）
///
/// 状态只有 absent / active 两种：登录创建，登出删除，不会过期
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// 为用户生成新的不透明 token
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            token: Uuid::new_v4().to_string(),
            username: username.into(),
            created_at: Utc::now(),
        }
    }
}

/// Session Manager Port
///
/// 管理 token → 用户名 的映射，所有状态存储在内存中
pub trait SessionManagerPort: Send + Sync {
    /// 创建新会话，返回 token
    fn create(&self, session: Session) -> Result<String, SessionError>;

    /// 根据 token 获取会话
    fn get(&self, token: &str) -> Result<Session, SessionError>;

    /// 检查 token 是否有效
    fn is_valid(&self, token: &str) -> bool;

    /// 关闭会话，返回被删除的会话
    fn close(&self, token: &str) -> Result<Session, SessionError>;

    /// 当前活跃会话数
    fn count(&self) -> usize;
}
