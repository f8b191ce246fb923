//! Credential Source Port - 教师凭据来源
//!
//! 凭据由外部静态来源提供，运行期只读；每次登录都重新读取

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

/// 凭据加载错误
#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

/// 教师凭据（明文）
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TeacherCredential {
    pub username: String,
    pub password: String,
}

impl TeacherCredential {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// 用户名与密码均精确匹配
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

/// Credential Source Port
#[async_trait]
pub trait CredentialSourcePort: Send + Sync {
    /// 加载全部教师凭据
    async fn load(&self) -> Result<Vec<TeacherCredential>, CredentialError>;
}
