//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

use crate::application::ports::CredentialError;
use crate::domain::activity::ActivityError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 资源未找到
    #[error("{resource_type} not found: {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// 业务规则违反（容量已满、重复报名、未报名）
    #[error("Business rule violation: {0}")]
    BusinessRuleViolation(String),

    /// 未认证
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// 用户名或密码错误，不区分用户是否存在
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// 外部服务错误
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 内部错误
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ApplicationError {
    /// 创建 NotFound 错误
    pub fn not_found(resource_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource_type,
            id: id.into(),
        }
    }

    /// 创建业务规则违反错误
    pub fn business_rule(message: impl Into<String>) -> Self {
        Self::BusinessRuleViolation(message.into())
    }

    /// 创建未认证错误
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    /// 创建内部错误
    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalError(message.into())
    }
}

impl From<ActivityError> for ApplicationError {
    fn from(err: ActivityError) -> Self {
        match err {
            ActivityError::NotFound(name) => Self::not_found("Activity", name),
            ActivityError::InvalidCapacity => Self::internal(err.to_string()),
            ActivityError::AtCapacity
            | ActivityError::AlreadySignedUp
            | ActivityError::NotSignedUp => Self::business_rule(err.to_string()),
        }
    }
}

impl From<CredentialError> for ApplicationError {
    fn from(err: CredentialError) -> Self {
        Self::ExternalServiceError(format!("Credential source unavailable: {}", err))
    }
}
