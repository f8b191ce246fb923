//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（ActivityRepository、SessionManager、CredentialSource）
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    // Activity commands
    SignUpCommand,
    SignUpResponse,
    UnregisterCommand,
    UnregisterResponse,
    // Auth commands
    LoginCommand,
    LoginResponse,
    LogoutCommand,
    LogoutResponse,
    // Handlers
    handlers::{LoginHandler, LogoutHandler, SignUpHandler, UnregisterHandler},
};

pub use error::ApplicationError;

pub use ports::{
    // Activity repository
    ActivityRepositoryPort,
    // Credential source
    CredentialError,
    CredentialSourcePort,
    TeacherCredential,
    // Session manager
    Session,
    SessionError,
    SessionManagerPort,
};

pub use queries::{
    GetAuthStatus,
    ListActivities,
    // Handlers
    handlers::{ActivityResponse, AuthStatusResponse, GetAuthStatusHandler, ListActivitiesHandler},
};
