//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod activity_repository;
mod credential_source;
mod session_manager;

pub use activity_repository::ActivityRepositoryPort;
pub use credential_source::{CredentialError, CredentialSourcePort, TeacherCredential};
pub use session_manager::{Session, SessionError, SessionManagerPort};
