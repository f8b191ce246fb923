//! Auth Command Handlers

use std::sync::Arc;

use crate::application::commands::{LoginCommand, LoginResponse, LogoutCommand, LogoutResponse};
use crate::application::error::ApplicationError;
use crate::application::ports::{CredentialSourcePort, Session, SessionManagerPort};

/// Login Handler - 校验凭据并创建会话
pub struct LoginHandler {
    credential_source: Arc<dyn CredentialSourcePort>,
    session_manager: Arc<dyn SessionManagerPort>,
}

impl LoginHandler {
    pub fn new(
        credential_source: Arc<dyn CredentialSourcePort>,
        session_manager: Arc<dyn SessionManagerPort>,
    ) -> Self {
        Self {
            credential_source,
            session_manager,
        }
    }

    pub async fn handle(&self, cmd: LoginCommand) -> Result<LoginResponse, ApplicationError> {
        // 每次登录都重新加载凭据
        let teachers = self.credential_source.load().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to load teacher credentials");
            ApplicationError::from(e)
        })?;

        let teacher = teachers
            .iter()
            .find(|t| t.matches(&cmd.username, &cmd.password))
            .ok_or_else(|| {
                tracing::debug!(username = %cmd.username, "Login rejected");
                ApplicationError::InvalidCredentials
            })?;

        let session = Session::new(teacher.username.clone());
        let token = self
            .session_manager
            .create(session)
            .map_err(|e| ApplicationError::internal(e.to_string()))?;

        tracing::info!(username = %teacher.username, "Teacher logged in");

        Ok(LoginResponse {
            token,
            username: teacher.username.clone(),
        })
    }
}

/// Logout Handler - 删除会话
pub struct LogoutHandler {
    session_manager: Arc<dyn SessionManagerPort>,
}

impl LogoutHandler {
    pub fn new(session_manager: Arc<dyn SessionManagerPort>) -> Self {
        Self { session_manager }
    }

    pub async fn handle(&self, cmd: LogoutCommand) -> Result<LogoutResponse, ApplicationError> {
        let token = cmd
            .token
            .ok_or_else(|| ApplicationError::unauthorized("Not authenticated"))?;

        let session = self
            .session_manager
            .close(&token)
            .map_err(|_| ApplicationError::unauthorized("Not authenticated"))?;

        tracing::info!(username = %session.username, "Teacher logged out");

        Ok(LogoutResponse {
            message: "Logged out successfully".to_string(),
        })
    }
}
