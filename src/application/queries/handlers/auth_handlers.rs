//! Auth Query Handlers

use std::sync::Arc;

use crate::application::ports::SessionManagerPort;
use crate::application::queries::GetAuthStatus;

/// 登录状态响应
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthStatusResponse {
    pub authenticated: bool,
    pub username: Option<String>,
}

impl AuthStatusResponse {
    fn anonymous() -> Self {
        Self {
            authenticated: false,
            username: None,
        }
    }
}

/// GetAuthStatus Handler - 不会失败
pub struct GetAuthStatusHandler {
    session_manager: Arc<dyn SessionManagerPort>,
}

impl GetAuthStatusHandler {
    pub fn new(session_manager: Arc<dyn SessionManagerPort>) -> Self {
        Self { session_manager }
    }

    pub async fn handle(&self, query: GetAuthStatus) -> AuthStatusResponse {
        let Some(token) = query.token else {
            return AuthStatusResponse::anonymous();
        };

        match self.session_manager.get(&token) {
            Ok(session) => AuthStatusResponse {
                authenticated: true,
                username: Some(session.username),
            },
            Err(_) => AuthStatusResponse::anonymous(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::Session;
    use crate::infrastructure::memory::InMemorySessionManager;

    #[tokio::test]
    async fn test_auth_status() {
        let sessions = Arc::new(InMemorySessionManager::new());
        let token = sessions.create(Session::new("mchen")).unwrap();
        let handler = GetAuthStatusHandler::new(sessions.clone());

        let status = handler
            .handle(GetAuthStatus {
                token: Some(token.clone()),
            })
            .await;
        assert!(status.authenticated);
        assert_eq!(status.username.as_deref(), Some("mchen"));

        let status = handler
            .handle(GetAuthStatus {
                token: Some("bogus".to_string()),
            })
            .await;
        assert_eq!(status, AuthStatusResponse::anonymous());

        let status = handler.handle(GetAuthStatus { token: None }).await;
        assert!(!status.authenticated);
    }
}
