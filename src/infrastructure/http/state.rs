//! Application State
//!
//! 持有所有端口与 Command/Query Handlers，通过依赖注入传给路由

use std::sync::Arc;

use crate::application::{
    // Command handlers
    LoginHandler, LogoutHandler, SignUpHandler, UnregisterHandler,
    // Query handlers
    GetAuthStatusHandler, ListActivitiesHandler,
    // Ports
    ActivityRepositoryPort, CredentialSourcePort, SessionManagerPort,
};

/// 应用状态
///
/// 活动表与会话表均为内存实现，生命周期与进程一致
pub struct AppState {
    // ========== Ports ==========
    pub activity_repo: Arc<dyn ActivityRepositoryPort>,
    pub session_manager: Arc<dyn SessionManagerPort>,
    pub credential_source: Arc<dyn CredentialSourcePort>,

    // ========== Command Handlers ==========
    pub sign_up_handler: SignUpHandler,
    pub unregister_handler: UnregisterHandler,
    pub login_handler: LoginHandler,
    pub logout_handler: LogoutHandler,

    // ========== Query Handlers ==========
    pub list_activities_handler: ListActivitiesHandler,
    pub get_auth_status_handler: GetAuthStatusHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        activity_repo: Arc<dyn ActivityRepositoryPort>,
        session_manager: Arc<dyn SessionManagerPort>,
        credential_source: Arc<dyn CredentialSourcePort>,
    ) -> Self {
        Self {
            // Ports
            activity_repo: activity_repo.clone(),
            session_manager: session_manager.clone(),
            credential_source: credential_source.clone(),

            // Command handlers
            sign_up_handler: SignUpHandler::new(activity_repo.clone()),
            unregister_handler: UnregisterHandler::new(activity_repo.clone()),
            login_handler: LoginHandler::new(credential_source, session_manager.clone()),
            logout_handler: LogoutHandler::new(session_manager.clone()),

            // Query handlers
            list_activities_handler: ListActivitiesHandler::new(activity_repo),
            get_auth_status_handler: GetAuthStatusHandler::new(session_manager),
        }
    }
}
