//! Auth HTTP Handlers

use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::application::{GetAuthStatus, LoginCommand, LogoutCommand};
use crate::infrastructure::http::dto::{
    AuthStatusDto, AuthTokenParams, LoginRequest, LoginResponseDto, MessageResponse,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 教师登录
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponseDto>, ApiError> {
    let cmd = LoginCommand {
        username: req.username,
        password: req.password,
    };

    let result = state.login_handler.handle(cmd).await?;

    Ok(Json(LoginResponseDto::from(result)))
}

/// 教师登出
pub async fn logout(
    State(state): State<Arc<AppState>>,
    Query(params): Query<AuthTokenParams>,
) -> Result<Json<MessageResponse>, ApiError> {
    let cmd = LogoutCommand {
        token: params.auth_token,
    };

    let result = state.logout_handler.handle(cmd).await?;

    Ok(Json(MessageResponse::new(result.message)))
}

/// 查询登录状态，永不失败
pub async fn auth_status(
    State(state): State<Arc<AppState>>,
    params: Option<Query<AuthTokenParams>>,
) -> Json<AuthStatusDto> {
    let token = params.and_then(|Query(p)| p.auth_token);
    let status = state
        .get_auth_status_handler
        .handle(GetAuthStatus { token })
        .await;

    Json(AuthStatusDto::from(status))
}
