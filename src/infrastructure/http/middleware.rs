//! HTTP Middleware
//!
//! - 响应状态码日志
//! - 教师身份校验（`auth_token` 查询参数 → `AuthenticatedTeacher`）

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{Query, Request, State},
    middleware::Next,
    response::Response,
};

use super::dto::AuthTokenParams;
use super::error::ApiError;
use super::state::AppState;

/// 未登录时的提示信息
pub const TEACHER_ONLY: &str = "Unauthorized. Only teachers can register or unregister students.";

/// 通过校验的教师身份，由 [`require_teacher`] 注入请求扩展
#[derive(Debug, Clone)]
pub struct AuthenticatedTeacher {
    pub username: String,
    pub token: String,
}

/// 教师身份校验中间件
///
/// token 缺失、为空或不对应任何会话时直接返回 401，
/// 后续 handler 不会执行
pub async fn require_teacher(
    State(state): State<Arc<AppState>>,
    Query(params): Query<AuthTokenParams>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = params
        .auth_token
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::Unauthorized(TEACHER_ONLY.to_string()))?;

    let session = state
        .session_manager
        .get(&token)
        .map_err(|_| ApiError::Unauthorized(TEACHER_ONLY.to_string()))?;

    request.extensions_mut().insert(AuthenticatedTeacher {
        username: session.username,
        token,
    });

    Ok(next.run(request).await)
}

/// HTTP 状态码日志中间件
///
/// 4xx 记 warn，5xx 记 error，附带耗时
/// 注意：业务错误的具体原因在 ApiError::into_response() 中记录
pub async fn status_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;
    let status = response.status();
    let elapsed_ms = started.elapsed().as_millis() as u64;

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            path = %uri,
            status = status.as_u16(),
            elapsed_ms,
            "HTTP server error"
        );
    } else if status.is_client_error() {
        tracing::warn!(
            method = %method,
            path = %uri,
            status = status.as_u16(),
            elapsed_ms,
            "HTTP client error"
        );
    }

    response
}
