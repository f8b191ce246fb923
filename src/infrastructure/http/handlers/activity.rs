//! Activity HTTP Handlers

use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use std::sync::Arc;

use crate::application::{ListActivities, SignUpCommand, UnregisterCommand};
use crate::infrastructure::http::dto::{ActivitiesResponse, EmailParams, MessageResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::middleware::AuthenticatedTeacher;
use crate::infrastructure::http::state::AppState;

/// 列出所有活动
pub async fn list_activities(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ActivitiesResponse>, ApiError> {
    let activities = state.list_activities_handler.handle(ListActivities).await?;
    Ok(Json(ActivitiesResponse::from(activities)))
}

/// 为学生报名（需教师登录）
pub async fn sign_up(
    State(state): State<Arc<AppState>>,
    Extension(teacher): Extension<AuthenticatedTeacher>,
    Path(activity_name): Path<String>,
    Query(params): Query<EmailParams>,
) -> Result<Json<MessageResponse>, ApiError> {
    let cmd = SignUpCommand {
        activity_name,
        email: params.email,
        teacher: teacher.username,
    };

    let result = state.sign_up_handler.handle(cmd).await?;

    Ok(Json(MessageResponse::new(result.message)))
}

/// 取消学生报名（需教师登录）
pub async fn unregister(
    State(state): State<Arc<AppState>>,
    Extension(teacher): Extension<AuthenticatedTeacher>,
    Path(activity_name): Path<String>,
    Query(params): Query<EmailParams>,
) -> Result<Json<MessageResponse>, ApiError> {
    let cmd = UnregisterCommand {
        activity_name,
        email: params.email,
        teacher: teacher.username,
    };

    let result = state.unregister_handler.handle(cmd).await?;

    Ok(Json(MessageResponse::new(result.message)))
}
