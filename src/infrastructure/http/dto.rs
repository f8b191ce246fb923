//! Data Transfer Objects

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::application::{ActivityResponse, AuthStatusResponse, LoginResponse};

// ============================================================================
// 通用
// ============================================================================

/// 仅包含提示信息的响应
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// `auth_token` 查询参数，缺失时为 None
#[derive(Debug, Default, Deserialize)]
pub struct AuthTokenParams {
    pub auth_token: Option<String>,
}

// ============================================================================
// Activity DTOs
// ============================================================================

/// 报名/取消报名的查询参数
#[derive(Debug, Deserialize)]
pub struct EmailParams {
    pub email: String,
}

/// 单个活动
#[derive(Debug, Serialize)]
pub struct ActivityDto {
    pub description: String,
    pub schedule: String,
    pub max_participants: usize,
    pub participants: Vec<String>,
}

/// 活动列表：以活动名为 key 的 JSON 对象，保持目录顺序
#[derive(Debug)]
pub struct ActivitiesResponse(pub Vec<(String, ActivityDto)>);

impl From<Vec<ActivityResponse>> for ActivitiesResponse {
    fn from(activities: Vec<ActivityResponse>) -> Self {
        Self(
            activities
                .into_iter()
                .map(|a| {
                    (
                        a.name,
                        ActivityDto {
                            description: a.description,
                            schedule: a.schedule,
                            max_participants: a.max_participants,
                            participants: a.participants,
                        },
                    )
                })
                .collect(),
        )
    }
}

impl Serialize for ActivitiesResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, activity) in &self.0 {
            map.serialize_entry(name, activity)?;
        }
        map.end()
    }
}

// ============================================================================
// Auth DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponseDto {
    pub token: String,
    pub username: String,
}

impl From<LoginResponse> for LoginResponseDto {
    fn from(result: LoginResponse) -> Self {
        Self {
            token: result.token,
            username: result.username,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AuthStatusDto {
    pub authenticated: bool,
    pub username: Option<String>,
}

impl From<AuthStatusResponse> for AuthStatusDto {
    fn from(status: AuthStatusResponse) -> Self {
        Self {
            authenticated: status.authenticated,
            username: status.username,
        }
    }
}
