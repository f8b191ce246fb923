//! Auth Queries

/// 查询 token 对应的登录状态
#[derive(Debug, Clone)]
pub struct GetAuthStatus {
    pub token: Option<String>,
}
