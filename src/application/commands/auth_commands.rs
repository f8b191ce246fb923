//! Auth Commands - 教师登录/登出命令

/// 登录命令
#[derive(Debug, Clone)]
pub struct LoginCommand {
    pub username: String,
    pub password: String,
}

/// 登录响应
#[derive(Debug, Clone)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
}

/// 登出命令，token 缺失时同样按未认证处理
#[derive(Debug, Clone)]
pub struct LogoutCommand {
    pub token: Option<String>,
}

/// 登出响应
#[derive(Debug, Clone)]
pub struct LogoutResponse {
    pub message: String,
}
